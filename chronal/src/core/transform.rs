//! One outer pass of the chronal program, expressed over explicit registers.

use crate::core::params::{BYTE_STRIDE, GeneratorParams};

/// Register state of a single outer pass.
///
/// `accumulator` is the masked value the pass produces, `seed` is derived from
/// the previous accumulator and consumed one byte at a time, `byte` holds the
/// byte folded in by the most recent inner step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    pub accumulator: u64,
    pub seed: u64,
    pub byte: u64,
}

/// Fold one byte into the accumulator: masked add, then masked multiply.
pub fn mix_byte(params: &GeneratorParams, accumulator: u64, byte: u64) -> u64 {
    let sum = (accumulator + byte) & params.accumulator_mask;
    (sum * params.multiplier) & params.accumulator_mask
}

/// Run one outer pass starting from the previously produced value.
///
/// The inner loop always runs at least once and stops after the step that
/// sees a seed below [`BYTE_STRIDE`].
pub fn outer_pass(params: &GeneratorParams, previous: u64) -> Registers {
    let mut regs = Registers {
        accumulator: params.reset_value,
        seed: previous | params.seed_bits,
        byte: 0,
    };
    loop {
        regs.byte = regs.seed & params.byte_mask;
        regs.accumulator = mix_byte(params, regs.accumulator, regs.byte);
        if regs.seed < BYTE_STRIDE {
            break;
        }
        regs.seed /= BYTE_STRIDE;
    }
    regs
}

/// Next sequence value after `previous`.
pub fn next_value(params: &GeneratorParams, previous: u64) -> u64 {
    outer_pass(params, previous).accumulator
}
