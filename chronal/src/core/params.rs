//! Transformation constants for the chronal sequence.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Bit set unconditionally on the seed at the start of every outer pass.
pub const SEED_BITS: u64 = 65_536;
/// Value the accumulator is reset to before each inner loop.
pub const RESET_VALUE: u64 = 2_176_960;
/// Mask selecting the low byte of the seed (2^8 - 1).
pub const BYTE_MASK: u64 = 255;
/// Mask truncating the accumulator to 24 bits (2^24 - 1).
pub const ACCUMULATOR_MASK: u64 = 16_777_215;
/// Multiplier applied to the accumulator on every inner step.
pub const MULTIPLIER: u64 = 65_899;

/// Divisor for the byte-wise walk over the seed. Fixed by the program shape.
pub const BYTE_STRIDE: u64 = 256;

/// Constants driving one generator run.
///
/// `Default` yields the puzzle constants. Other sets are accepted as long as
/// [`GeneratorParams::validate`] passes, which keeps every intermediate
/// product inside `u64`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorParams {
    pub seed_bits: u64,
    pub reset_value: u64,
    pub byte_mask: u64,
    pub accumulator_mask: u64,
    pub multiplier: u64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            seed_bits: SEED_BITS,
            reset_value: RESET_VALUE,
            byte_mask: BYTE_MASK,
            accumulator_mask: ACCUMULATOR_MASK,
            multiplier: MULTIPLIER,
        }
    }
}

impl GeneratorParams {
    pub fn validate(&self) -> Result<()> {
        if self.accumulator_mask == 0 {
            bail!("params.accumulator_mask must be > 0");
        }
        if self.accumulator_mask > u64::from(u32::MAX) {
            bail!(
                "params.accumulator_mask {} exceeds 32 bits",
                self.accumulator_mask
            );
        }
        if self.reset_value > u64::from(u32::MAX) {
            bail!("params.reset_value {} exceeds 32 bits", self.reset_value);
        }
        if self.multiplier > u64::from(u32::MAX) {
            bail!("params.multiplier {} exceeds 32 bits", self.multiplier);
        }
        if self.byte_mask >= BYTE_STRIDE {
            bail!(
                "params.byte_mask {} must fit in one byte (< {})",
                self.byte_mask,
                BYTE_STRIDE
            );
        }
        Ok(())
    }

    /// Number of distinct values the masked accumulator can take.
    pub fn state_space(&self) -> u64 {
        self.accumulator_mask + 1
    }
}
