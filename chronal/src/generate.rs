//! Run the sequence to its first repeat and summarize the run.

use anyhow::{Result, anyhow};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::bound::{CycleBoundExceeded, effective_bound};
use crate::core::params::GeneratorParams;
use crate::core::sequence::Sequence;

/// Outcome of a generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    /// Value produced by the first outer pass.
    pub first_value: u64,
    /// Last value appended before the first repeat.
    pub last_unique_value: u64,
    /// Value whose reappearance stopped the run.
    pub repeated_value: u64,
    /// Number of distinct values produced.
    pub unique_count: usize,
    /// History index where `repeated_value` was first produced.
    pub cycle_start: usize,
    /// Outer passes run, including the repeating one.
    pub iterations: u64,
}

impl CycleReport {
    /// `(first_value, last_unique_value)`.
    pub fn answers(&self) -> (u64, u64) {
        (self.first_value, self.last_unique_value)
    }

    /// Length of the cycle the sequence falls into.
    pub fn cycle_len(&self) -> usize {
        self.unique_count - self.cycle_start
    }
}

/// Run the generator with the puzzle constants.
pub fn generate() -> Result<CycleReport> {
    generate_with(&GeneratorParams::default(), None)
}

/// Run the generator with `params`, optionally capping the outer passes.
///
/// The cap can only tighten the state-space bound. Running out of passes
/// before a repeat yields a [`CycleBoundExceeded`] error; with the default
/// bound that only happens if the transformation is broken.
pub fn generate_with(params: &GeneratorParams, limit: Option<u64>) -> Result<CycleReport> {
    params.validate()?;
    let max_iterations = effective_bound(params, limit)?;
    debug!(?params, max_iterations, "generating sequence");

    let mut sequence = Sequence::new(*params);
    while sequence.iterations() < max_iterations {
        if sequence.next().is_none() {
            break;
        }
    }

    let Some(termination) = sequence.termination() else {
        return Err(CycleBoundExceeded {
            iterations: sequence.iterations(),
            max_iterations,
        }
        .into());
    };

    let history = sequence.into_history();
    let first_value = history
        .first()
        .ok_or_else(|| anyhow!("sequence terminated with an empty history"))?;
    let last_unique_value = history
        .last()
        .ok_or_else(|| anyhow!("sequence terminated with an empty history"))?;
    let cycle_start = history
        .position(termination.repeated_value)
        .ok_or_else(|| anyhow!("repeated value missing from history"))?;

    let report = CycleReport {
        first_value,
        last_unique_value,
        repeated_value: termination.repeated_value,
        unique_count: history.len(),
        cycle_start,
        iterations: termination.iterations,
    };
    info!(
        first_value,
        last_unique_value,
        unique_count = report.unique_count,
        iterations = report.iterations,
        "repeat found"
    );
    Ok(report)
}
