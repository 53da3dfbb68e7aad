//! Iteration bound derived from the accumulator's state space.
//!
//! One outer pass is a pure function of the previous accumulator, and the
//! accumulator is masked to `accumulator_mask + 1` distinct values. A repeat
//! must therefore appear within `state_space + 1` passes. Running past that
//! means the transformation itself is broken.

use std::fmt;

use anyhow::{Result, bail};

use crate::core::params::GeneratorParams;

/// Raised when the generator runs past its iteration bound without a repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleBoundExceeded {
    pub iterations: u64,
    pub max_iterations: u64,
}

impl fmt::Display for CycleBoundExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no repeated value after {} iterations (bound {})",
            self.iterations, self.max_iterations
        )
    }
}

impl std::error::Error for CycleBoundExceeded {}

/// Passes after which a repeat is guaranteed for `params`.
pub fn state_space_bound(params: &GeneratorParams) -> u64 {
    params.state_space() + 1
}

/// Resolve the effective bound: an explicit limit may tighten, never loosen.
pub fn effective_bound(params: &GeneratorParams, limit: Option<u64>) -> Result<u64> {
    let bound = state_space_bound(params);
    match limit {
        Some(0) => bail!("max_iterations must be > 0"),
        Some(limit) => Ok(limit.min(bound)),
        None => Ok(bound),
    }
}
