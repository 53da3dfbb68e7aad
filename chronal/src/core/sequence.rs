//! Lazy, finite view of the produced values.

use std::iter::FusedIterator;

use tracing::trace;

use crate::core::history::History;
use crate::core::params::GeneratorParams;
use crate::core::transform::next_value;

/// Capacity hint for the history; the puzzle constants stop near 10^4 values.
const HISTORY_CAPACITY_HINT: usize = 16 * 1024;

/// How a sequence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Termination {
    /// The produced value that was already in the history.
    pub repeated_value: u64,
    /// Outer passes run, including the one that produced the repeat.
    pub iterations: u64,
}

/// Yields every unique value in production order, then ends for good.
///
/// The repeat check runs before a value is appended, so the value that ends
/// the sequence is never yielded. Not restartable: once `None` is returned,
/// [`Sequence::termination`] describes the repeat and every later call to
/// `next` returns `None`.
#[derive(Debug, Clone)]
pub struct Sequence {
    params: GeneratorParams,
    accumulator: u64,
    iterations: u64,
    history: History,
    termination: Option<Termination>,
}

impl Sequence {
    pub fn new(params: GeneratorParams) -> Self {
        Self {
            params,
            accumulator: 0,
            iterations: 0,
            history: History::with_capacity(HISTORY_CAPACITY_HINT),
            termination: None,
        }
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_history(self) -> History {
        self.history
    }
}

impl Iterator for Sequence {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.termination.is_some() {
            return None;
        }
        let value = next_value(&self.params, self.accumulator);
        self.iterations += 1;
        debug_assert!(value <= self.params.accumulator_mask);

        if !self.history.record(value) {
            trace!(value, iterations = self.iterations, "repeat detected");
            self.termination = Some(Termination {
                repeated_value: value,
                iterations: self.iterations,
            });
            return None;
        }
        trace!(value, iterations = self.iterations, "produced value");
        self.accumulator = value;
        Some(value)
    }
}

impl FusedIterator for Sequence {}
