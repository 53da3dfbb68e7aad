//! Order-preserving record of produced values.

use std::collections::HashSet;

/// Duplicate-free, append-only history.
///
/// Membership is answered by the set; production order lives in the vec, so
/// both the first and the most recently appended value are O(1).
#[derive(Debug, Clone, Default)]
pub struct History {
    seen: HashSet<u64>,
    order: Vec<u64>,
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Append `value` unless it was already recorded.
    ///
    /// Returns `false` (and leaves the history untouched) on a repeat.
    pub fn record(&mut self, value: u64) -> bool {
        if !self.seen.insert(value) {
            return false;
        }
        self.order.push(value);
        true
    }

    pub fn contains(&self, value: u64) -> bool {
        self.seen.contains(&value)
    }

    pub fn first(&self) -> Option<u64> {
        self.order.first().copied()
    }

    pub fn last(&self) -> Option<u64> {
        self.order.last().copied()
    }

    /// Position at which `value` was appended.
    pub fn position(&self, value: u64) -> Option<usize> {
        if !self.contains(value) {
            return None;
        }
        self.order.iter().position(|&seen| seen == value)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn values(&self) -> &[u64] {
        &self.order
    }
}
