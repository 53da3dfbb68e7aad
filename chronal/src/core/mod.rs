//! Deterministic, pure logic for the chronal sequence.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod bound;
pub mod history;
pub mod params;
pub mod sequence;
pub mod transform;
