//! Chronal sequence generator with cycle detection.
//!
//! Reproduces the numeric behavior of a fixed register program: each outer
//! pass folds a seed derived from the previous value into a 24-bit
//! accumulator, and the run stops at the first repeated value. The answers
//! are the first value produced and the last value produced before the
//! repeat.
//!
//! - **[`core`]**: Pure, deterministic logic (transformation, history,
//!   sequence, iteration bound). No I/O.
//! - **[`io`]**: Config file handling and report rendering.
//!
//! [`generate`] coordinates the two for the CLI.

pub mod core;
pub mod exit_codes;
pub mod generate;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
