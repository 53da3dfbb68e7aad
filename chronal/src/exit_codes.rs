//! Stable exit codes for chronal CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid config, I/O failure or other errors.
pub const INVALID: i32 = 1;
/// The generator ran past its iteration bound without finding a repeat.
pub const BOUND_EXCEEDED: i32 = 3;
