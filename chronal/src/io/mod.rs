//! I/O helpers for chronal commands.

pub mod config;
pub mod report;
