//! Test-only helpers: small parameter sets and a scratch config directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::params::GeneratorParams;
use crate::io::config::{ChronalConfig, write_config};

/// 4-bit accumulator that settles on a fixed point: `2, 6, 14`, then `14` again.
pub fn tiny_params() -> GeneratorParams {
    GeneratorParams {
        seed_bits: 0,
        reset_value: 1,
        byte_mask: 255,
        accumulator_mask: 15,
        multiplier: 2,
    }
}

/// 4-bit accumulator whose sequence `6, 8, 14, 0` loops back to its first value.
pub fn ring_params() -> GeneratorParams {
    GeneratorParams {
        seed_bits: 0,
        reset_value: 2,
        byte_mask: 255,
        accumulator_mask: 15,
        multiplier: 3,
    }
}

/// Temporary directory holding an optional `chronal.toml`.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("chronal.toml")
    }

    /// Write `config` to [`TestDir::config_path`] and return that path.
    pub fn write_config(&self, config: &ChronalConfig) -> Result<PathBuf> {
        let path = self.config_path();
        write_config(&path, config)?;
        Ok(path)
    }
}
