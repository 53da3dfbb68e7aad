//! Generator configuration stored in `chronal.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::params::GeneratorParams;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "chronal.toml";

/// Generator configuration (TOML).
///
/// Missing fields default to the puzzle constants and the state-space bound.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChronalConfig {
    /// Cap on outer passes. Omitted means the state-space bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<u64>,

    pub params: GeneratorParams,
}

impl ChronalConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == Some(0) {
            return Err(anyhow!("max_iterations must be > 0"));
        }
        self.params.validate()
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ChronalConfig::default()`.
pub fn load_config(path: &Path) -> Result<ChronalConfig> {
    if !path.exists() {
        let cfg = ChronalConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ChronalConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ChronalConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
