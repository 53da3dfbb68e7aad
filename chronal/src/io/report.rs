//! Rendering of a [`CycleReport`] for the CLI.

use anyhow::{Context, Result};

use crate::generate::CycleReport;

/// Two answer lines, `Solution 1` (first value) and `Solution 2` (last unique value).
pub fn render_text(report: &CycleReport) -> String {
    let (first, last_unique) = report.answers();
    format!("Solution 1: {}\nSolution 2: {}\n", first, last_unique)
}

/// Pretty-printed JSON with trailing newline.
pub fn render_json(report: &CycleReport) -> Result<String> {
    let mut payload = serde_json::to_string_pretty(report).context("serialize report json")?;
    payload.push('\n');
    Ok(payload)
}
