//! Chronal sequence generator.
//!
//! Runs the fixed register program's value sequence until the first repeat
//! and prints the first value and the last value before the repeat.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chronal::core::bound::{CycleBoundExceeded, effective_bound};
use chronal::core::sequence::Sequence;
use chronal::exit_codes;
use chronal::generate::generate_with;
use chronal::io::config::{ChronalConfig, DEFAULT_CONFIG_PATH, load_config, write_config};
use chronal::io::report::{render_json, render_text};
use chronal::logging;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "chronal",
    version,
    about = "Sequence generator with cycle detection"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run to the first repeat and print both answers.
    Solve {
        /// Config file (defaults apply when missing).
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print each unique value in production order.
    Sequence {
        /// Config file (defaults apply when missing).
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Stop after this many values.
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Write the default config file if missing.
    Init {
        /// Config file to create.
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            if err.downcast_ref::<CycleBoundExceeded>().is_some() {
                exit_codes::BOUND_EXCEEDED
            } else {
                exit_codes::INVALID
            }
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve { config, json } => cmd_solve(&config, json),
        Command::Sequence { config, limit } => cmd_sequence(&config, limit),
        Command::Init { config, force } => cmd_init(&config, force),
    }
}

fn cmd_solve(config_path: &Path, json: bool) -> Result<()> {
    let cfg = load_config(config_path)?;
    let report = generate_with(&cfg.params, cfg.max_iterations)?;
    let rendered = if json {
        render_json(&report)?
    } else {
        render_text(&report)
    };
    print!("{}", rendered);
    Ok(())
}

fn cmd_sequence(config_path: &Path, limit: Option<usize>) -> Result<()> {
    let cfg = load_config(config_path)?;
    let max_iterations = effective_bound(&cfg.params, cfg.max_iterations)?;
    let mut sequence = Sequence::new(cfg.params);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut printed = 0usize;
    while limit.is_none_or(|limit| printed < limit) {
        if sequence.iterations() >= max_iterations {
            return Err(CycleBoundExceeded {
                iterations: sequence.iterations(),
                max_iterations,
            }
            .into());
        }
        let Some(value) = sequence.next() else {
            break;
        };
        writeln!(out, "{}", value).context("write value")?;
        printed += 1;
    }

    if let Some(termination) = sequence.termination() {
        debug!(
            repeated_value = termination.repeated_value,
            iterations = termination.iterations,
            "sequence ended"
        );
    }
    Ok(())
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if !force && config_path.exists() {
        debug!(path = %config_path.display(), "config exists, leaving untouched");
        return Ok(());
    }
    write_config(config_path, &ChronalConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    println!("{}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_solve_defaults() {
        let cli = Cli::parse_from(["chronal", "solve"]);
        match cli.command {
            Command::Solve { config, json } => {
                assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_PATH));
                assert!(!json);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn parse_solve_json_with_config() {
        let cli = Cli::parse_from(["chronal", "solve", "--json", "-c", "alt.toml"]);
        match cli.command {
            Command::Solve { config, json } => {
                assert_eq!(config, PathBuf::from("alt.toml"));
                assert!(json);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn parse_sequence_limit() {
        let cli = Cli::parse_from(["chronal", "sequence", "--limit", "5"]);
        assert!(matches!(
            cli.command,
            Command::Sequence { limit: Some(5), .. }
        ));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["chronal", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true, .. }));
    }
}
