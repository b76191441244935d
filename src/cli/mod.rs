//! CLI interface and argument parsing
//!
//! Without a subcommand the CLI scans a prompt; `validate-config` checks the
//! configuration instead.

pub mod commands;
pub mod render;

use crate::logging::LogFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Prompt Shield - scan prompts for risky content before sending them to an LLM
#[derive(Parser, Debug)]
#[command(name = "prompt-shield")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, env = "PROMPT_SHIELD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PROMPT_SHIELD_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub scan: commands::scan::ScanArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Effective log level: `--verbose` wins over `--log-level`
    pub fn effective_log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            self.log_level.as_deref().unwrap_or("info")
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the configuration and print a summary
    ValidateConfig(commands::validate::ValidateArgs),
}

/// Report rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
