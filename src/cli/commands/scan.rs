//! Scan command implementation
//!
//! Resolves the prompt text, analyses it and prints the report.

use crate::analysis::RiskAnalyser;
use crate::cli::render::TextReport;
use crate::cli::OutputFormat;
use crate::config::load_config;
use crate::domain::{Result, ShieldError};
use clap::Args;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Exit code for unresolvable input
pub const EXIT_INPUT_ERROR: i32 = 1;

/// Exit code for configuration errors
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Arguments for scanning a prompt
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// The prompt text to analyse
    #[arg(short, long)]
    pub text: Option<String>,

    /// Path to a file containing the prompt
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Choose plain text or JSON output
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ScanArgs {
    /// Execute the scan
    pub fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let stdin = std::io::stdin();
        let piped = if stdin.is_terminal() {
            None
        } else {
            Some(stdin.lock())
        };

        let prompt = match resolve_prompt(self.text.as_deref(), self.file.as_deref(), piped) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::error!(error = %e, "No prompt to analyse");
                eprintln!("{e}");
                return Ok(EXIT_INPUT_ERROR);
            }
        };

        let analyser = match load_config(config_path).and_then(RiskAnalyser::new) {
            Ok(analyser) => analyser,
            Err(e) => {
                crate::log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("{e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let result = analyser.analyse(&prompt);

        tracing::info!(
            prompt_length = result.prompt_length(),
            findings = result.findings().len(),
            total_risk_score = result.total_risk_score(),
            risk_label = %result.risk_label(),
            "Prompt analysed"
        );

        match self.format {
            OutputFormat::Json => println!("{}", result.to_json_pretty()?),
            OutputFormat::Text => print!("{}", TextReport(&result)),
        }

        Ok(0)
    }
}

/// Resolve prompt text from the CLI sources.
///
/// Preference order: non-empty `text`, then `file`, then `stdin` if it
/// carries anything other than whitespace.
pub fn resolve_prompt<R: Read>(
    text: Option<&str>,
    file: Option<&Path>,
    stdin: Option<R>,
) -> Result<String> {
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        if !path.exists() {
            return Err(ShieldError::InputResolution(format!(
                "File not found: {}",
                path.display()
            )));
        }

        return std::fs::read_to_string(path).map_err(|e| {
            ShieldError::InputResolution(format!("Failed to read {}: {e}", path.display()))
        });
    }

    if let Some(mut reader) = stdin {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer).map_err(|e| {
            ShieldError::InputResolution(format!("Failed to read standard input: {e}"))
        })?;

        if !buffer.trim().is_empty() {
            return Ok(buffer);
        }
    }

    Err(ShieldError::InputResolution(
        "No input provided. Use --text, --file or pipe data via stdin.".to_string(),
    ))
}
