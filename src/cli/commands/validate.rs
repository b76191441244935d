//! Validate config command implementation

use super::scan::EXIT_CONFIG_ERROR;
use crate::analysis::RiskAnalyser;
use crate::config::load_config;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        tracing::info!(config_path = ?config_path, "Validating configuration");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        // Compiling the analyser also checks the pattern library
        let analyser = match RiskAnalyser::new(config) {
            Ok(a) => a,
            Err(e) => {
                println!("❌ Pattern library is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let config = analyser.config();
        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Max Prompt Length: {}", config.max_prompt_length());
        println!("  High Risk Terms: {:?}", config.high_risk_terms());
        println!("  Medium Risk Terms: {:?}", config.medium_risk_terms());
        if let Some(path) = config.pattern_library() {
            println!("  Pattern Library: {}", path.display());
        }
        println!(
            "  PII Recognizers: {:?}",
            analyser.registry().kinds().collect::<Vec<_>>()
        );
        Ok(0)
    }
}
