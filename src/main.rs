// Prompt Shield - Prompt risk scanner for LLM pipelines
// Copyright (c) 2025 Prompt Shield Contributors
// Licensed under the MIT License

use clap::Parser;
use prompt_shield::cli::{Cli, Commands};
use prompt_shield::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.effective_log_level(), cli.log_format) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(2);
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Prompt Shield starting");

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Some(Commands::ValidateConfig(args)) => args.execute(config_path),
        None => cli.scan.execute(config_path),
    }
}
