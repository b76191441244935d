// Prompt Shield - Prompt risk scanner for LLM pipelines
// Copyright (c) 2025 Prompt Shield Contributors
// Licensed under the MIT License

//! # Prompt Shield
//!
//! Prompt Shield scans free-form prompts before they are sent to a language
//! model and reports content that is risky to transmit: personally
//! identifiable information, organization-defined sensitive terms, and
//! excessive length.
//!
//! The report lists every finding with its severity, a context snippet and
//! its character span, together with a severity-weighted score and a coarse
//! low/medium/high label. Deciding whether to block, redact or allow the
//! prompt is left to the caller.
//!
//! ## Architecture
//!
//! - [`analysis`] - Detection and scoring engine
//! - [`config`] - Configuration management
//! - [`domain`] - Error types
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust
//! use prompt_shield::analysis::RiskAnalyser;
//! use prompt_shield::config::ShieldConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ShieldConfig::new(
//!     vec!["launch_codes".to_string()],
//!     vec!["draft".to_string()],
//!     1500,
//! )?;
//! let analyser = RiskAnalyser::new(config)?;
//!
//! let result = analyser.analyse("Email the draft to alice@example.com");
//! for finding in result.findings() {
//!     println!("[{}] {} at {}", finding.severity(), finding.kind(), finding.span());
//! }
//! println!("Risk: {} (score {})", result.risk_label(), result.total_risk_score());
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! [`analysis::RiskAnalyser`] holds only immutable state. Wrap it in an
//! `Arc` and call [`analyse`](analysis::RiskAnalyser::analyse) from as many
//! threads as needed.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
