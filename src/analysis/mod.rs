//! Prompt risk analysis
//!
//! This module holds the detection-and-scoring engine.
//!
//! # Architecture
//!
//! - **Detection**: regex PII recognizers ([`detector::PatternRegistry`]) and
//!   case-insensitive term matching ([`detector::find_terms`])
//! - **Snippets**: whitespace-normalized context around each span
//! - **Scoring**: severity-weighted score and a low/medium/high label
//!
//! # Usage
//!
//! ```rust
//! use prompt_shield::analysis::{RiskAnalyser, RiskLevel};
//! use prompt_shield::config::ShieldConfig;
//!
//! # fn example() -> prompt_shield::domain::Result<()> {
//! let analyser = RiskAnalyser::new(ShieldConfig::default())?;
//! let result = analyser.analyse("card 4111-1111-1111-1111");
//!
//! assert_eq!(result.risk_label(), RiskLevel::High);
//! println!("{}", result.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

pub mod analyser;
pub mod detector;
pub mod models;
pub mod snippet;
pub mod text;

pub use analyser::RiskAnalyser;
pub use detector::PatternRegistry;
pub use models::{AnalysisMetadata, AnalysisResult, Finding, RiskLevel, Span};
