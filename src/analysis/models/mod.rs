//! Analysis data models

pub mod analysis_result;
pub mod finding;

pub use analysis_result::{AnalysisMetadata, AnalysisResult, ConfiguredTerms};
pub use finding::{Finding, RiskLevel, Span};
