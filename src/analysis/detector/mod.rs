//! Detection of PII patterns and configured risk terms

pub mod patterns;
pub mod terms;

pub use patterns::{pii_severity, PatternRegistry, PiiMatch};
pub use terms::{find_terms, TermMatch};
