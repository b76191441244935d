//! Finding data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a single finding, and the coarse label of a whole analysis
///
/// Variants are declared in ascending order so that the derived `Ord`
/// gives `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Score contribution of a finding with this severity
    pub fn weight(self) -> u64 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }

    /// Lowercase tag used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open `[start, end)` interval of character offsets into a prompt
///
/// Serialized as a two-element array, e.g. `[10, 27]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Self { start, end }
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// One detected issue inside a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    kind: String,
    severity: RiskLevel,
    description: String,
    snippet: String,
    span: Span,
}

impl Finding {
    /// Create a new finding
    pub fn new(
        kind: impl Into<String>,
        severity: RiskLevel,
        description: impl Into<String>,
        snippet: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            kind: kind.into(),
            severity,
            description: description.into(),
            snippet: snippet.into(),
            span,
        }
    }

    /// Category tag, e.g. `pii_email`, `high_risk_term`, `length_violation`
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn severity(&self) -> RiskLevel {
        self.severity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whitespace-normalized excerpt around the span
    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    pub fn span(&self) -> Span {
        self.span
    }
}
