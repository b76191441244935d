//! Pattern library for PII detection
//!
//! Recognizers are `(kind, compiled regex)` pairs evaluated independently in
//! registration order. The five built-ins are always registered first;
//! further kinds can be appended programmatically or from a TOML pattern
//! library.

use crate::analysis::models::{RiskLevel, Span};
use crate::analysis::text::CharIndex;
use crate::domain::{Result, ShieldError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Built-in recognizers, in scan order
const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("email", r"[\w\.-]+@[\w\.-]+\.\w+"),
    (
        "phone_number",
        r"\b(?:\+?\d{1,3}[-.\s]?)?(?:\(\d{2,4}\)|\d{2,4})[-.\s]?\d{3,4}[-.\s]?\d{3,4}\b",
    ),
    (
        "ipv4",
        r"\b(?:(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\b",
    ),
    // No Luhn check: over-flag rather than miss.
    ("credit_card", r"\b(?:\d[ -]?){13,16}\b"),
    ("ssn", r"\b\d{3}-\d{2}-\d{4}\b"),
];

/// Fixed severity per PII kind
static PII_SEVERITY: Lazy<HashMap<&'static str, RiskLevel>> = Lazy::new(|| {
    HashMap::from([
        ("email", RiskLevel::Medium),
        ("phone_number", RiskLevel::Medium),
        ("ipv4", RiskLevel::Medium),
        ("credit_card", RiskLevel::High),
        ("ssn", RiskLevel::High),
    ])
});

/// Severity for a PII kind; kinds outside the fixed table are medium
pub fn pii_severity(kind: &str) -> RiskLevel {
    PII_SEVERITY.get(kind).copied().unwrap_or(RiskLevel::Medium)
}

/// Raw match produced by [`PatternRegistry::scan`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiiMatch {
    /// Recognizer kind, e.g. `email`
    pub kind: String,
    /// Matched text
    pub value: String,
    /// Character span in the scanned text
    pub span: Span,
}

/// Compiled recognizer
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub kind: String,
    pub regex: Regex,
}

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    pub kind: String,
    pub pattern: String,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    #[serde(default)]
    patterns: Vec<PatternDefinition>,
}

/// Pattern registry for PII detection
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
}

impl PatternRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Create a registry holding the built-in recognizers
    pub fn default_patterns() -> Result<Self> {
        let mut registry = Self::empty();
        for (kind, pattern) in BUILTIN_PATTERNS {
            registry.register(kind, pattern)?;
        }
        Ok(registry)
    }

    /// Append a recognizer after the existing ones
    pub fn register(&mut self, kind: &str, pattern: &str) -> Result<()> {
        let kind = kind.trim();
        if kind.is_empty() {
            return Err(ShieldError::Pattern(
                "Pattern kind must not be empty".to_string(),
            ));
        }
        if self.patterns.iter().any(|p| p.kind == kind) {
            return Err(ShieldError::Pattern(format!(
                "Pattern kind '{kind}' is already registered"
            )));
        }

        let regex = Regex::new(pattern)
            .map_err(|e| ShieldError::Pattern(format!("Invalid regex for '{kind}': {e}")))?;

        tracing::debug!(kind = %kind, "Registered PII pattern");
        self.patterns.push(CompiledPattern {
            kind: kind.to_string(),
            regex,
        });
        Ok(())
    }

    /// Append every recognizer defined in TOML content
    pub fn extend_from_toml(&mut self, content: &str) -> Result<()> {
        let library: PatternLibrary = toml::from_str(content)
            .map_err(|e| ShieldError::Pattern(format!("Failed to parse pattern library: {e}")))?;

        for def in &library.patterns {
            self.register(&def.kind, &def.pattern)?;
        }
        Ok(())
    }

    /// Append every recognizer defined in a TOML pattern library file
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ShieldError::Pattern(format!(
                "Failed to read pattern library {}: {e}",
                path.display()
            ))
        })?;

        self.extend_from_toml(&content)
    }

    /// Get all patterns, in scan order
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Registered kinds, in scan order
    pub fn kinds(&self) -> impl Iterator<Item = &str> + '_ {
        self.patterns.iter().map(|p| p.kind.as_str())
    }

    /// Run every recognizer over `text`.
    ///
    /// Each recognizer contributes its own leftmost, non-overlapping matches.
    /// Matches from different recognizers may overlap and are all kept.
    pub fn scan(&self, text: &str) -> Vec<PiiMatch> {
        self.scan_indexed(text, &CharIndex::new(text))
    }

    /// [`scan`](Self::scan) with a caller-built index of `text`
    pub fn scan_indexed(&self, text: &str, index: &CharIndex) -> Vec<PiiMatch> {
        let mut matches = Vec::new();

        for pattern in &self.patterns {
            for found in pattern.regex.find_iter(text) {
                matches.push(PiiMatch {
                    kind: pattern.kind.clone(),
                    value: found.as_str().to_string(),
                    span: Span::new(
                        index.char_offset(found.start()),
                        index.char_offset(found.end()),
                    ),
                });
            }
        }

        matches
    }
}
