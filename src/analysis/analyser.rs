//! Prompt risk analyser
//!
//! [`RiskAnalyser`] runs the PII recognizers, the high and medium risk term
//! lists and the length check over a prompt, then scores and labels the
//! findings.
//!
//! # Examples
//!
//! ```
//! use prompt_shield::analysis::{RiskAnalyser, RiskLevel};
//! use prompt_shield::config::ShieldConfig;
//!
//! # fn example() -> prompt_shield::domain::Result<()> {
//! let analyser = RiskAnalyser::new(ShieldConfig::default())?;
//! let result = analyser.analyse("Share the api_key for the internal tool with the vendor.");
//!
//! assert_eq!(result.risk_label(), RiskLevel::High);
//! # Ok(())
//! # }
//! ```

use crate::analysis::detector::{find_terms, pii_severity, PatternRegistry};
use crate::analysis::models::{
    AnalysisMetadata, AnalysisResult, ConfiguredTerms, Finding, RiskLevel, Span,
};
use crate::analysis::snippet::{snippet, DEFAULT_SNIPPET_RADIUS};
use crate::analysis::text::CharIndex;
use crate::config::ShieldConfig;
use crate::domain::Result;

/// Total score at or above which the label is high
pub const HIGH_SCORE_THRESHOLD: u64 = 15;

/// Total score at or above which the label is at least medium
pub const MEDIUM_SCORE_THRESHOLD: u64 = 6;

/// Characters past the limit covered by a length violation span
const LENGTH_VIOLATION_WINDOW: usize = 40;

/// Analyses prompts against one configuration
///
/// Holds no mutable state, so a single instance can be shared across
/// threads and called concurrently.
#[derive(Debug, Clone)]
pub struct RiskAnalyser {
    config: ShieldConfig,
    registry: PatternRegistry,
}

impl RiskAnalyser {
    /// Create an analyser with the built-in recognizers plus the configured
    /// pattern library, if any
    pub fn new(config: ShieldConfig) -> Result<Self> {
        let mut registry = PatternRegistry::default_patterns()?;
        if let Some(path) = config.pattern_library() {
            registry.extend_from_file(path)?;
            tracing::info!(
                pattern_library = %path.display(),
                kinds = registry.all_patterns().len(),
                "Loaded custom pattern library"
            );
        }

        Ok(Self::with_registry(config, registry))
    }

    /// Create an analyser with a caller-supplied registry
    pub fn with_registry(config: ShieldConfig, registry: PatternRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &ShieldConfig {
        &self.config
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Analyse a prompt. Never fails; an empty prompt yields no findings.
    pub fn analyse(&self, prompt: &str) -> AnalysisResult {
        let index = CharIndex::new(prompt);
        let prompt_length = index.char_count();
        let mut findings = Vec::new();

        for pii in self.registry.scan_indexed(prompt, &index) {
            tracing::debug!(kind = %pii.kind, span = %pii.span, "PII finding registered");
            findings.push(Finding::new(
                format!("pii_{}", pii.kind),
                pii_severity(&pii.kind),
                format!("Detected potential {}.", pii.kind.replace('_', " ")),
                snippet(prompt, &index, pii.span, DEFAULT_SNIPPET_RADIUS),
                pii.span,
            ));
        }

        for found in find_terms(prompt, self.config.high_risk_terms()) {
            tracing::debug!(term = %found.term, span = %found.span, "High risk term detected");
            findings.push(Finding::new(
                "high_risk_term",
                RiskLevel::High,
                format!("High risk term \"{}\" was found.", found.term),
                snippet(prompt, &index, found.span, DEFAULT_SNIPPET_RADIUS),
                found.span,
            ));
        }

        for found in find_terms(prompt, self.config.medium_risk_terms()) {
            tracing::debug!(term = %found.term, span = %found.span, "Medium risk term detected");
            findings.push(Finding::new(
                "medium_risk_term",
                RiskLevel::Medium,
                format!("Medium risk term \"{}\" was found.", found.term),
                snippet(prompt, &index, found.span, DEFAULT_SNIPPET_RADIUS),
                found.span,
            ));
        }

        if let Some(violation) = self.length_violation(prompt, &index) {
            findings.push(violation);
        }

        let total_risk_score = total_risk_score(&findings);
        let risk_label = risk_label(&findings, total_risk_score);

        tracing::debug!(
            findings = findings.len(),
            total_risk_score,
            risk_label = %risk_label,
            "Analysis complete"
        );

        let metadata = AnalysisMetadata {
            max_prompt_length: self.config.max_prompt_length(),
            finding_count: findings.len(),
            config: ConfiguredTerms {
                high_risk_terms: self.config.high_risk_terms().to_vec(),
                medium_risk_terms: self.config.medium_risk_terms().to_vec(),
            },
        };

        AnalysisResult::new(
            prompt_length,
            findings,
            total_risk_score,
            risk_label,
            metadata,
        )
    }

    /// Build the length violation finding, if the prompt is over the limit.
    ///
    /// The span does not locate a match: it marks up to the first
    /// [`LENGTH_VIOLATION_WINDOW`] characters past the limit so the snippet
    /// shows where the overflow starts.
    fn length_violation(&self, prompt: &str, index: &CharIndex) -> Option<Finding> {
        let prompt_length = index.char_count();
        let max = self.config.max_prompt_length();
        if prompt_length <= max {
            return None;
        }

        let overage = prompt_length - max;
        // prompt_length > max * 1.2, without floating point
        let severity = if (prompt_length as u128) * 5 > (max as u128) * 6 {
            RiskLevel::High
        } else {
            RiskLevel::Medium
        };
        let span = Span::new(
            max,
            prompt_length.min(max.saturating_add(LENGTH_VIOLATION_WINDOW)),
        );

        tracing::debug!(overage, max_prompt_length = max, "Length violation detected");

        Some(Finding::new(
            "length_violation",
            severity,
            format!("Prompt length exceeded by {overage} characters (max {max})."),
            snippet(prompt, index, span, DEFAULT_SNIPPET_RADIUS),
            span,
        ))
    }
}

/// Sum of severity weights
pub fn total_risk_score(findings: &[Finding]) -> u64 {
    findings.iter().map(|f| f.severity().weight()).sum()
}

/// Coarse label for a set of findings.
///
/// Any high severity finding forces a high label regardless of score.
pub fn risk_label(findings: &[Finding], total_risk_score: u64) -> RiskLevel {
    if findings.iter().any(|f| f.severity() == RiskLevel::High)
        || total_risk_score >= HIGH_SCORE_THRESHOLD
    {
        RiskLevel::High
    } else if total_risk_score >= MEDIUM_SCORE_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
