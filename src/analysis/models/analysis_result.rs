//! Aggregate analysis result

use super::finding::{Finding, RiskLevel};
use crate::domain::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Term lists echoed back for audit/debugging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguredTerms {
    pub high_risk_terms: Vec<String>,
    pub medium_risk_terms: Vec<String>,
}

/// Auxiliary information attached to every result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Configured maximum prompt length, in characters
    pub max_prompt_length: usize,

    /// Number of findings in the result
    pub finding_count: usize,

    /// Term lists the prompt was checked against
    pub config: ConfiguredTerms,
}

/// Outcome of analysing one prompt
///
/// Findings keep detection order: PII (in recognizer order), high risk terms,
/// medium risk terms, then at most one length violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    prompt_length: usize,
    findings: Vec<Finding>,
    total_risk_score: u64,
    risk_label: RiskLevel,
    metadata: AnalysisMetadata,
}

impl AnalysisResult {
    pub(crate) fn new(
        prompt_length: usize,
        findings: Vec<Finding>,
        total_risk_score: u64,
        risk_label: RiskLevel,
        metadata: AnalysisMetadata,
    ) -> Self {
        Self {
            prompt_length,
            findings,
            total_risk_score,
            risk_label,
            metadata,
        }
    }

    /// Length of the analysed prompt in characters
    pub fn prompt_length(&self) -> usize {
        self.prompt_length
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Severity-weighted sum over all findings
    pub fn total_risk_score(&self) -> u64 {
        self.total_risk_score
    }

    pub fn risk_label(&self) -> RiskLevel {
        self.risk_label
    }

    pub fn metadata(&self) -> &AnalysisMetadata {
        &self.metadata
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Findings with exactly the given severity, in detection order
    pub fn findings_with_severity(
        &self,
        severity: RiskLevel,
    ) -> impl Iterator<Item = &Finding> + '_ {
        self.findings
            .iter()
            .filter(move |finding| finding.severity() == severity)
    }

    /// Convert to a nested JSON value
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuild a result from the structure produced by [`to_value`](Self::to_value)
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Pretty-printed JSON, keys in declaration order
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::Span;

    fn sample_result() -> AnalysisResult {
        let findings = vec![
            Finding::new(
                "pii_email",
                RiskLevel::Medium,
                "Detected potential email.",
                "mail bob@example.org now",
                Span::new(5, 20),
            ),
            Finding::new(
                "high_risk_term",
                RiskLevel::High,
                "High risk term \"api_key\" was found.",
                "the api_key",
                Span::new(30, 37),
            ),
        ];

        AnalysisResult::new(
            60,
            findings,
            5,
            RiskLevel::High,
            AnalysisMetadata {
                max_prompt_length: 1500,
                finding_count: 2,
                config: ConfiguredTerms {
                    high_risk_terms: vec!["api_key".to_string()],
                    medium_risk_terms: vec!["password".to_string()],
                },
            },
        )
    }

    #[test]
    fn test_to_value_top_level_keys() {
        let value = sample_result().to_value().unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "prompt_length",
            "findings",
            "total_risk_score",
            "risk_label",
            "metadata",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(value["risk_label"], "high");
        assert_eq!(value["findings"][0]["span"], serde_json::json!([5, 20]));
        assert_eq!(
            value["metadata"]["config"]["high_risk_terms"],
            serde_json::json!(["api_key"])
        );
    }

    #[test]
    fn test_value_round_trip() {
        let result = sample_result();
        let restored = AnalysisResult::from_value(result.to_value().unwrap()).unwrap();
        assert_eq!(restored, result);
    }

    #[test]
    fn test_from_value_rejects_unknown_severity() {
        let mut value = sample_result().to_value().unwrap();
        value["risk_label"] = serde_json::json!("critical");
        assert!(AnalysisResult::from_value(value).is_err());
    }

    #[test]
    fn test_findings_with_severity() {
        let result = sample_result();
        let high: Vec<_> = result.findings_with_severity(RiskLevel::High).collect();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].kind(), "high_risk_term");
        assert_eq!(result.findings_with_severity(RiskLevel::Low).count(), 0);
    }

    #[test]
    fn test_pretty_json_preserves_field_order() {
        let json = sample_result().to_json_pretty().unwrap();
        let prompt_pos = json.find("\"prompt_length\"").unwrap();
        let metadata_pos = json.find("\"metadata\"").unwrap();
        assert!(prompt_pos < metadata_pos);
    }
}
