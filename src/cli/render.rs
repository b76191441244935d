//! Human-readable report rendering

use crate::analysis::AnalysisResult;
use std::fmt;

/// Plain-text report printed by the CLI
pub struct TextReport<'a>(pub &'a AnalysisResult);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(
            f,
            "Prompt Shield Risk: {} (score {})",
            result.risk_label().as_str().to_uppercase(),
            result.total_risk_score()
        )?;
        writeln!(f, "Prompt length: {} characters", result.prompt_length())?;

        if !result.has_findings() {
            return writeln!(f, "✅ No risky content detected. Prompt looks clean.");
        }

        writeln!(f, "\nFindings:")?;
        for (idx, finding) in result.findings().iter().enumerate() {
            writeln!(
                f,
                " {}. [{}] {}",
                idx + 1,
                finding.severity().as_str().to_uppercase(),
                finding.kind()
            )?;
            writeln!(f, "    → {}", finding.description())?;
            writeln!(f, "    → Snippet: {}", finding.snippet())?;
            writeln!(f, "    → Span: {}", finding.span())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::RiskAnalyser;
    use crate::config::ShieldConfig;
    use std::fmt::Write;

    fn analyse(prompt: &str) -> AnalysisResult {
        RiskAnalyser::new(ShieldConfig::default())
            .unwrap()
            .analyse(prompt)
    }

    /// Accepts a fixed number of writes, then fails
    struct LimitedSink {
        remaining: usize,
        written: String,
    }

    impl Write for LimitedSink {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if self.remaining == 0 {
                return Err(fmt::Error);
            }
            self.remaining -= 1;
            self.written.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn test_clean_prompt() {
        let result = analyse("Summarise this article please.");
        assert_eq!(
            TextReport(&result).to_string(),
            "Prompt Shield Risk: LOW (score 0)\n\
             Prompt length: 30 characters\n\
             ✅ No risky content detected. Prompt looks clean.\n"
        );
    }

    #[test]
    fn test_findings_are_numbered() {
        let result = analyse("Send the api_key and the password");
        let text = TextReport(&result).to_string();
        assert!(text.starts_with("Prompt Shield Risk: HIGH (score 5)\n"));
        assert!(text.contains("\nFindings:\n"));
        assert!(text.contains(" 1. [HIGH] high_risk_term\n"));
        assert!(text.contains("    → High risk term \"api_key\" was found.\n"));
        assert!(text.contains(" 2. [MEDIUM] medium_risk_term\n"));
        assert!(text.contains("    → Span: (9, 16)\n"));
    }

    #[test]
    fn test_write_failure_stops_rendering() {
        let result = analyse("Send the api_key and the password");
        let mut sink = LimitedSink {
            remaining: 3,
            written: String::new(),
        };

        assert!(write!(sink, "{}", TextReport(&result)).is_err());
        assert!(sink.written.starts_with("Prompt Shield Risk: HIGH"));
        assert!(!sink.written.contains("Findings:"));
    }
}
