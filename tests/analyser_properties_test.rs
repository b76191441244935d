//! Property checks over a spread of prompts

use prompt_shield::analysis::{RiskAnalyser, RiskLevel};
use prompt_shield::config::ShieldConfig;

const PROMPTS: &[&str] = &[
    "",
    "   ",
    "plain question about rust lifetimes",
    "Please email the draft to alice@example.com before noon",
    "Share the api_key for the internal tool with the vendor.",
    "SSN 123-45-6789 and card 4111 1111 1111 1111 for customer_ssn lookup",
    "server 172.16.254.1 password: hunter2, CONFIDENTIAL, Internal_Only",
    "emoji 🙂 text with ünïcödé and a trade_secret hidden in ascii",
    "\u{0}\u{1}binary-ish\u{7f} bytes 999-99-9999",
    "İstanbul office api_KEY rotation",
];

fn analysers() -> Vec<RiskAnalyser> {
    vec![
        RiskAnalyser::new(ShieldConfig::default()).unwrap(),
        RiskAnalyser::new(
            ShieldConfig::new(vec!["secret".to_string()], vec!["a".to_string()], 20).unwrap(),
        )
        .unwrap(),
    ]
}

fn kind_rank(kind: &str) -> usize {
    match kind {
        "pii_email" => 0,
        "pii_phone_number" => 1,
        "pii_ipv4" => 2,
        "pii_credit_card" => 3,
        "pii_ssn" => 4,
        "high_risk_term" => 5,
        "medium_risk_term" => 6,
        "length_violation" => 7,
        other => panic!("unexpected kind {other}"),
    }
}

#[test]
fn test_prompt_length_counts_characters() {
    for analyser in analysers() {
        for prompt in PROMPTS {
            let result = analyser.analyse(prompt);
            assert_eq!(result.prompt_length(), prompt.chars().count(), "{prompt:?}");
        }
    }
}

#[test]
fn test_findings_follow_detection_order() {
    for analyser in analysers() {
        for prompt in PROMPTS {
            let ranks: Vec<usize> = analyser
                .analyse(prompt)
                .findings()
                .iter()
                .map(|f| kind_rank(f.kind()))
                .collect();

            assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "{prompt:?}: {ranks:?}");
            assert!(ranks.iter().filter(|&&r| r == 7).count() <= 1);
        }
    }
}

#[test]
fn test_spans_stay_within_prompt() {
    for analyser in analysers() {
        for prompt in PROMPTS {
            let result = analyser.analyse(prompt);
            for finding in result.findings() {
                let span = finding.span();
                assert!(span.start <= span.end, "{prompt:?}");
                assert!(span.end <= result.prompt_length(), "{prompt:?}");
            }
        }
    }
}

#[test]
fn test_analysis_is_idempotent() {
    for analyser in analysers() {
        for prompt in PROMPTS {
            assert_eq!(analyser.analyse(prompt), analyser.analyse(prompt));
        }
    }
}

#[test]
fn test_high_finding_forces_high_label() {
    for analyser in analysers() {
        for prompt in PROMPTS {
            let result = analyser.analyse(prompt);
            if result.findings_with_severity(RiskLevel::High).next().is_some() {
                assert_eq!(result.risk_label(), RiskLevel::High, "{prompt:?}");
            }
        }
    }
}

#[test]
fn test_score_is_weighted_sum() {
    for analyser in analysers() {
        for prompt in PROMPTS {
            let result = analyser.analyse(prompt);
            let expected: u64 = result.findings().iter().map(|f| f.severity().weight()).sum();
            assert_eq!(result.total_risk_score(), expected);
            assert_eq!(result.metadata().finding_count, result.findings().len());
        }
    }
}

#[test]
fn test_extra_high_risk_occurrence_is_monotonic() {
    let analyser = RiskAnalyser::new(ShieldConfig::default()).unwrap();
    for prompt in PROMPTS {
        let before = analyser.analyse(prompt);
        let after = analyser.analyse(&format!("{prompt} api_key"));

        assert!(after.total_risk_score() >= before.total_risk_score(), "{prompt:?}");
        assert!(after.risk_label() >= before.risk_label(), "{prompt:?}");
        assert_eq!(after.risk_label(), RiskLevel::High);
    }
}

#[test]
fn test_unicode_term_spans_point_at_original_text() {
    let analyser = RiskAnalyser::new(ShieldConfig::default()).unwrap();
    let prompt = "İstanbul office api_KEY rotation";
    let result = analyser.analyse(prompt);

    let finding = &result.findings()[0];
    let span = finding.span();
    let matched: String = prompt
        .chars()
        .skip(span.start)
        .take(span.end - span.start)
        .collect();
    assert_eq!(matched, "api_KEY");
}
