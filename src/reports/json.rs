//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::corpus::{CaseResult, CorpusReport};
use crate::verifier::VerificationOutcome;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Corpus report with an optionally filtered result list.
#[derive(Serialize)]
struct CorpusJson<'a> {
    total: usize,
    passed: usize,
    failed: usize,
    success_rate: f64,
    results: Vec<&'a CaseResult>,
}

impl ReportGenerator for JsonReporter {
    fn generate_verification_report(
        &self,
        outcome: &VerificationOutcome,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        match outcome {
            VerificationOutcome::Verified(result)
                if result.breakdown.is_some() && !config.show_breakdown =>
            {
                let mut stripped = result.clone();
                stripped.breakdown = None;
                self.render(&VerificationOutcome::Verified(stripped))
            }
            _ => self.render(outcome),
        }
    }

    fn generate_corpus_report(
        &self,
        report: &CorpusReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let results = if config.failures_only {
            report.failures().collect()
        } else {
            report.results.iter().collect()
        };
        self.render(&CorpusJson {
            total: report.total,
            passed: report.passed,
            failed: report.failed,
            success_rate: report.success_rate,
            results,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{run_cases, CorpusCase};
    use crate::error::NameVerifyError;
    use crate::VerificationEngine;

    #[test]
    fn test_no_target_error_json() {
        let outcome = VerificationOutcome::from(Err(NameVerifyError::NoTarget));
        let json = JsonReporter::new()
            .generate_verification_report(&outcome, &ReportConfig::default())
            .unwrap();
        insta::assert_snapshot!(json, @r###"
        {
          "error": true,
          "message": "No target name has been generated yet"
        }
        "###);
    }

    #[test]
    fn test_exact_match_json() {
        let result = VerificationEngine::default().verify("Jean-Luc Picard", "Jean Luc Picard");
        let json = JsonReporter::new()
            .generate_verification_report(
                &VerificationOutcome::Verified(result),
                &ReportConfig::default(),
            )
            .unwrap();
        insta::assert_snapshot!(json, @r###"
        {
          "match": true,
          "confidence": 100,
          "reason": "Exact match after normalization (removing punctuation, case differences)",
          "target_name": "Jean-Luc Picard",
          "candidate_name": "Jean Luc Picard"
        }
        "###);
    }

    #[test]
    fn test_breakdown_only_when_requested() {
        let result = VerificationEngine::default().verify_detailed("Bob Ellensworth", "Robert Ellensworth");
        let outcome = VerificationOutcome::Verified(result);
        let reporter = JsonReporter::new().pretty(false);

        let plain = reporter
            .generate_verification_report(&outcome, &ReportConfig::default())
            .unwrap();
        assert!(!plain.contains("breakdown"));

        let detailed = reporter
            .generate_verification_report(&outcome, &ReportConfig::default().with_breakdown(true))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&detailed).unwrap();
        assert_eq!(value["breakdown"]["path"], "blended");
        assert_eq!(value["breakdown"]["nickname_boost"], 0.2);
    }

    #[test]
    fn test_corpus_failures_only() {
        let cases = [
            CorpusCase {
                target: "Ali Hassan",
                candidate: "Ali Hassan",
                expected: true,
                description: "identical",
            },
            CorpusCase {
                target: "Ali Hassan",
                candidate: "Hassan Ali",
                expected: true,
                description: "wrong on purpose",
            },
        ];
        let report = run_cases(&VerificationEngine::default(), &cases);
        let json = JsonReporter::new()
            .generate_corpus_report(&report, &ReportConfig::default().with_failures_only(true))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["failed"], 1);
        assert_eq!(value["results"].as_array().unwrap().len(), 1);
        assert_eq!(value["results"][0]["number"], 2);
        assert_eq!(value["results"][0]["description"], "wrong on purpose");
    }
}
