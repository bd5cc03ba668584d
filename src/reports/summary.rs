//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::corpus::{CaseResult, CorpusReport};
use crate::verifier::{VerificationOutcome, VerificationResult};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn verdict(is_match: bool) -> &'static str {
    if is_match {
        "match"
    } else {
        "no match"
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn result_lines(&self, result: &VerificationResult, config: &ReportConfig) -> Vec<String> {
        let (label, color) = if result.is_match {
            ("MATCH", "green")
        } else {
            ("NO MATCH", "red")
        };

        let mut lines = vec![
            format!("{}     {}", self.color("Target:", "cyan"), result.target_name),
            format!("{}  {}", self.color("Candidate:", "cyan"), result.candidate_name),
            format!(
                "{}     {}",
                self.color("Result:", "cyan"),
                self.color(&format!("{label} ({}%)", result.confidence), color)
            ),
            format!("{}     {}", self.color("Reason:", "cyan"), result.reason),
        ];

        if config.show_breakdown {
            if let Some(breakdown) = &result.breakdown {
                lines.push(format!(
                    "{}    {}",
                    self.color("Signals:", "cyan"),
                    self.color(&breakdown.summary(), "dim")
                ));
            }
        }
        lines
    }

    fn case_lines(&self, case: &CaseResult) -> [String; 2] {
        let status = if case.passed {
            self.color("PASS", "green")
        } else {
            self.color("FAIL", "red")
        };
        let header = format!(
            "  {status} {:>3}  {} vs {}  ({}, {}%)",
            format!("#{}", case.number),
            case.case.target,
            case.case.candidate,
            verdict(case.actual),
            case.confidence
        );
        let detail = if case.passed {
            format!("        {}", self.color(case.case.description, "dim"))
        } else {
            format!(
                "        expected {}: {}",
                verdict(case.case.expected),
                self.color(&case.reason, "yellow")
            )
        };
        [header, detail]
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_verification_report(
        &self,
        outcome: &VerificationOutcome,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let lines = match outcome {
            VerificationOutcome::Verified(result) => self.result_lines(result, config),
            VerificationOutcome::Failed { message, .. } => {
                vec![format!("{} {message}", self.color("Error:", "red"))]
            }
        };
        Ok(lines.join("\n"))
    }

    fn generate_corpus_report(
        &self,
        report: &CorpusReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color("Name Verification Corpus", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        for case in &report.results {
            if config.failures_only && case.passed {
                continue;
            }
            lines.extend(self.case_lines(case));
        }

        lines.push(String::new());
        let totals = format!(
            "{}/{} passed ({:.1}%)",
            report.passed, report.total, report.success_rate
        );
        let color = if report.all_passed() { "green" } else { "red" };
        lines.push(format!("{} {}", self.color("Results:", "bold"), self.color(&totals, color)));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{run_cases, CorpusCase};
    use crate::error::NameVerifyError;
    use crate::VerificationEngine;

    fn plain() -> SummaryReporter {
        SummaryReporter::new().no_color()
    }

    #[test]
    fn test_verification_summary() {
        let result = VerificationEngine::default().verify("Jean-Luc Picard", "Jean Luc Picard");
        let text = plain()
            .generate_verification_report(
                &VerificationOutcome::Verified(result),
                &ReportConfig::default(),
            )
            .unwrap();
        insta::assert_snapshot!(text, @r###"
        Target:     Jean-Luc Picard
        Candidate:  Jean Luc Picard
        Result:     MATCH (100%)
        Reason:     Exact match after normalization (removing punctuation, case differences)
        "###);
    }

    #[test]
    fn test_error_summary() {
        let outcome = VerificationOutcome::from(Err(NameVerifyError::NoTarget));
        let text = plain()
            .generate_verification_report(&outcome, &ReportConfig::default())
            .unwrap();
        assert_eq!(text, "Error: No target name has been generated yet");
    }

    #[test]
    fn test_signals_line_requires_flag_and_breakdown() {
        let result = VerificationEngine::default().verify_detailed("Michael Thompson", "Michelle Thompson");
        let outcome = VerificationOutcome::Verified(result);

        let text = plain()
            .generate_verification_report(&outcome, &ReportConfig::default())
            .unwrap();
        assert!(!text.contains("Signals:"));

        let text = plain()
            .generate_verification_report(&outcome, &ReportConfig::default().with_breakdown(true))
            .unwrap();
        assert!(text.contains("NO MATCH (74%)"));
        assert!(text.contains("Signals:"));
        assert!(text.contains("capped to 0.74"));
    }

    #[test]
    fn test_colored_output_has_escapes() {
        let result = VerificationEngine::default().verify("Ali Hassan", "Hassan Ali");
        let text = SummaryReporter::new()
            .generate_verification_report(
                &VerificationOutcome::Verified(result),
                &ReportConfig::default(),
            )
            .unwrap();
        assert!(text.contains("\x1b[31mNO MATCH (30%)\x1b[0m"));
    }

    #[test]
    fn test_corpus_summary() {
        let cases = [
            CorpusCase {
                target: "Al-Hilal",
                candidate: "alhilal",
                expected: true,
                description: "Hyphen and casing differences only",
            },
            CorpusCase {
                target: "Ali Hassan",
                candidate: "Hassan Ali",
                expected: true,
                description: "wrong on purpose",
            },
        ];
        let report = run_cases(&VerificationEngine::default(), &cases);

        let text = plain()
            .generate_corpus_report(&report, &ReportConfig::default())
            .unwrap();
        assert!(text.contains("PASS  #1  Al-Hilal vs alhilal  (match, 81%)"));
        assert!(text.contains("FAIL  #2  Ali Hassan vs Hassan Ali  (no match, 30%)"));
        assert!(text.contains("expected match: Names contain the same tokens"));
        assert!(text.ends_with("Results: 1/2 passed (50.0%)"));

        let failures = plain()
            .generate_corpus_report(&report, &ReportConfig::default().with_failures_only(true))
            .unwrap();
        assert!(!failures.contains("PASS"));
    }
}
