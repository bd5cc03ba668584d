//! Report generation for verification results and corpus runs.
//!
//! Two output formats are provided:
//! - Summary: compact, optionally coloured terminal output
//! - JSON: the wire shape of [`VerificationOutcome`] and [`CorpusReport`]

mod json;
mod output;
mod summary;
mod types;

pub use json::JsonReporter;
pub use output::{should_use_color, write_output, OutputTarget};
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat};

use crate::corpus::CorpusReport;
use crate::verifier::VerificationOutcome;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a single verification outcome
    fn generate_verification_report(
        &self,
        outcome: &VerificationOutcome,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Render a corpus run
    fn generate_corpus_report(
        &self,
        report: &CorpusReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
