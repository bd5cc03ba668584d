//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Brief human-readable output
    #[default]
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Options shared by all reporters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Include the signal breakdown when the result carries one
    pub show_breakdown: bool,
    /// List only failing cases in corpus reports
    pub failures_only: bool,
}

impl ReportConfig {
    #[must_use]
    pub const fn with_breakdown(mut self, show: bool) -> Self {
        self.show_breakdown = show;
        self
    }

    #[must_use]
    pub const fn with_failures_only(mut self, only: bool) -> Self {
        self.failures_only = only;
        self
    }
}
