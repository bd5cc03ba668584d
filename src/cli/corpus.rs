//! Corpus command handler.
//!
//! Runs the builtin regression corpus through the configured engine.

use super::exit_codes;
use crate::config::AppConfig;
use crate::reports::{
    create_reporter_with_options, should_use_color, write_output, OutputTarget, ReportConfig,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Corpus command configuration
#[derive(Debug, Clone, Default)]
pub struct CorpusConfig {
    pub app: AppConfig,
    /// List only failing cases
    pub failures_only: bool,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

/// Run the corpus command. Returns 1 if any case fails.
pub fn run_corpus(config: CorpusConfig) -> Result<i32> {
    let engine = config
        .app
        .matching
        .build_engine()
        .context("Failed to load matching rules")?;

    let report = crate::corpus::run_corpus(&engine);
    tracing::info!(
        "Corpus: {}/{} passed ({:.1}%)",
        report.passed,
        report.total,
        report.success_rate
    );

    let target = OutputTarget::from_option(config.output_file);
    let reporter = create_reporter_with_options(
        config.app.output.format,
        should_use_color(config.app.output.no_color) && target.is_terminal(),
    );
    tracing::debug!("Rendering {} output", reporter.format());
    let content = reporter
        .generate_corpus_report(
            &report,
            &ReportConfig::default().with_failures_only(config.failures_only),
        )
        .context("Failed to render corpus report")?;
    write_output(&content, &target, config.quiet)?;

    Ok(if report.all_passed() {
        exit_codes::SUCCESS
    } else {
        exit_codes::NO_MATCH
    })
}
