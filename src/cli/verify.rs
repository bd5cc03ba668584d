//! Verify command handler.
//!
//! Implements the `verify` subcommand: checks a candidate name against the
//! stored target, or against an explicit `--target`.

use super::exit_codes;
use crate::config::AppConfig;
use crate::error::NameVerifyError;
use crate::reports::{
    create_reporter_with_options, should_use_color, write_output, OutputTarget, ReportConfig,
};
use crate::verifier::{VerificationOutcome, Verifier};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Verify command configuration
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    pub candidate: String,
    /// Compare against this name instead of the stored target
    pub target: Option<String>,
    /// Matching, storage and output settings
    pub app: AppConfig,
    /// Show the signal breakdown
    pub explain: bool,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

/// Run the verify command, returning the desired exit code.
///
/// Exit codes: 0 on match, 1 on no match, 3 when no target is stored or the
/// candidate is empty. Configuration and storage failures are returned as
/// errors.
pub fn run_verify(config: VerifyConfig) -> Result<i32> {
    let outcome = verify_outcome(&config)?;

    let exit_code = match &outcome {
        VerificationOutcome::Verified(result) if result.is_match => exit_codes::SUCCESS,
        VerificationOutcome::Verified(_) => exit_codes::NO_MATCH,
        VerificationOutcome::Failed { .. } => exit_codes::ERROR,
    };

    let report_config =
        ReportConfig::default().with_breakdown(config.explain || config.app.matching.debug);
    let target = OutputTarget::from_option(config.output_file);
    let reporter = create_reporter_with_options(
        config.app.output.format,
        should_use_color(config.app.output.no_color) && target.is_terminal(),
    );
    tracing::debug!("Rendering {} output", reporter.format());
    let content = reporter
        .generate_verification_report(&outcome, &report_config)
        .context("Failed to render verification result")?;

    write_output(&content, &target, config.quiet)?;

    Ok(exit_code)
}

fn verify_outcome(config: &VerifyConfig) -> Result<VerificationOutcome> {
    if config.candidate.trim().is_empty() {
        let err = NameVerifyError::validation("Candidate name cannot be empty");
        return Ok(VerificationOutcome::failed(&err));
    }

    let engine = config
        .app
        .matching
        .build_engine()
        .context("Failed to load matching rules")?;

    if let Some(target) = &config.target {
        return Ok(VerificationOutcome::Verified(
            engine.verify_detailed(target, &config.candidate),
        ));
    }

    let store = config
        .app
        .storage
        .open()
        .context("Failed to open target storage")?;
    match Verifier::new(engine, store).verify_detailed(&config.candidate) {
        Ok(result) => Ok(VerificationOutcome::Verified(result)),
        Err(err @ NameVerifyError::NoTarget) => Ok(VerificationOutcome::failed(&err)),
        Err(err) => Err(err).context("Failed to read stored target"),
    }
}
