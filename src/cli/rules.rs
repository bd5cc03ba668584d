//! Rules command handler.

use super::exit_codes;
use crate::config::MatchingConfig;
use crate::reports::{write_output, OutputTarget};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Print the effective rule set (builtins plus any rule file) as JSON.
pub fn run_rules(matching: &MatchingConfig, output_file: Option<PathBuf>) -> Result<i32> {
    let rules = matching.load_rules().context("Failed to load matching rules")?;
    let json = rules.to_json().context("Failed to serialize rule set")?;
    write_output(&json, &OutputTarget::from_option(output_file), false)?;
    Ok(exit_codes::SUCCESS)
}
