//! Show and clear command handlers for the stored target.

use super::exit_codes;
use crate::config::StorageConfig;
use crate::reports::{write_output, OutputTarget, ReportFormat};
use crate::storage::{TargetRecord, TargetStore};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Print the stored target and when it was generated.
///
/// Returns 1 when nothing is stored.
pub fn run_show(
    storage: &StorageConfig,
    format: ReportFormat,
    output_file: Option<PathBuf>,
) -> Result<i32> {
    let store = storage.open().context("Failed to open target storage")?;
    let record = store
        .record()
        .context("Failed to read stored target")?
        .filter(|r| r.latest_name.is_some());

    let content = match format {
        ReportFormat::Json => serde_json::to_string_pretty(&record.clone().unwrap_or_default())
            .context("Failed to serialize target record")?,
        ReportFormat::Summary => format_record(record.as_ref()),
    };
    write_output(&content, &OutputTarget::from_option(output_file), true)?;

    Ok(if record.is_some() {
        exit_codes::SUCCESS
    } else {
        exit_codes::NO_MATCH
    })
}

fn format_record(record: Option<&TargetRecord>) -> String {
    match record {
        Some(TargetRecord {
            latest_name: Some(name),
            generated_at,
        }) => {
            let mut text = format!("Target:     {name}");
            if let Some(at) = generated_at {
                text.push_str(&format!("\nGenerated:  {at}"));
            }
            text
        }
        _ => "No target name has been generated yet".to_string(),
    }
}

/// Remove the stored target.
pub fn run_clear(storage: &StorageConfig, quiet: bool) -> Result<i32> {
    let store = storage.open().context("Failed to open target storage")?;
    store.clear().context("Failed to clear stored target")?;
    if !quiet {
        eprintln!("Cleared stored target");
    }
    Ok(exit_codes::SUCCESS)
}
