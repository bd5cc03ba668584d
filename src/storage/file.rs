//! JSON-file-backed target storage.

use super::TargetStore;
use crate::error::{ErrorContext, NameVerifyError, Result, StorageErrorKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the stored target, relative to the working directory.
pub const DEFAULT_STORAGE_PATH: &str = "storage/latest_name.json";

/// Timestamp layout of `generated_at`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The on-disk record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRecord {
    #[serde(default)]
    pub latest_name: Option<String>,
    /// Local time the target was stored, `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub generated_at: Option<String>,
}

impl TargetRecord {
    /// A record for `name` stamped with the current local time.
    #[must_use]
    pub fn now(name: &str) -> Self {
        Self {
            latest_name: Some(name.to_string()),
            generated_at: Some(chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

/// Stores the target as a small pretty-printed JSON document.
///
/// Writes go to a sibling temporary file that is renamed over the record,
/// so readers never observe a partially written slot.
#[derive(Debug, Clone)]
pub struct FileTargetStore {
    path: PathBuf,
}

impl FileTargetStore {
    /// Open a store at `path`, creating its parent directory if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                std::fs::create_dir_all(parent).map_err(|e| NameVerifyError::io(parent, e))?;
            }
        }
        Ok(Self { path })
    }

    /// Path of the record file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full record, or `None` if no record file exists.
    pub fn record(&self) -> Result<Option<TargetRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| NameVerifyError::io(&self.path, e))?;
        let record = serde_json::from_str(&content).map_err(|e| {
            NameVerifyError::storage(
                format!("reading {}", self.path.display()),
                StorageErrorKind::Corrupt(e.to_string()),
            )
        })?;
        Ok(Some(record))
    }

    fn write_record(&self, record: &TargetRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record).map_err(|e| {
            NameVerifyError::storage("encoding target record", StorageErrorKind::Encode(e.to_string()))
        })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| NameVerifyError::io(&tmp, e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| NameVerifyError::io(&self.path, e))
    }
}

impl TargetStore for FileTargetStore {
    fn get_current_target(&self) -> Result<Option<String>> {
        Ok(self.record()?.and_then(|r| r.latest_name))
    }

    fn set(&self, name: &str) -> Result<()> {
        self.write_record(&TargetRecord::now(name))
            .context("storing target")?;
        tracing::info!("Stored target name in {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Cleared target name at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(NameVerifyError::io(&self.path, e)),
        }
    }
}
