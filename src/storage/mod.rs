//! Single-slot storage for the current target name.
//!
//! The verification engine never reads storage itself; [`Verifier`] and
//! [`GenerationService`] reach it through the [`TargetStore`] trait.
//!
//! [`Verifier`]: crate::Verifier
//! [`GenerationService`]: crate::generator::GenerationService

mod file;

pub use file::{FileTargetStore, TargetRecord, DEFAULT_STORAGE_PATH};

use crate::error::Result;
use std::sync::RwLock;

/// A single-slot register holding the current target name.
///
/// Implementations must treat `set` and `clear` as atomic replacements of
/// the whole slot.
pub trait TargetStore: Send + Sync {
    /// The stored target, or `None` when nothing has been stored.
    fn get_current_target(&self) -> Result<Option<String>>;

    /// Replace the stored target.
    fn set(&self, name: &str) -> Result<()>;

    /// Remove the stored target. Clearing an empty slot is not an error.
    fn clear(&self) -> Result<()>;
}

impl<T: TargetStore + ?Sized> TargetStore for &T {
    fn get_current_target(&self) -> Result<Option<String>> {
        (**self).get_current_target()
    }

    fn set(&self, name: &str) -> Result<()> {
        (**self).set(name)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// In-process target slot.
#[derive(Debug, Default)]
pub struct MemoryTargetStore {
    slot: RwLock<Option<String>>,
}

impl MemoryTargetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `name`.
    #[must_use]
    pub fn with_target(name: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(name.into())),
        }
    }
}

impl TargetStore for MemoryTargetStore {
    fn get_current_target(&self) -> Result<Option<String>> {
        let slot = self
            .slot
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(slot.clone())
    }

    fn set(&self, name: &str) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = Some(name.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = None;
        Ok(())
    }
}
