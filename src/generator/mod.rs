//! Target name generation.
//!
//! Generators produce an opaque target string from a free-text prompt.
//! [`GenerationService`] stores each generated name so that later
//! verifications run against it.

#[cfg(feature = "llm")]
mod llm;
mod pattern;

#[cfg(feature = "llm")]
pub use llm::{LlmGenerator, LlmGeneratorConfig};
pub use pattern::{NameStyle, PatternGenerator};

use crate::error::{GenerationErrorKind, NameVerifyError, Result};
use crate::storage::TargetStore;

/// Produces a single name from a prompt.
pub trait NameGenerator: Send + Sync {
    /// Generate one name. Empty or whitespace-only prompts are rejected.
    fn generate(&self, prompt: &str) -> Result<String>;

    /// Short generator name for logging.
    fn name(&self) -> &'static str {
        "generator"
    }
}

impl<G: NameGenerator + ?Sized> NameGenerator for Box<G> {
    fn generate(&self, prompt: &str) -> Result<String> {
        (**self).generate(prompt)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Reject empty prompts.
pub(crate) fn validate_prompt(prompt: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        return Err(NameVerifyError::generation(
            "validating prompt",
            GenerationErrorKind::EmptyPrompt,
        ));
    }
    Ok(())
}

/// Generates a target name and stores it as the current target.
#[derive(Debug)]
pub struct GenerationService<G, S> {
    generator: G,
    store: S,
}

impl<G: NameGenerator, S: TargetStore> GenerationService<G, S> {
    pub const fn new(generator: G, store: S) -> Self {
        Self { generator, store }
    }

    /// Generate a name from `prompt` and store it.
    pub fn generate(&self, prompt: &str) -> Result<String> {
        let name = self.generator.generate(prompt)?;
        self.store.set(&name)?;
        tracing::info!("Generated target name with {} generator", self.generator.name());
        Ok(name)
    }

    /// The currently stored target.
    pub fn latest(&self) -> Result<Option<String>> {
        self.store.get_current_target()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
