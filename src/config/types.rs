//! Configuration types for name-verify operations.

use super::defaults::{
    API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_PRESET, DEFAULT_TIMEOUT_SECS,
};
use crate::error::Result;
use crate::matching::{MatchConfig, VariationRuleSet};
use crate::reports::ReportFormat;
use crate::storage::{FileTargetStore, DEFAULT_STORAGE_PATH};
use crate::verifier::VerificationEngine;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file values with [`AppConfig::apply_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Verification scoring (preset, threshold, rule file)
    pub matching: MatchingConfig,
    /// Where the current target name is stored
    pub storage: StorageConfig,
    /// Target name generation
    pub generator: GeneratorConfig,
    /// Output configuration (format, colors)
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the matching preset.
    pub fn preset(mut self, preset: impl Into<String>) -> Self {
        self.config.matching.preset = preset.into();
        self
    }

    /// Set the matching threshold.
    pub const fn threshold(mut self, threshold: f64) -> Self {
        self.config.matching.threshold = Some(threshold);
        self
    }

    /// Set the target storage file.
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.storage.path = path.into();
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Verification scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Scoring preset: strict, balanced, permissive
    pub preset: String,
    /// Custom match threshold (overrides preset)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub threshold: Option<f64>,
    /// JSON or YAML rule file merged over the builtin rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_file: Option<PathBuf>,
    /// Include the signal breakdown in verification output
    pub debug: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            preset: DEFAULT_PRESET.to_string(),
            threshold: None,
            rules_file: None,
            debug: false,
        }
    }
}

impl MatchingConfig {
    /// Convert preset name and threshold to a `MatchConfig`.
    #[must_use]
    pub fn to_match_config(&self) -> MatchConfig {
        let mut config = MatchConfig::from_preset(&self.preset).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown matching preset '{}', using 'balanced'. Valid: strict, balanced, permissive",
                self.preset
            );
            MatchConfig::balanced()
        });

        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }

        config
    }

    /// The builtin rules, extended by `rules_file` when set.
    pub fn load_rules(&self) -> Result<VariationRuleSet> {
        match &self.rules_file {
            Some(path) => VariationRuleSet::from_file(path),
            None => Ok(VariationRuleSet::builtin()),
        }
    }

    /// Build a verification engine from this configuration.
    pub fn build_engine(&self) -> Result<VerificationEngine> {
        Ok(VerificationEngine::new(self.load_rules()?, self.to_match_config()))
    }
}

/// Target storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file holding the current target name
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl StorageConfig {
    /// Open the configured file store.
    pub fn open(&self) -> Result<FileTargetStore> {
        FileTargetStore::new(&self.path)
    }
}

/// Name generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Chat-completion API key; `OPENAI_API_KEY` is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Chat-completion model
    pub model: String,
    /// Chat-completion endpoint URL
    pub endpoint: String,
    /// Request timeout in seconds
    #[schemars(range(min = 1))]
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeneratorConfig {
    /// The configured API key, falling back to the environment.
    ///
    /// Blank keys count as unset.
    #[must_use]
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }

    /// LLM client settings, if an API key is available.
    #[cfg(feature = "llm")]
    #[must_use]
    pub fn to_llm_config(&self) -> Option<crate::generator::LlmGeneratorConfig> {
        let api_key = self.resolved_api_key()?;
        let mut config = crate::generator::LlmGeneratorConfig::new(api_key);
        config.model.clone_from(&self.model);
        config.endpoint.clone_from(&self.endpoint);
        config.timeout = std::time::Duration::from_secs(self.timeout_secs);
        Some(config)
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Disable colored output
    pub no_color: bool,
}
