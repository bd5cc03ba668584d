//! Configuration module for name-verify.
//!
//! [`AppConfig`] groups matching, storage, generator and output settings.
//! It is loaded from an optional YAML file, layered with CLI flags and
//! checked with [`Validatable`] before any command runs.
//!
//! # Quick Start
//!
//! ```
//! use name_verify::config::AppConfig;
//!
//! let config = AppConfig::builder().preset("strict").build();
//! assert_eq!(config.matching.to_match_config().threshold, 0.85);
//!
//! let config = AppConfig::builder().preset("permissive").threshold(0.72).build();
//! assert_eq!(config.matching.to_match_config().threshold, 0.72);
//! ```
//!
//! # Configuration File
//!
//! Place a `.name-verify.yaml` file in the working directory or
//! `~/.config/name-verify/`:
//!
//! ```yaml
//! matching:
//!   preset: strict
//!   rules_file: ./extra-nicknames.yaml
//! storage:
//!   path: storage/latest_name.json
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_PRESET, DEFAULT_TIMEOUT_SECS,
};
pub use types::{
    AppConfig, AppConfigBuilder, GeneratorConfig, MatchingConfig, OutputConfig, StorageConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError, ConfigOverrides,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option accepted in `.name-verify.yaml` and can
/// be used by editors for validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}
