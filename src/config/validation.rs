//! Configuration validation for name-verify.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::*;
use crate::matching::MatchConfig;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.matching.validate());
        errors.extend(self.storage.validate());
        errors.extend(self.generator.validate());
        errors
    }
}

impl Validatable for MatchingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if MatchConfig::from_preset(&self.preset).is_none() {
            errors.push(ConfigError::new(
                "matching.preset",
                format!(
                    "Invalid preset '{}'. Valid options: {}",
                    self.preset,
                    MatchConfig::preset_names().join(", ")
                ),
            ));
        }

        if let Some(threshold) = self.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                errors.push(ConfigError::new(
                    "matching.threshold",
                    format!("Threshold must be between 0.0 and 1.0, got {threshold}"),
                ));
            }
        }

        if let Some(ref path) = self.rules_file {
            if !path.is_file() {
                errors.push(ConfigError::new(
                    "matching.rules_file",
                    format!("Rule file does not exist: {}", path.display()),
                ));
            }
        }

        errors
    }
}

impl Validatable for StorageConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.path.as_os_str().is_empty() {
            return vec![ConfigError::new("storage.path", "Storage path cannot be empty")];
        }
        if self.path.is_dir() {
            return vec![ConfigError::new(
                "storage.path",
                format!("Storage path is a directory: {}", self.path.display()),
            )];
        }
        Vec::new()
    }
}

impl Validatable for GeneratorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.model.trim().is_empty() {
            errors.push(ConfigError::new("generator.model", "Model cannot be empty"));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            errors.push(ConfigError::new(
                "generator.endpoint",
                format!("Endpoint must be an http(s) URL, got '{}'", self.endpoint),
            ));
        }
        if self.timeout_secs == 0 {
            errors.push(ConfigError::new(
                "generator.timeout_secs",
                "Timeout must be at least 1 second",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_preset_and_threshold() {
        let matching = MatchingConfig {
            preset: "lenient".to_string(),
            threshold: Some(1.5),
            ..MatchingConfig::default()
        };
        let errors = matching.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "matching.preset");
        assert!(errors[0].message.contains("strict, balanced, permissive"));
        assert_eq!(errors[1].field, "matching.threshold");
    }

    #[test]
    fn test_missing_rules_file() {
        let matching = MatchingConfig {
            rules_file: Some(PathBuf::from("/nonexistent/rules.yaml")),
            ..MatchingConfig::default()
        };
        assert_eq!(matching.validate()[0].field, "matching.rules_file");
    }

    #[test]
    fn test_storage_path_is_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let storage = StorageConfig {
            path: tmp.path().to_path_buf(),
        };
        assert!(!storage.is_valid());
    }

    #[test]
    fn test_generator_validation() {
        let generator = GeneratorConfig {
            endpoint: "ftp://example.com".to_string(),
            timeout_secs: 0,
            ..GeneratorConfig::default()
        };
        let fields: Vec<_> = generator.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, ["generator.endpoint", "generator.timeout_secs"]);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::new("storage.path", "Storage path cannot be empty");
        assert_eq!(err.to_string(), "storage.path: Storage path cannot be empty");
    }
}
