//! Unified error types for name-verify.
//!
//! The scoring pipeline itself is total and never fails; errors only arise
//! at the collaborator seams: target storage, name generation and rule-set
//! loading.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for name-verify operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NameVerifyError {
    /// Verification was requested before any target name was stored
    #[error("No target name has been generated yet")]
    NoTarget,

    /// Errors reading or writing the stored target
    #[error("Storage operation failed: {context}")]
    Storage {
        context: String,
        #[source]
        source: StorageErrorKind,
    },

    /// Errors during target name generation
    #[error("Name generation failed: {context}")]
    Generation {
        context: String,
        #[source]
        source: GenerationErrorKind,
    },

    /// Errors loading a variation rule set
    #[error("Invalid rule set: {context}")]
    Rules {
        context: String,
        #[source]
        source: RulesErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific storage error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StorageErrorKind {
    #[error("Stored record is not valid JSON: {0}")]
    Corrupt(String),

    #[error("Failed to encode record: {0}")]
    Encode(String),
}

/// Specific generation error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GenerationErrorKind {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("API request failed: {0}")]
    Api(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Generator unavailable: {0}")]
    Unavailable(String),
}

/// Specific rule-set error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RulesErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Empty token in section '{section}'")]
    EmptyEntry { section: String },

    #[error("Unsupported rule file extension: {0}")]
    UnsupportedFormat(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for name-verify operations
pub type Result<T> = std::result::Result<T, NameVerifyError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl NameVerifyError {
    /// Create a storage error with context
    pub fn storage(context: impl Into<String>, source: StorageErrorKind) -> Self {
        Self::Storage {
            context: context.into(),
            source,
        }
    }

    /// Create a generation error with context
    pub fn generation(context: impl Into<String>, source: GenerationErrorKind) -> Self {
        Self::Generation {
            context: context.into(),
            source,
        }
    }

    /// Create a rule-set error with context
    pub fn rules(context: impl Into<String>, source: RulesErrorKind) -> Self {
        Self::Rules {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this is the "no target stored" condition.
    #[must_use]
    pub const fn is_no_target(&self) -> bool {
        matches!(self, Self::NoTarget)
    }
}

impl From<std::io::Error> for NameVerifyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Context chaining
// ============================================================================

/// Prefix a context string onto an error.
///
/// Contexts read outermost-first, e.g.
/// `"storing target: Failed to encode record: ..."`. `NoTarget` carries no
/// context and passes through unchanged.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like [`context`](Self::context), building the string only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<NameVerifyError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().prefixed(&context.into()))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| e.into().prefixed(&f().into()))
    }
}

impl NameVerifyError {
    fn prefixed(self, outer: &str) -> Self {
        let join = |inner: String| {
            if inner.is_empty() {
                outer.to_string()
            } else {
                format!("{outer}: {inner}")
            }
        };
        match self {
            Self::NoTarget => Self::NoTarget,
            Self::Storage { context, source } => Self::Storage {
                context: join(context),
                source,
            },
            Self::Generation { context, source } => Self::Generation {
                context: join(context),
                source,
            },
            Self::Rules { context, source } => Self::Rules {
                context: join(context),
                source,
            },
            Self::Io {
                path,
                message,
                source,
            } => Self::Io {
                path,
                message: join(message),
                source,
            },
            Self::Validation(message) => Self::Validation(join(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_target_message() {
        let err = NameVerifyError::NoTarget;
        assert_eq!(err.to_string(), "No target name has been generated yet");
        assert!(err.is_no_target());
    }

    #[test]
    fn test_error_display() {
        let err = NameVerifyError::generation("pattern", GenerationErrorKind::EmptyPrompt);
        assert_eq!(err.to_string(), "Name generation failed: pattern");

        let err = NameVerifyError::io(
            "/tmp/latest_name.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("latest_name.json"));
        assert!(!err.is_no_target());
    }

    #[test]
    fn test_rule_file_context_reads_outermost_first() {
        let parse: Result<()> = Err(NameVerifyError::rules(
            "nicknames",
            RulesErrorKind::EmptyEntry {
                section: "nicknames".to_string(),
            },
        ));
        let err = parse
            .context("custom.yaml")
            .context("loading rules")
            .unwrap_err();

        match err {
            NameVerifyError::Rules { context, source } => {
                assert_eq!(context, "loading rules: custom.yaml: nicknames");
                assert!(matches!(source, RulesErrorKind::EmptyEntry { .. }));
            }
            other => panic!("expected Rules error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_context_is_replaced() {
        let err = NameVerifyError::storage("", StorageErrorKind::Encode("eof".to_string()))
            .prefixed("storing target");
        assert_eq!(err.to_string(), "Storage operation failed: storing target");
    }

    #[test]
    fn test_no_target_passes_through() {
        let result: Result<()> = Err(NameVerifyError::NoTarget);
        assert!(result.context("verifying").unwrap_err().is_no_target());
    }

    #[test]
    fn test_with_context_is_lazy() {
        let mut evaluated = false;
        let ok: Result<u8> = Ok(75);
        let _ = ok.with_context(|| {
            evaluated = true;
            "unused"
        });
        assert!(!evaluated);

        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        match io.with_context(|| "writing latest_name.json") {
            Err(NameVerifyError::Io { path, message, .. }) => {
                assert!(path.is_none());
                assert_eq!(message, "writing latest_name.json: disk full");
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
