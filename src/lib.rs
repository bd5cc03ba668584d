//! **Rule-based verification of personal names.**
//!
//! `name-verify` decides whether a candidate name plausibly refers to the same
//! person as a previously generated target name. It tolerates spelling
//! variants, transliterations, nicknames, punctuation and casing, while
//! rejecting token-order inversions and known confusable-but-distinct names.
//! Every decision comes with a confidence percentage and a human-readable
//! reason.
//!
//! ## Core Concepts & Modules
//!
//! - **[`matching`]**: the scoring pipeline. Normalization, per-token scoring
//!   over a [`VariationRuleSet`], phonetic and character-overlap signals,
//!   order-swap detection, the distinct-pair guard and the reason explainer.
//! - **[`verifier`]**: [`VerificationEngine`] runs the pipeline for one pair;
//!   [`Verifier`] verifies candidates against a stored target.
//! - **[`storage`]**: the single-slot [`TargetStore`] and its file-backed
//!   implementation.
//! - **[`generator`]**: target name generation from a free-text prompt.
//! - **[`corpus`]**: the regression corpus the builtin rules are tuned against.
//! - **[`reports`]**: summary and JSON rendering.
//! - **[`config`]**: YAML configuration, presets and validation.
//!
//! ## Verifying a Pair
//!
//! ```
//! use name_verify::VerificationEngine;
//!
//! let engine = VerificationEngine::default();
//!
//! let result = engine.verify("Bob Ellensworth", "Robert Ellensworth");
//! assert!(result.is_match);
//! assert_eq!(result.confidence, 91);
//!
//! let result = engine.verify("Abdullah ibn Omar", "Omar ibn Abdullah");
//! assert!(!result.is_match);
//! ```
//!
//! ## Verifying Against a Stored Target
//!
//! ```
//! use name_verify::{MemoryTargetStore, TargetStore, VerificationEngine, Verifier};
//!
//! let store = MemoryTargetStore::new();
//! let verifier = Verifier::new(VerificationEngine::default(), &store);
//! assert!(verifier.verify("Anyone").unwrap_err().is_no_target());
//!
//! store.set("Tyler Bliha")?;
//! assert!(verifier.verify("Tlyer Bilha")?.is_match);
//! # Ok::<(), name_verify::NameVerifyError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `llm`: enables [`generator::LlmGenerator`], which asks an
//!   OpenAI-compatible chat-completion API for target names. This adds the
//!   `reqwest` dependency.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Scores are bounded to [0, 1] and name lengths are small
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod generator;
pub mod matching;
pub mod reports;
pub mod storage;
pub mod verifier;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigOverrides, MatchingConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use corpus::{run_corpus, CorpusCase, CorpusReport, CORPUS};
pub use error::{ErrorContext, NameVerifyError, Result};
pub use generator::{GenerationService, NameGenerator, PatternGenerator};
pub use matching::{MatchConfig, NameMatcher, NormalizedName, VariationRuleSet};
pub use reports::{ReportFormat, ReportGenerator};
pub use storage::{FileTargetStore, MemoryTargetStore, TargetStore};
pub use verifier::{VerificationEngine, VerificationOutcome, VerificationResult, Verifier};
