//! Rule-based fuzzy matching for short personal names.
//!
//! This module provides the scoring pipeline behind
//! [`VerificationEngine`](crate::VerificationEngine):
//!
//! - [`normalize`]: canonical form and tokenization
//! - [`OrderSwapDetector`]: token-order and patronymic inversions
//! - [`TokenScorer`]: per-token similarity over the [`VariationRuleSet`]
//! - [`string_similarity`]: phonetic and character-overlap signals
//! - [`ConfidenceAggregator`]: blends the signals into one confidence
//! - [`DistinctPairGuard`]: caps known confusable pairs below the threshold
//! - [`ReasonExplainer`]: the human-readable reason string
//!
//! # Example
//!
//! ```
//! use name_verify::matching::{MatchConfig, NormalizedName, TokenScorer, VariationRuleSet};
//!
//! let rules = VariationRuleSet::builtin();
//! let config = MatchConfig::balanced();
//! let scorer = TokenScorer::new(&rules, &config);
//!
//! assert_eq!(scorer.score("bob", "robert").0, 0.95);
//! assert_eq!(NormalizedName::new("Al-Hilal").as_str(), "al hilal");
//! ```

mod aliases;
mod config;
pub mod explain;
mod guard;
pub mod normalize;
mod order;
pub mod rules;
pub mod scoring;
pub mod string_similarity;
mod token;
mod traits;

pub use aliases::NicknameTable;
pub use config::MatchConfig;
pub use explain::{ReasonExplainer, ReasonFactors, SpellingDifference};
pub use guard::{DistinctPairGuard, GuardTrigger};
pub use normalize::{normalize, tokenize, NormalizedName};
pub use order::{OrderSwapDetector, PATRONYMIC_MARKER};
pub use rules::{AffixRule, RuleSetFile, TokenPair, VariationRuleSet};
pub use scoring::{ConfidenceAggregator, ScoringPath, SignalBreakdown, TokenAlignment};
pub use token::{TokenMatchKind, TokenScorer};
pub use traits::NameMatcher;
