//! Distinct-pair guard.
//!
//! A shared surname plus a confusable given name ("Michael Thompson" vs
//! "Michelle Thompson") scores high on every similarity signal. The guard
//! runs after aggregation and caps the confidence below the threshold for
//! these shapes. It can only lower a confidence, never raise it.

use super::config::MatchConfig;
use super::rules::VariationRuleSet;
use serde::Serialize;

/// Why the guard capped a confidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuardTrigger {
    /// The whole-name pair is on the known non-match list
    KnownNonMatch,
    /// A confusable token pair co-occurs with an identical token pair
    DistinctTokens { target: String, candidate: String },
}

impl std::fmt::Display for GuardTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KnownNonMatch => write!(f, "known non-match"),
            Self::DistinctTokens { target, candidate } => {
                write!(f, "distinct pair {target}/{candidate}")
            }
        }
    }
}

/// Caps the confidence of known-confusable name pairs.
#[derive(Debug, Clone, Copy)]
pub struct DistinctPairGuard<'a> {
    rules: &'a VariationRuleSet,
    config: &'a MatchConfig,
}

impl<'a> DistinctPairGuard<'a> {
    #[must_use]
    pub const fn new(rules: &'a VariationRuleSet, config: &'a MatchConfig) -> Self {
        Self { rules, config }
    }

    /// Find the rule that forces this pair below the threshold, if any.
    ///
    /// `target` and `candidate` are normalized names, the token slices their
    /// tokenizations.
    #[must_use]
    pub fn trigger<S: AsRef<str>>(
        &self,
        target: &str,
        candidate: &str,
        target_tokens: &[S],
        candidate_tokens: &[S],
    ) -> Option<GuardTrigger> {
        if self.rules.is_known_non_match(target, candidate) {
            return Some(GuardTrigger::KnownNonMatch);
        }

        for flagged_t in target_tokens.iter().map(|t| t.as_ref()) {
            for flagged_c in candidate_tokens.iter().map(|t| t.as_ref()) {
                if !self.rules.are_similar_but_distinct(flagged_t, flagged_c) {
                    continue;
                }
                // Flagged tokens are excluded by value, so a repeated
                // confusable token never counts as the shared one.
                let shares_other_token = target_tokens
                    .iter()
                    .map(|t| t.as_ref())
                    .filter(|t| *t != flagged_t)
                    .any(|t| {
                        candidate_tokens
                            .iter()
                            .map(|t| t.as_ref())
                            .any(|c| c != flagged_c && c == t)
                    });
                if shares_other_token {
                    return Some(GuardTrigger::DistinctTokens {
                        target: flagged_t.to_string(),
                        candidate: flagged_c.to_string(),
                    });
                }
            }
        }

        None
    }

    /// Apply the cap. Returns the (possibly lowered) confidence and the trigger.
    #[must_use]
    pub fn apply<S: AsRef<str>>(
        &self,
        confidence: f64,
        target: &str,
        candidate: &str,
        target_tokens: &[S],
        candidate_tokens: &[S],
    ) -> (f64, Option<GuardTrigger>) {
        match self.trigger(target, candidate, target_tokens, candidate_tokens) {
            Some(trigger) => (confidence.min(self.config.effective_cap()), Some(trigger)),
            None => (confidence, None),
        }
    }
}
