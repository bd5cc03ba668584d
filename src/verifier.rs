//! Name verification engine.
//!
//! [`VerificationEngine`] runs the full pipeline for one (target, candidate)
//! pair. [`Verifier`] binds an engine to a [`TargetStore`] and verifies
//! candidates against whatever target is currently stored.

use crate::error::{NameVerifyError, Result};
use crate::matching::{
    ConfidenceAggregator, DistinctPairGuard, MatchConfig, NameMatcher, NormalizedName,
    ReasonExplainer, ScoringPath, SignalBreakdown, VariationRuleSet,
};
use crate::storage::TargetStore;
use serde::Serialize;

/// Outcome of verifying one candidate against one target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationResult {
    #[serde(rename = "match")]
    pub is_match: bool,
    /// Confidence rounded to a whole percentage (0-100)
    pub confidence: u8,
    pub reason: String,
    /// Target as supplied, not normalized
    pub target_name: String,
    /// Candidate as supplied, not normalized
    pub candidate_name: String,
    /// Signal breakdown, present only for detailed verifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<SignalBreakdown>,
}

/// Convert a 0-1 confidence to the reported percentage.
#[must_use]
pub fn to_percent(confidence: f64) -> u8 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Stateless verification engine over an immutable rule set.
#[derive(Debug, Clone, Default)]
pub struct VerificationEngine {
    rules: VariationRuleSet,
    config: MatchConfig,
}

impl VerificationEngine {
    #[must_use]
    pub const fn new(rules: VariationRuleSet, config: MatchConfig) -> Self {
        Self { rules, config }
    }

    /// Engine with the builtin rules and the given configuration.
    #[must_use]
    pub fn with_config(config: MatchConfig) -> Self {
        Self::new(VariationRuleSet::builtin(), config)
    }

    #[must_use]
    pub const fn rules(&self) -> &VariationRuleSet {
        &self.rules
    }

    #[must_use]
    pub const fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Verify `candidate` against `target`.
    pub fn verify(&self, target: &str, candidate: &str) -> VerificationResult {
        let mut result = self.verify_detailed(target, candidate);
        result.breakdown = None;
        result
    }

    /// Verify and keep the signal breakdown on the result.
    pub fn verify_detailed(&self, target: &str, candidate: &str) -> VerificationResult {
        let target_norm = NormalizedName::new(target);
        let candidate_norm = NormalizedName::new(candidate);

        let mut breakdown = ConfidenceAggregator::new(&self.rules, &self.config)
            .aggregate(&target_norm, &candidate_norm);

        // normalized-equal names are never capped
        if breakdown.path != ScoringPath::Exact {
            let (capped, trigger) = DistinctPairGuard::new(&self.rules, &self.config).apply(
                breakdown.aggregate,
                target_norm.as_str(),
                candidate_norm.as_str(),
                &target_norm.tokens(),
                &candidate_norm.tokens(),
            );
            breakdown.apply_guard(capped, trigger);
        }

        let is_match = breakdown.confidence >= self.config.threshold;
        let reason =
            ReasonExplainer::new(&self.rules).explain(&target_norm, &candidate_norm, &breakdown, is_match);

        tracing::debug!(
            target_name = %target_norm,
            candidate_name = %candidate_norm,
            is_match,
            "{}",
            breakdown.summary()
        );

        VerificationResult {
            is_match,
            confidence: to_percent(breakdown.confidence),
            reason,
            target_name: target.to_string(),
            candidate_name: candidate.to_string(),
            breakdown: Some(breakdown),
        }
    }
}

impl NameMatcher for VerificationEngine {
    fn verify(&self, target: &str, candidate: &str) -> VerificationResult {
        Self::verify(self, target, candidate)
    }

    fn name(&self) -> &'static str {
        "VerificationEngine"
    }

    fn threshold(&self) -> f64 {
        self.config.threshold
    }
}

/// Verifies candidates against the target held in a [`TargetStore`].
#[derive(Debug)]
pub struct Verifier<S: TargetStore> {
    engine: VerificationEngine,
    store: S,
}

impl<S: TargetStore> Verifier<S> {
    pub const fn new(engine: VerificationEngine, store: S) -> Self {
        Self { engine, store }
    }

    #[must_use]
    pub const fn engine(&self) -> &VerificationEngine {
        &self.engine
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Verify against the stored target.
    ///
    /// Returns [`NameVerifyError::NoTarget`] when nothing is stored. The
    /// candidate is not validated here; callers reject empty input.
    pub fn verify(&self, candidate: &str) -> Result<VerificationResult> {
        let target = self.current_target()?;
        Ok(self.engine.verify(&target, candidate))
    }

    /// Like [`Verifier::verify`], keeping the signal breakdown.
    pub fn verify_detailed(&self, candidate: &str) -> Result<VerificationResult> {
        let target = self.current_target()?;
        Ok(self.engine.verify_detailed(&target, candidate))
    }

    fn current_target(&self) -> Result<String> {
        self.store
            .get_current_target()?
            .ok_or(NameVerifyError::NoTarget)
    }
}

/// A verification result or the error that prevented one, in wire form.
///
/// The error variant serializes as `{"error": true, "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VerificationOutcome {
    Verified(VerificationResult),
    Failed { error: bool, message: String },
}

impl VerificationOutcome {
    /// Build the error variant from any error.
    pub fn failed(err: &impl std::fmt::Display) -> Self {
        Self::Failed {
            error: true,
            message: err.to_string(),
        }
    }
}

impl From<Result<VerificationResult>> for VerificationOutcome {
    fn from(result: Result<VerificationResult>) -> Self {
        match result {
            Ok(verified) => Self::Verified(verified),
            Err(err) => Self::failed(&err),
        }
    }
}
