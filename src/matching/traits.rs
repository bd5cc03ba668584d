//! Trait definitions for name matching strategies.
//!
//! The verification engine is the only built-in implementation; the trait
//! exists so callers (the corpus runner, the CLI, benchmarks) can be written
//! against an interface and tested with stub matchers.

use crate::verifier::VerificationResult;

/// Trait for name verification strategies.
///
/// # Example
///
/// ```
/// use name_verify::matching::NameMatcher;
/// use name_verify::VerificationEngine;
///
/// fn check(matcher: &dyn NameMatcher) -> bool {
///     matcher.verify("Bob Ellensworth", "Robert Ellensworth").is_match
/// }
///
/// assert!(check(&VerificationEngine::default()));
/// ```
pub trait NameMatcher: Send + Sync {
    /// Verify `candidate` against `target`.
    fn verify(&self, target: &str, candidate: &str) -> VerificationResult;

    /// Get the name of this matcher for logging/debugging.
    fn name(&self) -> &'static str {
        "NameMatcher"
    }

    /// The match threshold on the 0-1 scale.
    fn threshold(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Matches when the candidate starts with the target's first letter.
    struct InitialMatcher;

    impl NameMatcher for InitialMatcher {
        fn verify(&self, target: &str, candidate: &str) -> VerificationResult {
            let is_match = target.chars().next() == candidate.chars().next();
            VerificationResult {
                is_match,
                confidence: if is_match { 80 } else { 10 },
                reason: String::new(),
                target_name: target.to_string(),
                candidate_name: candidate.to_string(),
                breakdown: None,
            }
        }

        fn threshold(&self) -> f64 {
            0.5
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let matcher: &dyn NameMatcher = &InitialMatcher;
        assert!(matcher.verify("Anna", "Alice").is_match);
        assert_eq!(matcher.verify("Anna", "Bea").confidence, 10);
        assert_eq!(matcher.name(), "NameMatcher");
    }
}
