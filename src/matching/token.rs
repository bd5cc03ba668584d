//! Single-token similarity scoring.

use super::config::MatchConfig;
use super::rules::VariationRuleSet;
use super::string_similarity::{edit_distance, edit_similarity};
use serde::Serialize;

/// How a token score was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenMatchKind {
    Exact,
    Nickname,
    Variation,
    /// Registered confusable pair, score dampened
    Distinct,
    /// Short edit distance on a longer token, score floored
    Typo,
    EditDistance,
}

impl TokenMatchKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Nickname => "nickname",
            Self::Variation => "variation",
            Self::Distinct => "distinct",
            Self::Typo => "typo",
            Self::EditDistance => "edit",
        }
    }
}

/// Scores the similarity of two individual tokens.
///
/// Rules are evaluated in order and the first applicable one wins:
/// exact equality, nickname equivalence, transliteration/affix variation,
/// then normalized edit distance (dampened for confusable pairs, floored
/// for likely typos).
#[derive(Debug, Clone, Copy)]
pub struct TokenScorer<'a> {
    rules: &'a VariationRuleSet,
    config: &'a MatchConfig,
}

impl<'a> TokenScorer<'a> {
    #[must_use]
    pub const fn new(rules: &'a VariationRuleSet, config: &'a MatchConfig) -> Self {
        Self { rules, config }
    }

    /// Score two tokens in `[0, 1]` and report which rule produced the score.
    #[must_use]
    pub fn score(&self, a: &str, b: &str) -> (f64, TokenMatchKind) {
        if a == b {
            return (1.0, TokenMatchKind::Exact);
        }
        if self.rules.are_nicknames(a, b) {
            return (self.config.nickname_score, TokenMatchKind::Nickname);
        }
        if self.rules.are_variants(a, b) {
            return (self.config.variation_score, TokenMatchKind::Variation);
        }

        let max_len = a.chars().count().max(b.chars().count());
        if max_len == 0 {
            return (0.0, TokenMatchKind::EditDistance);
        }

        let similarity = edit_similarity(a, b);
        if self.rules.are_similar_but_distinct(a, b) {
            let dampened = (similarity * self.config.distinct_dampening).max(self.config.distinct_floor);
            return (dampened, TokenMatchKind::Distinct);
        }
        if edit_distance(a, b) <= self.config.typo_max_distance
            && max_len >= self.config.typo_min_length
        {
            return (similarity.max(self.config.typo_floor), TokenMatchKind::Typo);
        }

        (similarity, TokenMatchKind::EditDistance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer_fixture() -> (VariationRuleSet, MatchConfig) {
        (VariationRuleSet::builtin(), MatchConfig::balanced())
    }

    #[test]
    fn test_exact_and_nickname() {
        let (rules, config) = scorer_fixture();
        let scorer = TokenScorer::new(&rules, &config);
        assert_eq!(scorer.score("omar", "omar"), (1.0, TokenMatchKind::Exact));
        assert_eq!(scorer.score("bob", "robert"), (0.95, TokenMatchKind::Nickname));
    }

    #[test]
    fn test_variation() {
        let (rules, config) = scorer_fixture();
        let scorer = TokenScorer::new(&rules, &config);
        assert_eq!(scorer.score("mcdonald", "macdonald").0, 0.9);
        assert_eq!(scorer.score("muhammad", "mohammed").0, 0.9);
    }

    #[test]
    fn test_distinct_pair_dampened() {
        let (rules, config) = scorer_fixture();
        let scorer = TokenScorer::new(&rules, &config);
        // michael/michelle: distance 3 over 8 -> 0.625 * 0.5 = 0.3125 -> floor 0.4
        let (score, kind) = scorer.score("michael", "michelle");
        assert_eq!(kind, TokenMatchKind::Distinct);
        assert!((score - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_typo_floor() {
        let (rules, config) = scorer_fixture();
        let scorer = TokenScorer::new(&rules, &config);
        // transposition: distance 2 over 5 -> 0.6, floored to 0.8
        let (score, kind) = scorer.score("tyler", "tlyer");
        assert_eq!(kind, TokenMatchKind::Typo);
        assert!((score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_short_tokens_not_floored() {
        let (rules, config) = scorer_fixture();
        let scorer = TokenScorer::new(&rules, &config);
        // "ali" vs "aly": distance 1 but max length 3
        let (score, kind) = scorer.score("ali", "aly");
        assert_eq!(kind, TokenMatchKind::EditDistance);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rashidi_scores_as_typo_not_variant() {
        let (rules, config) = scorer_fixture();
        let scorer = TokenScorer::new(&rules, &config);
        let (score, kind) = scorer.score("rashid", "rashidi");
        assert_eq!(kind, TokenMatchKind::Typo);
        assert!((score - 6.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_tokens() {
        let (rules, config) = scorer_fixture();
        let scorer = TokenScorer::new(&rules, &config);
        assert_eq!(scorer.score("", "abc").0, 0.0);
        assert_eq!(scorer.score("", "").0, 1.0);
    }
}
