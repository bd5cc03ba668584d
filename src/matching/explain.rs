//! Human-readable explanations of verification decisions.

use super::normalize::NormalizedName;
use super::rules::VariationRuleSet;
use super::scoring::{ScoringPath, SignalBreakdown};
use super::string_similarity::edit_distance;

pub const EXACT_REASON: &str =
    "Exact match after normalization (removing punctuation, case differences)";
pub const ORDER_SWAP_REASON: &str =
    "Names contain the same tokens but in different order, which changes identity";
pub const TOO_DIFFERENT_REASON: &str = "Names are too different to be considered a match";

/// Size of a whole-name spelling difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellingDifference {
    Minor(usize),
    Moderate(usize),
    Significant(usize),
}

impl SpellingDifference {
    /// Bucket an edit distance; `None` for identical strings.
    #[must_use]
    pub const fn from_distance(distance: usize) -> Option<Self> {
        match distance {
            0 => None,
            1..=3 => Some(Self::Minor(distance)),
            4..=6 => Some(Self::Moderate(distance)),
            _ => Some(Self::Significant(distance)),
        }
    }
}

impl std::fmt::Display for SpellingDifference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (label, distance) = match self {
            Self::Minor(d) => ("minor", d),
            Self::Moderate(d) => ("moderate", d),
            Self::Significant(d) => ("significant", d),
        };
        write!(f, "{label} spelling differences ({distance} characters)")
    }
}

/// Factors that contributed to a blended decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReasonFactors {
    pub nickname: bool,
    pub spelling: Option<SpellingDifference>,
    pub variation: bool,
}

impl ReasonFactors {
    /// Factor phrases in reporting order.
    #[must_use]
    pub fn phrases(&self) -> Vec<String> {
        let mut phrases = Vec::new();
        if self.nickname {
            phrases.push("nickname variation detected".to_string());
        }
        if let Some(spelling) = self.spelling {
            phrases.push(spelling.to_string());
        }
        if self.variation {
            phrases.push("transliteration or common variation detected".to_string());
        }
        phrases
    }
}

/// Builds the reason string attached to every verification result.
#[derive(Debug, Clone, Copy)]
pub struct ReasonExplainer<'a> {
    rules: &'a VariationRuleSet,
}

impl<'a> ReasonExplainer<'a> {
    #[must_use]
    pub const fn new(rules: &'a VariationRuleSet) -> Self {
        Self { rules }
    }

    /// Collect the contributing factors for two names.
    #[must_use]
    pub fn factors(&self, target: &NormalizedName, candidate: &NormalizedName) -> ReasonFactors {
        let target_tokens = target.tokens();
        let candidate_tokens = candidate.tokens();

        ReasonFactors {
            nickname: any_token_pair(&target_tokens, &candidate_tokens, |t, c| {
                self.rules.are_nicknames(t, c)
            }),
            spelling: SpellingDifference::from_distance(edit_distance(
                target.as_str(),
                candidate.as_str(),
            )),
            variation: any_token_pair(&target_tokens, &candidate_tokens, |t, c| {
                self.rules.are_variants(t, c)
            }),
        }
    }

    /// Explain a decision. The first applicable reason wins.
    #[must_use]
    pub fn explain(
        &self,
        target: &NormalizedName,
        candidate: &NormalizedName,
        breakdown: &SignalBreakdown,
        is_match: bool,
    ) -> String {
        match breakdown.path {
            ScoringPath::Exact => return EXACT_REASON.to_string(),
            ScoringPath::OrderSwap => return ORDER_SWAP_REASON.to_string(),
            ScoringPath::Blended => {}
        }

        let phrases = self.factors(target, candidate).phrases();
        match (is_match, phrases.is_empty()) {
            (false, true) => TOO_DIFFERENT_REASON.to_string(),
            (false, false) => format!(
                "Despite {}, the overall similarity is too low",
                phrases.join(" and ")
            ),
            (true, false) => format!("Match due to {}", phrases.join(" and ")),
            (true, true) => format!(
                "Names are sufficiently similar (confidence: {}%)",
                (breakdown.confidence * 100.0).round()
            ),
        }
    }
}

fn any_token_pair(target: &[&str], candidate: &[&str], pred: impl Fn(&str, &str) -> bool) -> bool {
    target
        .iter()
        .any(|t| candidate.iter().any(|c| pred(*t, *c)))
}
