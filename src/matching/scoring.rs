//! Confidence aggregation.
//!
//! Blends the token-set, phonetic and overlap signals into one confidence
//! and records how it was reached in a [`SignalBreakdown`].

use super::config::MatchConfig;
use super::guard::GuardTrigger;
use super::normalize::NormalizedName;
use super::order::OrderSwapDetector;
use super::rules::VariationRuleSet;
use super::string_similarity::{overlap_score, phonetic_score};
use super::token::{TokenMatchKind, TokenScorer};
use serde::Serialize;

/// Which branch of the pipeline produced the confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPath {
    /// Normalized names are identical
    Exact,
    /// Disallowed token-order inversion
    OrderSwap,
    /// Equal-weight blend of the three signals
    Blended,
}

/// Best-scoring candidate token for one target token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenAlignment {
    pub target: String,
    pub candidate: String,
    pub score: f64,
    pub kind: TokenMatchKind,
}

/// Intermediate signals behind a confidence value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalBreakdown {
    pub path: ScoringPath,
    /// Greedy best-alignment token score
    pub token_set: f64,
    /// Whole-name phonetic score
    pub phonetic: f64,
    /// Whole-name character overlap
    pub overlap: f64,
    /// Flat nickname boost applied (0 when no nickname pair was found)
    pub nickname_boost: f64,
    /// Confidence before the distinct-pair guard
    pub aggregate: f64,
    /// Guard that capped the confidence, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guard: Option<GuardTrigger>,
    /// Final confidence in `[0, 1]`
    pub confidence: f64,
    /// Per-token alignment behind `token_set`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alignments: Vec<TokenAlignment>,
}

impl SignalBreakdown {
    fn fixed(path: ScoringPath, confidence: f64) -> Self {
        Self {
            path,
            token_set: 0.0,
            phonetic: 0.0,
            overlap: 0.0,
            nickname_boost: 0.0,
            aggregate: confidence,
            guard: None,
            confidence,
            alignments: Vec::new(),
        }
    }

    /// Record a guard cap.
    pub fn apply_guard(&mut self, confidence: f64, trigger: Option<GuardTrigger>) {
        self.confidence = confidence;
        self.guard = trigger;
    }

    /// One-line description for logs and `--explain` output.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut line = match self.path {
            ScoringPath::Exact => format!("exact -> {:.2}", self.confidence),
            ScoringPath::OrderSwap => format!("order swap -> {:.2}", self.aggregate),
            ScoringPath::Blended => format!(
                "token={:.2} phonetic={:.2} overlap={:.2} boost={:.2} -> {:.2}",
                self.token_set, self.phonetic, self.overlap, self.nickname_boost, self.aggregate
            ),
        };
        if let Some(guard) = &self.guard {
            line.push_str(&format!(" (capped to {:.2}: {guard})", self.confidence));
        }
        if !self.alignments.is_empty() {
            let pairs: Vec<String> = self
                .alignments
                .iter()
                .map(|a| format!("{}/{} {}", a.target, a.candidate, a.kind.label()))
                .collect();
            line.push_str(&format!("; tokens: {}", pairs.join(", ")));
        }
        line
    }
}

/// Combines the per-signal scores into a confidence value.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceAggregator<'a> {
    rules: &'a VariationRuleSet,
    config: &'a MatchConfig,
}

impl<'a> ConfidenceAggregator<'a> {
    #[must_use]
    pub const fn new(rules: &'a VariationRuleSet, config: &'a MatchConfig) -> Self {
        Self { rules, config }
    }

    /// Aggregate the signals for two normalized names.
    ///
    /// The returned breakdown has no guard applied yet.
    #[must_use]
    pub fn aggregate(&self, target: &NormalizedName, candidate: &NormalizedName) -> SignalBreakdown {
        if target == candidate {
            return SignalBreakdown::fixed(ScoringPath::Exact, 1.0);
        }

        let target_tokens = target.tokens();
        let candidate_tokens = candidate.tokens();

        if OrderSwapDetector::is_swap(&target_tokens, &candidate_tokens) {
            return SignalBreakdown::fixed(ScoringPath::OrderSwap, self.config.swap_confidence);
        }

        let alignments = self.align(&target_tokens, &candidate_tokens);
        let token_set =
            mean_over_longer(&alignments, target_tokens.len().max(candidate_tokens.len()));
        let phonetic = phonetic_score(target.as_str(), candidate.as_str());
        let overlap = overlap_score(target.as_str(), candidate.as_str());
        let nickname_boost = if self.has_nickname_pair(&target_tokens, &candidate_tokens) {
            self.config.nickname_boost
        } else {
            0.0
        };

        let aggregate = ((token_set + phonetic + overlap) / 3.0 + nickname_boost).min(1.0);

        SignalBreakdown {
            path: ScoringPath::Blended,
            token_set,
            phonetic,
            overlap,
            nickname_boost,
            aggregate,
            guard: None,
            confidence: aggregate,
            alignments,
        }
    }

    /// Pair each target token with its best-scoring candidate token.
    ///
    /// Ties keep the earliest candidate. A candidate token may be the best
    /// match for several target tokens. Nothing is returned when the
    /// candidate has no tokens.
    #[must_use]
    pub fn align(&self, target_tokens: &[&str], candidate_tokens: &[&str]) -> Vec<TokenAlignment> {
        let scorer = TokenScorer::new(self.rules, self.config);
        target_tokens
            .iter()
            .filter_map(|t| {
                candidate_tokens
                    .iter()
                    .map(|c| {
                        let (score, kind) = scorer.score(t, c);
                        TokenAlignment {
                            target: (*t).to_string(),
                            candidate: (*c).to_string(),
                            score,
                            kind,
                        }
                    })
                    .reduce(|best, next| if next.score > best.score { next } else { best })
            })
            .collect()
    }

    /// Whether any target token is nickname-equivalent to any candidate token.
    #[must_use]
    pub fn has_nickname_pair(&self, target_tokens: &[&str], candidate_tokens: &[&str]) -> bool {
        target_tokens
            .iter()
            .any(|t| candidate_tokens.iter().any(|c| self.rules.are_nicknames(t, c)))
    }
}

/// Greedy best-alignment token score: best scores summed over the longer
/// token count.
fn mean_over_longer(alignments: &[TokenAlignment], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    alignments.iter().map(|a| a.score).sum::<f64>() / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(target: &str, candidate: &str) -> SignalBreakdown {
        let rules = VariationRuleSet::builtin();
        let config = MatchConfig::balanced();
        ConfidenceAggregator::new(&rules, &config)
            .aggregate(&NormalizedName::new(target), &NormalizedName::new(candidate))
    }

    #[test]
    fn test_exact_path() {
        let breakdown = aggregate("Jean-Luc Picard", "jean luc picard");
        assert_eq!(breakdown.path, ScoringPath::Exact);
        assert_eq!(breakdown.confidence, 1.0);
    }

    #[test]
    fn test_order_swap_path() {
        let breakdown = aggregate("Ali Hassan", "Hassan Ali");
        assert_eq!(breakdown.path, ScoringPath::OrderSwap);
        assert!((breakdown.confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_blended_signals() {
        let breakdown = aggregate("Tyler Bliha", "Tlyer Bilha");
        assert_eq!(breakdown.path, ScoringPath::Blended);
        assert!((breakdown.token_set - 0.8).abs() < 1e-9);
        assert_eq!(breakdown.phonetic, 0.9);
        assert!((breakdown.overlap - 18.0 / 22.0).abs() < 1e-9);
        assert_eq!(breakdown.nickname_boost, 0.0);
        assert_eq!((breakdown.confidence * 100.0).round(), 84.0);
    }

    #[test]
    fn test_nickname_boost_clamped() {
        let breakdown = aggregate("Steven Johnson", "Stephen Jonson");
        assert!(breakdown.nickname_boost > 0.0);
        assert_eq!(breakdown.confidence, 1.0);
    }

    #[test]
    fn test_token_set_divides_by_longer_name() {
        let rules = VariationRuleSet::builtin();
        let config = MatchConfig::balanced();
        let aggregator = ConfidenceAggregator::new(&rules, &config);
        // one perfect token out of three
        let aligned = aggregator.align(&["smith"], &["john", "smith", "jr"]);
        assert_eq!(aligned.len(), 1);
        assert!((mean_over_longer(&aligned, 3) - 1.0 / 3.0).abs() < 1e-9);
        assert!(aggregator.align(&["smith"], &[]).is_empty());
        assert_eq!(mean_over_longer(&[], 0), 0.0);
    }

    #[test]
    fn test_alignments_record_match_kind() {
        let breakdown = aggregate("Bob Ellensworth", "Robert Ellensworth");
        let kinds: Vec<(&str, &str, TokenMatchKind)> = breakdown
            .alignments
            .iter()
            .map(|a| (a.target.as_str(), a.candidate.as_str(), a.kind))
            .collect();
        assert_eq!(
            kinds,
            [
                ("bob", "robert", TokenMatchKind::Nickname),
                ("ellensworth", "ellensworth", TokenMatchKind::Exact),
            ]
        );
        assert!(breakdown
            .summary()
            .ends_with("; tokens: bob/robert nickname, ellensworth/ellensworth exact"));
    }

    #[test]
    fn test_fixed_paths_have_no_alignments() {
        assert!(aggregate("Ali Hassan", "Hassan Ali").alignments.is_empty());
        assert!(aggregate("Omar", "omar").alignments.is_empty());
    }

    #[test]
    fn test_summary_mentions_guard() {
        let mut breakdown = aggregate("Michael Thompson", "Michelle Thompson");
        breakdown.apply_guard(0.74, Some(GuardTrigger::KnownNonMatch));
        let summary = breakdown.summary();
        assert!(summary.contains("capped to 0.74"));
        assert!(summary.contains("known non-match"));
    }
}
