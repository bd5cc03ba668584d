//! Verification scoring configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Scoring constants and the match threshold.
///
/// [`MatchConfig::balanced`] holds the tuned values the builtin rule set and
/// regression corpus were calibrated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchConfig {
    /// Minimum confidence (0.0 - 1.0) for a match
    pub threshold: f64,
    /// Token score for nickname-equivalent tokens
    pub nickname_score: f64,
    /// Token score for transliteration/affix variants
    pub variation_score: f64,
    /// Flat boost when any token pair is nickname-equivalent
    pub nickname_boost: f64,
    /// Confidence assigned to a disallowed token-order swap
    pub swap_confidence: f64,
    /// Ceiling applied by the distinct-pair guard
    pub distinct_cap: f64,
    /// Multiplier applied to edit similarity of similar-but-distinct tokens
    pub distinct_dampening: f64,
    /// Lower bound of a dampened similar-but-distinct token score
    pub distinct_floor: f64,
    /// Floor for short-edit-distance typos on longer tokens
    pub typo_floor: f64,
    /// Maximum edit distance treated as a typo
    pub typo_max_distance: usize,
    /// Minimum token length (characters) for the typo floor
    pub typo_min_length: usize,
}

impl MatchConfig {
    /// Strict verification: higher threshold, same scoring constants.
    #[must_use]
    pub const fn strict() -> Self {
        Self::balanced().with_threshold(0.85)
    }

    /// Balanced verification for general use.
    #[must_use]
    pub const fn balanced() -> Self {
        Self {
            threshold: 0.75,
            nickname_score: 0.95,
            variation_score: 0.9,
            nickname_boost: 0.2,
            swap_confidence: 0.3,
            distinct_cap: 0.74,
            distinct_dampening: 0.5,
            distinct_floor: 0.4,
            typo_floor: 0.8,
            typo_max_distance: 2,
            typo_min_length: 4,
        }
    }

    /// Permissive verification for exploratory use.
    #[must_use]
    pub const fn permissive() -> Self {
        Self::balanced().with_threshold(0.70)
    }

    /// Set a custom threshold value.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// The ceiling the distinct-pair guard applies.
    ///
    /// Always strictly below the threshold so a guarded pair cannot match.
    #[must_use]
    pub fn effective_cap(&self) -> f64 {
        self.distinct_cap.min(self.threshold - 0.01)
    }

    /// Create config from a preset name.
    ///
    /// Supported presets: "strict", "balanced", "permissive".
    #[must_use]
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "strict" => Some(Self::strict()),
            "balanced" | "default" => Some(Self::balanced()),
            "permissive" => Some(Self::permissive()),
            _ => None,
        }
    }

    /// Names of the supported presets.
    #[must_use]
    pub const fn preset_names() -> &'static [&'static str] {
        &["strict", "balanced", "permissive"]
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::balanced()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(MatchConfig::from_preset("Strict"), Some(MatchConfig::strict()));
        assert_eq!(MatchConfig::from_preset("default"), Some(MatchConfig::balanced()));
        assert!(MatchConfig::from_preset("lenient").is_none());
        assert!(MatchConfig::strict().threshold > MatchConfig::balanced().threshold);
        assert!(MatchConfig::permissive().threshold < MatchConfig::balanced().threshold);
    }

    #[test]
    fn test_effective_cap_below_threshold() {
        for config in [
            MatchConfig::strict(),
            MatchConfig::balanced(),
            MatchConfig::permissive(),
            MatchConfig::balanced().with_threshold(0.5),
        ] {
            assert!(config.effective_cap() < config.threshold);
        }
        assert!((MatchConfig::balanced().effective_cap() - 0.74).abs() < 1e-9);
    }
}
