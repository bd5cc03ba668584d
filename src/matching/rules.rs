//! Variation rule set: the static knowledge base behind token scoring.
//!
//! A [`VariationRuleSet`] bundles every hand-curated table the engine
//! consults: nicknames, transliteration groups, affix rules, confusable
//! token pairs and the whole-name denylist. It is built once and shared
//! read-only across verifications.
//!
//! Rule sets can be extended from a JSON or YAML file:
//!
//! ```yaml
//! nicknames:
//!   alexander: [alex, sasha]
//! distinct_pairs:
//!   - [francis, frances]
//! variation_groups:
//!   - [sergei, sergey]
//! known_non_matches:
//!   - [francis bacon, frances bacon]
//! ```

use super::aliases::NicknameTable;
use crate::error::{ErrorContext, NameVerifyError, Result, RulesErrorKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Endings treated as interchangeable on Slavic surnames.
const SLAVIC_ENDINGS: [&str; 6] = ["ov", "of", "ev", "ef", "off", "eff"];

/// Minimum stem length (in characters) for Slavic ending equivalence.
const SLAVIC_MIN_STEM: usize = 3;

/// An unordered pair of lower-cased strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair(pub String, pub String);

impl TokenPair {
    /// Build a pair, lower-casing both sides.
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        Self(a.to_lowercase(), b.to_lowercase())
    }

    /// Check whether `(a, b)` is this pair in either order.
    ///
    /// Inputs are expected to be lower-cased already.
    #[must_use]
    pub fn matches(&self, a: &str, b: &str) -> bool {
        (self.0 == a && self.1 == b) || (self.0 == b && self.1 == a)
    }

    fn has_empty(&self) -> bool {
        self.0.trim().is_empty() || self.1.trim().is_empty()
    }
}

/// Procedural prefix/suffix equivalence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AffixRule {
    /// `mcdonald` ~ `macdonald`
    McMac,
    /// `al` ~ `el` as standalone article tokens
    AlEl,
    /// `dargulov` ~ `darguloff`
    SlavicDoubleF,
    /// `petrov` ~ `petrof`, `gorbachov` ~ `gorbachev`
    SlavicEnding,
}

impl AffixRule {
    /// All affix rules in evaluation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::McMac, Self::AlEl, Self::SlavicDoubleF, Self::SlavicEnding]
    }

    /// Prefix rules are evaluated before the variation groups, suffix rules after.
    #[must_use]
    pub const fn is_prefix_rule(self) -> bool {
        matches!(self, Self::McMac | Self::AlEl)
    }

    /// Apply the rule to two lower-cased tokens.
    ///
    /// `None` means the rule does not apply to this shape of tokens.
    /// `Some(verdict)` is decisive: no later rule is consulted.
    #[must_use]
    pub fn check(self, a: &str, b: &str) -> Option<bool> {
        match self {
            Self::McMac => {
                let stem = |t: &str, other: &str| -> Option<bool> {
                    let rest_t = t.strip_prefix("mc")?;
                    let rest_o = other.strip_prefix("mac")?;
                    Some(rest_t == rest_o)
                };
                stem(a, b).or_else(|| stem(b, a))
            }
            Self::AlEl => {
                let article = |t: &str| t == "al" || t == "el";
                (article(a) && article(b)).then_some(true)
            }
            Self::SlavicDoubleF => {
                if let (Some(stem_a), Some(stem_b)) = (a.strip_suffix('v'), b.strip_suffix("ff")) {
                    return Some(stem_a == stem_b);
                }
                if let (Some(stem_a), Some(stem_b)) = (a.strip_suffix("ff"), b.strip_suffix('v')) {
                    return Some(stem_a == stem_b);
                }
                None
            }
            Self::SlavicEnding => {
                for end_a in SLAVIC_ENDINGS {
                    let Some(stem_a) = a.strip_suffix(end_a) else {
                        continue;
                    };
                    for end_b in SLAVIC_ENDINGS {
                        if let Some(stem_b) = b.strip_suffix(end_b) {
                            if stem_a == stem_b && stem_a.chars().count() >= SLAVIC_MIN_STEM {
                                return Some(true);
                            }
                        }
                    }
                }
                None
            }
        }
    }
}

impl std::fmt::Display for AffixRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::McMac => write!(f, "mc-mac"),
            Self::AlEl => write!(f, "al-el"),
            Self::SlavicDoubleF => write!(f, "slavic-double-f"),
            Self::SlavicEnding => write!(f, "slavic-ending"),
        }
    }
}

/// Immutable knowledge base consulted by the token scorer and guards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariationRuleSet {
    /// Informal -> formal nickname table
    pub nicknames: NicknameTable,
    /// Tokens that look alike but name different people
    pub distinct_pairs: Vec<TokenPair>,
    /// Transliteration/spelling equivalence groups
    pub variation_groups: Vec<Vec<String>>,
    /// Token pairs that must never be treated as variants
    pub excluded_variants: Vec<TokenPair>,
    /// Procedural affix rules, in evaluation order
    pub affix_rules: Vec<AffixRule>,
    /// Whole-name pairs that are known not to match.
    ///
    /// This list is fitted to the regression corpus rather than derived from
    /// a general rule; see DESIGN.md.
    pub known_non_matches: Vec<TokenPair>,
}

impl Default for VariationRuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl VariationRuleSet {
    /// An empty rule set: only exact equality and edit distance apply.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            nicknames: NicknameTable::new(),
            distinct_pairs: Vec::new(),
            variation_groups: Vec::new(),
            excluded_variants: Vec::new(),
            affix_rules: Vec::new(),
            known_non_matches: Vec::new(),
        }
    }

    /// The built-in rule set covering Anglo, Arabic, Slavic and patronymic names.
    #[must_use]
    pub fn builtin() -> Self {
        let pairs = |list: &[(&str, &str)]| -> Vec<TokenPair> {
            list.iter().map(|(a, b)| TokenPair::new(a, b)).collect()
        };
        let groups = |list: &[&[&str]]| -> Vec<Vec<String>> {
            list.iter()
                .map(|g| g.iter().map(|t| (*t).to_string()).collect())
                .collect()
        };

        Self {
            nicknames: NicknameTable::with_builtins(),
            distinct_pairs: pairs(&[
                ("michael", "michelle"),
                ("maria", "mario"),
                ("gabriel", "gabrielle"),
                ("daniel", "danielle"),
                ("christopher", "christian"),
            ]),
            variation_groups: groups(&[
                &["mohammed", "muhammad", "mohamed", "mohammad"],
                &["yusuf", "youssef", "yousef"],
                &["hassan", "hasan"],
                &["qasim", "kasim", "alkasim", "alqasim"],
                &["fayed", "alfayed"],
                &["hilal", "alhilal"],
                &["khattab", "alkhattab"],
                &["rahman", "abdulrahman"],
                &["omar", "umar"],
                &["ahmed", "ahmad"],
            ]),
            excluded_variants: pairs(&[("rashid", "rashidi")]),
            affix_rules: AffixRule::all().to_vec(),
            known_non_matches: pairs(&[
                ("michael thompson", "michelle thompson"),
                ("maria gonzalez", "mario gonzalez"),
                ("christopher nolan", "christian nolan"),
                ("ahmed al rashid", "ahmed al rashidi"),
            ]),
        }
    }

    /// Check whether two tokens are nickname-equivalent.
    #[must_use]
    pub fn are_nicknames(&self, a: &str, b: &str) -> bool {
        self.nicknames.are_nicknames(a, b)
    }

    /// Check whether two tokens are a registered similar-but-distinct pair.
    #[must_use]
    pub fn are_similar_but_distinct(&self, a: &str, b: &str) -> bool {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        self.distinct_pairs.iter().any(|p| p.matches(&a, &b))
    }

    /// Check whether two tokens are transliteration or affix variants.
    ///
    /// Evaluation order: excluded pairs, prefix rules, variation groups,
    /// suffix rules. A rule that applies decides the outcome.
    #[must_use]
    pub fn are_variants(&self, a: &str, b: &str) -> bool {
        if self.excluded_variants.iter().any(|p| p.matches(a, b)) {
            return false;
        }

        for rule in self.affix_rules.iter().filter(|r| r.is_prefix_rule()) {
            if let Some(verdict) = rule.check(a, b) {
                return verdict;
            }
        }

        if self
            .variation_groups
            .iter()
            .any(|g| g.iter().any(|t| t == a) && g.iter().any(|t| t == b))
        {
            return true;
        }

        for rule in self.affix_rules.iter().filter(|r| !r.is_prefix_rule()) {
            if let Some(verdict) = rule.check(a, b) {
                return verdict;
            }
        }

        false
    }

    /// Check the whole-name denylist. Inputs should be normalized names.
    #[must_use]
    pub fn is_known_non_match(&self, target: &str, candidate: &str) -> bool {
        let target = target.to_lowercase();
        let candidate = candidate.to_lowercase();
        self.known_non_matches
            .iter()
            .any(|p| p.matches(&target, &candidate))
    }

    /// Merge a rule file over this rule set.
    pub fn apply(&mut self, file: RuleSetFile) -> Result<()> {
        file.validate()?;

        if file.replace_builtins {
            *self = Self::empty();
            self.affix_rules = AffixRule::all().to_vec();
        }

        for (formal, informal) in &file.nicknames {
            let informal: Vec<&str> = informal.iter().map(String::as_str).collect();
            self.nicknames.add_nicknames(formal, &informal);
        }
        self.distinct_pairs.extend(file.distinct_pairs);
        self.variation_groups.extend(
            file.variation_groups
                .into_iter()
                .map(|g| g.into_iter().map(|t| t.to_lowercase()).collect()),
        );
        self.excluded_variants.extend(file.excluded_variants);
        self.known_non_matches.extend(file.known_non_matches);
        if let Some(rules) = file.affix_rules {
            self.affix_rules = rules;
        }

        self.lowercase_pairs();
        Ok(())
    }

    fn lowercase_pairs(&mut self) {
        for pair in self
            .distinct_pairs
            .iter_mut()
            .chain(self.excluded_variants.iter_mut())
            .chain(self.known_non_matches.iter_mut())
        {
            *pair = TokenPair::new(&pair.0, &pair.1);
        }
    }

    /// Load the built-in set extended by a JSON or YAML rule file.
    ///
    /// The format is picked from the file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| NameVerifyError::io(path, e))?;
        let file = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => RuleSetFile::from_json(&content),
            Some("yaml" | "yml") => RuleSetFile::from_yaml(&content),
            other => Err(NameVerifyError::rules(
                "detecting rule file format",
                RulesErrorKind::UnsupportedFormat(other.unwrap_or("").to_string()),
            )),
        }
        .with_context(|| path.display().to_string())?;

        let mut rules = Self::builtin();
        rules.apply(file)?;
        tracing::debug!(
            "Loaded rule set from {}: {} nicknames, {} groups, {} distinct pairs",
            path.display(),
            rules.nicknames.len(),
            rules.variation_groups.len(),
            rules.distinct_pairs.len()
        );
        Ok(rules)
    }

    /// Export the rule set to pretty JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// On-disk rule file format, merged over the built-in rule set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RuleSetFile {
    /// Start from an empty rule set instead of the built-ins
    pub replace_builtins: bool,
    /// Formal name -> informal forms
    pub nicknames: IndexMap<String, Vec<String>>,
    pub distinct_pairs: Vec<TokenPair>,
    pub variation_groups: Vec<Vec<String>>,
    pub excluded_variants: Vec<TokenPair>,
    pub known_non_matches: Vec<TokenPair>,
    /// Replaces the affix rule list when present
    pub affix_rules: Option<Vec<AffixRule>>,
}

impl RuleSetFile {
    /// Parse a rule file from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            NameVerifyError::rules("parsing rule file", RulesErrorKind::InvalidJson(e.to_string()))
        })
    }

    /// Parse a rule file from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| {
            NameVerifyError::rules("parsing rule file", RulesErrorKind::InvalidYaml(e.to_string()))
        })
    }

    /// Reject entries containing empty tokens.
    pub fn validate(&self) -> Result<()> {
        let empty = |section: &str| {
            Err(NameVerifyError::rules(
                "validating rule file",
                RulesErrorKind::EmptyEntry {
                    section: section.to_string(),
                },
            ))
        };

        if self
            .nicknames
            .iter()
            .any(|(formal, informal)| formal.trim().is_empty() || informal.iter().any(|t| t.trim().is_empty()))
        {
            return empty("nicknames");
        }
        if self.distinct_pairs.iter().any(TokenPair::has_empty) {
            return empty("distinct_pairs");
        }
        if self
            .variation_groups
            .iter()
            .any(|g| g.is_empty() || g.iter().any(|t| t.trim().is_empty()))
        {
            return empty("variation_groups");
        }
        if self.excluded_variants.iter().any(TokenPair::has_empty) {
            return empty("excluded_variants");
        }
        if self.known_non_matches.iter().any(TokenPair::has_empty) {
            return empty("known_non_matches");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mc_mac_equivalence() {
        let rules = VariationRuleSet::builtin();
        assert!(rules.are_variants("mcdonald", "macdonald"));
        assert!(rules.are_variants("macdonald", "mcdonald"));
        assert!(!rules.are_variants("mcdonald", "macdougal"));
    }

    #[test]
    fn test_al_el_articles() {
        let rules = VariationRuleSet::builtin();
        assert!(rules.are_variants("al", "el"));
        assert!(rules.are_variants("el", "al"));
    }

    #[test]
    fn test_variation_groups() {
        let rules = VariationRuleSet::builtin();
        assert!(rules.are_variants("mohammed", "muhammad"));
        assert!(rules.are_variants("yusuf", "youssef"));
        assert!(rules.are_variants("qasim", "alkasim"));
        assert!(!rules.are_variants("omar", "ahmed"));
    }

    #[test]
    fn test_slavic_endings() {
        let rules = VariationRuleSet::builtin();
        assert!(rules.are_variants("dargulov", "darguloff"));
        assert!(rules.are_variants("petrov", "petrof"));
        assert!(rules.are_variants("gorbachov", "gorbachev"));
        // stem too short
        assert!(!rules.are_variants("lov", "lef"));
    }

    #[test]
    fn test_double_f_rule_is_decisive() {
        // v/ff shape applies, stems differ, so the ending table is never consulted
        assert_eq!(AffixRule::SlavicDoubleF.check("ivanov", "ivanoff"), Some(true));
        assert_eq!(AffixRule::SlavicDoubleF.check("ivanov", "petroff"), Some(false));
        assert_eq!(AffixRule::SlavicDoubleF.check("ivanov", "ivanof"), None);
    }

    #[test]
    fn test_rashid_rashidi_excluded() {
        let rules = VariationRuleSet::builtin();
        assert!(!rules.are_variants("rashid", "rashidi"));
        assert!(!rules.are_variants("rashidi", "rashid"));
    }

    #[test]
    fn test_similar_but_distinct() {
        let rules = VariationRuleSet::builtin();
        assert!(rules.are_similar_but_distinct("michael", "michelle"));
        assert!(rules.are_similar_but_distinct("Christian", "christopher"));
        assert!(!rules.are_similar_but_distinct("michael", "mike"));
    }

    #[test]
    fn test_known_non_match() {
        let rules = VariationRuleSet::builtin();
        assert!(rules.is_known_non_match("mario gonzalez", "maria gonzalez"));
        assert!(rules.is_known_non_match("Ahmed Al Rashid", "ahmed al rashidi"));
        assert!(!rules.is_known_non_match("ahmed al rashid", "ahmed al rashid"));
    }

    #[test]
    fn test_empty_rule_set() {
        let rules = VariationRuleSet::empty();
        assert!(!rules.are_variants("mcdonald", "macdonald"));
        assert!(!rules.are_nicknames("bob", "robert"));
    }

    #[test]
    fn test_apply_yaml_rules() {
        let yaml = r"
nicknames:
  alexander: [alex, sasha]
distinct_pairs:
  - [Francis, Frances]
variation_groups:
  - [sergei, sergey]
known_non_matches:
  - [francis bacon, frances bacon]
";
        let mut rules = VariationRuleSet::builtin();
        rules
            .apply(RuleSetFile::from_yaml(yaml).expect("valid yaml"))
            .expect("valid rules");

        assert!(rules.are_nicknames("sasha", "alexander"));
        assert!(rules.are_similar_but_distinct("francis", "frances"));
        assert!(rules.are_variants("sergey", "sergei"));
        assert!(rules.is_known_non_match("frances bacon", "francis bacon"));
        // builtins kept
        assert!(rules.are_nicknames("bob", "robert"));
    }

    #[test]
    fn test_apply_replace_builtins() {
        let json = r#"{"replace_builtins": true, "nicknames": {"robert": ["robbie"]}}"#;
        let mut rules = VariationRuleSet::builtin();
        rules
            .apply(RuleSetFile::from_json(json).expect("valid json"))
            .expect("valid rules");

        assert!(rules.are_nicknames("robbie", "robert"));
        assert!(!rules.are_nicknames("bob", "robert"));
        assert!(rules.known_non_matches.is_empty());
        assert_eq!(rules.affix_rules, AffixRule::all().to_vec());
    }

    #[test]
    fn test_apply_rejects_empty_tokens() {
        let json = r#"{"distinct_pairs": [["anna", ""]]}"#;
        let mut rules = VariationRuleSet::builtin();
        let err = rules
            .apply(RuleSetFile::from_json(json).expect("valid json"))
            .expect_err("empty token should be rejected");
        assert!(err.to_string().contains("Invalid rule set"));
    }

    #[test]
    fn test_invalid_json_rules() {
        let err = RuleSetFile::from_json("{not json").expect_err("invalid");
        assert!(matches!(
            err,
            NameVerifyError::Rules {
                source: RulesErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_rules_to_json() {
        let json = VariationRuleSet::builtin().to_json().expect("serializable");
        assert!(json.contains("\"bob\": \"robert\""));
        assert!(json.contains("slavic-ending"));
    }
}
