//! Name normalization and tokenization.
//!
//! Every comparison in the engine runs on a [`NormalizedName`]: lower-cased,
//! quote characters removed, hyphens turned into spaces and whitespace
//! collapsed to single spaces. Tokens are the space-separated parts of that
//! string, in their original order.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Characters dropped entirely during normalization.
const STRIPPED_CHARS: [char; 3] = ['\'', '"', '`'];

/// A canonicalized name string.
///
/// Normalizing an already normalized string returns it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Normalize a raw name.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into ordered, non-empty tokens.
    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        tokenize(&self.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a raw name string.
///
/// Lower-cases, removes `'`, `"` and `` ` ``, replaces `-` with a space,
/// collapses whitespace runs and trims. Never fails; empty input yields an
/// empty string.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .map(|c| if c == '-' { ' ' } else { c })
        .collect();

    WHITESPACE_RUN.replace_all(&cleaned, " ").trim().to_string()
}

/// Split a normalized name into tokens, discarding empty ones.
#[must_use]
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split(' ').filter(|t| !t.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_case_and_hyphen() {
        assert_eq!(normalize("Al-Hilal"), "al hilal");
        assert_eq!(normalize("Jean-Luc Picard"), "jean luc picard");
    }

    #[test]
    fn test_normalize_strips_quotes() {
        assert_eq!(normalize("Sarah O'Connor"), "sarah oconnor");
        assert_eq!(normalize("\"Bob\" `Smith`"), "bob smith");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Ahmed \t Al   Rashid  "), "ahmed al rashid");
        assert_eq!(normalize("a - b"), "a b");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("'-'"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in ["Omar ibn Al-Khattab", "  O'Brien ", "Mc-Donald--Smith"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_tokenize_order_preserved() {
        assert_eq!(tokenize("abdullah ibn omar"), vec!["abdullah", "ibn", "omar"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_normalized_name_tokens() {
        let name = NormalizedName::new("Jean-Luc  PICARD");
        assert_eq!(name.as_str(), "jean luc picard");
        assert_eq!(name.tokens(), vec!["jean", "luc", "picard"]);
        assert_eq!(name.to_string(), "jean luc picard");
    }
}
