//! String similarity algorithms for whole-name and token comparison.
//!
//! This module provides the edit-distance, phonetic and character-overlap
//! signals used by the verification engine. All functions are total: empty
//! input yields a defined score rather than an error.

use strsim::levenshtein;

/// Score for identical phonetic codes.
pub const PHONETIC_EXACT: f64 = 0.9;
/// Score when the first three code characters agree.
pub const PHONETIC_PREFIX: f64 = 0.7;
/// Score for unrelated phonetic codes.
pub const PHONETIC_NONE: f64 = 0.3;

/// Character count used for length normalization.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Edit distance between two strings, in characters.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// Normalized edit similarity: `1 - distance / max_len`.
///
/// Returns 0.0 when both strings are empty.
#[must_use]
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let max_len = char_len(a).max(char_len(b));
    if max_len == 0 {
        return 0.0;
    }
    1.0 - (edit_distance(a, b) as f64 / max_len as f64)
}

/// Soundex digit for an upper-case ASCII letter; `None` for vowels and H/W/Y.
#[must_use]
pub const fn soundex_digit(c: char) -> Option<char> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

/// Four-character soundex-style code for a whole name.
///
/// Non-letters (spaces included) are skipped without affecting adjacency.
/// Vowels and H/W/Y reset adjacency, so a consonant code repeated across a
/// vowel is emitted twice. Empty input gives an empty code; input without
/// ASCII letters gives `"0000"`.
#[must_use]
pub fn phonetic_code(name: &str) -> String {
    let mut code = String::with_capacity(4);
    let mut last: Option<char> = None;

    for c in name.chars().filter(char::is_ascii_alphabetic) {
        if code.len() == 4 {
            break;
        }
        let upper = c.to_ascii_uppercase();
        if code.is_empty() {
            code.push(upper);
            last = soundex_digit(upper);
            continue;
        }
        let digit = soundex_digit(upper);
        if digit != last {
            if let Some(d) = digit {
                code.push(d);
            }
            last = digit;
        }
    }

    if name.is_empty() {
        return code;
    }
    while code.len() < 4 {
        code.push('0');
    }
    code
}

/// Phonetic closeness of two whole names.
///
/// Equal codes score [`PHONETIC_EXACT`], a shared three-character prefix
/// scores [`PHONETIC_PREFIX`], anything else [`PHONETIC_NONE`].
#[must_use]
pub fn phonetic_score(name_a: &str, name_b: &str) -> f64 {
    let code_a = phonetic_code(name_a);
    let code_b = phonetic_code(name_b);

    if code_a == code_b {
        return PHONETIC_EXACT;
    }

    let prefix = |code: &str| code.chars().take(3).collect::<String>();
    if prefix(&code_a) == prefix(&code_b) {
        PHONETIC_PREFIX
    } else {
        PHONETIC_NONE
    }
}

/// Number of characters shared between two strings.
///
/// Finds the first longest common substring, then recurses into the text
/// to its left and right.
#[must_use]
pub fn common_char_count(a: &[u8], b: &[u8]) -> usize {
    let mut max = 0;
    let (mut pos_a, mut pos_b) = (0, 0);

    for i in 0..a.len() {
        for j in 0..b.len() {
            let run = a[i..]
                .iter()
                .zip(&b[j..])
                .take_while(|(x, y)| x == y)
                .count();
            if run > max {
                max = run;
                pos_a = i;
                pos_b = j;
            }
        }
    }

    if max == 0 {
        return 0;
    }

    let mut sum = max;
    if pos_a > 0 && pos_b > 0 {
        sum += common_char_count(&a[..pos_a], &b[..pos_b]);
    }
    if pos_a + max < a.len() && pos_b + max < b.len() {
        sum += common_char_count(&a[pos_a + max..], &b[pos_b + max..]);
    }
    sum
}

/// Character-overlap ratio: `2 * common / (len_a + len_b)`.
///
/// Returns 0.0 when both strings are empty.
#[must_use]
pub fn overlap_score(a: &str, b: &str) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    (common_char_count(a.as_bytes(), b.as_bytes()) * 2) as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_similarity() {
        assert!((edit_similarity("jonathon", "jonathan") - 0.875).abs() < 1e-9);
        assert_eq!(edit_similarity("", ""), 0.0);
        assert_eq!(edit_similarity("abc", ""), 0.0);
        assert_eq!(edit_similarity("abc", "abc"), 1.0);
    }

    #[test]
    fn test_phonetic_code_basic() {
        assert_eq!(phonetic_code("Robert"), "R163");
        assert_eq!(phonetic_code("tyler bliha"), "T461");
        assert_eq!(phonetic_code("tlyer bilha"), "T461");
    }

    #[test]
    fn test_phonetic_code_vowel_resets_adjacency() {
        assert_eq!(phonetic_code("nolan"), "N450");
        // n and m share a digit but are separated by a vowel
        assert_eq!(phonetic_code("manam"), "M550");
    }

    #[test]
    fn test_phonetic_code_skips_non_letters() {
        assert_eq!(phonetic_code("al hilal"), phonetic_code("alhilal"));
        assert_eq!(phonetic_code(""), "");
        assert_eq!(phonetic_code("123 -"), "0000");
    }

    #[test]
    fn test_phonetic_score_levels() {
        assert_eq!(phonetic_score("smith", "smyth"), PHONETIC_EXACT);
        assert_eq!(phonetic_score("bob ellensworth", "robert ellensworth"), PHONETIC_NONE);
        assert_eq!(phonetic_score("", ""), PHONETIC_EXACT);
        assert_eq!(phonetic_score("123", ""), PHONETIC_NONE);
        assert_eq!(phonetic_score("123", "45"), PHONETIC_EXACT);
    }

    #[test]
    fn test_common_char_count() {
        assert_eq!(common_char_count(b"world", b"word"), 4);
        assert_eq!(common_char_count(b"", b"abc"), 0);
        assert_eq!(common_char_count(b"abc", b"xyz"), 0);
    }

    #[test]
    fn test_common_char_count_transposition() {
        assert_eq!(common_char_count(b"tyler bliha", b"tlyer bilha"), 9);
    }

    #[test]
    fn test_overlap_score() {
        assert!((overlap_score("al hilal", "alhilal") - 14.0 / 15.0).abs() < 1e-9);
        assert_eq!(overlap_score("", ""), 0.0);
        assert_eq!(overlap_score("same", "same"), 1.0);
    }
}
