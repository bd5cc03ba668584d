//! Token-order inversion detection.
//!
//! Swapping given name and surname, or the two sides of a patronymic,
//! changes identity even when every token is present in both names.

/// Patronymic marker token ("son of").
pub const PATRONYMIC_MARKER: &str = "ibn";

/// Detects token-order inversions that must never match.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderSwapDetector;

impl OrderSwapDetector {
    /// Check whether `candidate` is a disallowed reordering of `target`.
    ///
    /// Two-token names are compared for exact reversal and nothing else.
    /// Otherwise, when both names contain the patronymic marker, the
    /// neighbours of its first occurrence are compared crosswise; a missing
    /// neighbour counts as an empty token.
    #[must_use]
    pub fn is_swap<S: AsRef<str>>(target: &[S], candidate: &[S]) -> bool {
        if target.len() == 2 && candidate.len() == 2 {
            return target[0].as_ref() == candidate[1].as_ref()
                && target[1].as_ref() == candidate[0].as_ref();
        }

        let (Some(t_pos), Some(c_pos)) = (marker_position(target), marker_position(candidate))
        else {
            return false;
        };

        neighbour(target, t_pos, Side::Before) == neighbour(candidate, c_pos, Side::After)
            && neighbour(target, t_pos, Side::After) == neighbour(candidate, c_pos, Side::Before)
    }
}

#[derive(Clone, Copy)]
enum Side {
    Before,
    After,
}

fn marker_position<S: AsRef<str>>(tokens: &[S]) -> Option<usize> {
    tokens.iter().position(|t| t.as_ref() == PATRONYMIC_MARKER)
}

fn neighbour<S: AsRef<str>>(tokens: &[S], pos: usize, side: Side) -> &str {
    let index = match side {
        Side::Before => pos.checked_sub(1),
        Side::After => Some(pos + 1),
    };
    index
        .and_then(|i| tokens.get(i))
        .map_or("", |t| t.as_ref())
}
