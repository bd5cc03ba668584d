//! Curated nickname tables for informal/formal given-name correlation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Nickname table mapping informal tokens to a formal token.
///
/// Storage is one-directional (`bob -> robert`) but lookups treat each
/// formal name as an equivalence class: two tokens are nicknames of each
/// other when one maps to the other or both map to the same formal name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NicknameTable {
    /// Mapping from informal token to formal token
    informal_to_formal: IndexMap<String, String>,
}

impl NicknameTable {
    /// Create a new empty nickname table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a nickname table with the built-in English nickname set
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        table.load_builtins();
        table
    }

    fn load_builtins(&mut self) {
        self.add_nicknames("robert", &["bob", "rob", "bobby"]);
        self.add_nicknames("elizabeth", &["liz", "beth", "lizzy"]);
        self.add_nicknames("michael", &["mike", "mikey"]);
        self.add_nicknames("steven", &["steve", "stephen"]);
        self.add_nicknames("katherine", &["kate", "katie", "catherine"]);
        self.add_nicknames("catherine", &["cathy"]);
        self.add_nicknames("william", &["bill", "will", "billy"]);
        self.add_nicknames("jonathan", &["jon", "jonathon"]);

        // Spelling pair stored in both directions
        self.add_nicknames("shawn", &["sean"]);
        self.add_nicknames("sean", &["shawn"]);
    }

    /// Register informal forms of a formal name.
    ///
    /// A later registration for the same informal token replaces the earlier one.
    pub fn add_nicknames(&mut self, formal: &str, informal: &[&str]) {
        let formal_lower = formal.to_lowercase();
        for nick in informal {
            self.informal_to_formal
                .insert(nick.to_lowercase(), formal_lower.clone());
        }
    }

    /// Get the formal name an informal token maps to
    #[must_use]
    pub fn get_formal(&self, informal: &str) -> Option<&str> {
        self.informal_to_formal
            .get(&informal.to_lowercase())
            .map(String::as_str)
    }

    /// Check whether two tokens are nickname-equivalent.
    #[must_use]
    pub fn are_nicknames(&self, a: &str, b: &str) -> bool {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        let formal_a = self.get_formal(&a);
        let formal_b = self.get_formal(&b);

        if formal_a == Some(b.as_str()) || formal_b == Some(a.as_str()) {
            return true;
        }

        matches!((formal_a, formal_b), (Some(fa), Some(fb)) if fa == fb)
    }

    /// Number of informal entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.informal_to_formal.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.informal_to_formal.is_empty()
    }
}
