//! Offline pattern-based name generation.

use super::{validate_prompt, NameGenerator};
use crate::error::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

const ARABIC_FIRST: &[&str] = &[
    "Mohammed", "Abdullah", "Omar", "Ali", "Hassan", "Ahmed", "Yusuf", "Ibrahim",
];
const ARABIC_FAMILY: &[&str] = &["Rashid", "Saud", "Hassan", "Qasim", "Fayed", "Khattab", "Rahman"];

const WESTERN_FIRST: &[&str] = &[
    "John", "Michael", "Christopher", "Alexander", "Jonathan", "Steven", "Elizabeth",
];
const WESTERN_LAST: &[&str] = &["Smith", "Johnson", "Turner", "McDonald", "Thompson", "Nolan", "Carter"];

const SLAVIC_FIRST: &[&str] = &["Ivan", "Mikhail", "Alexander", "Dargulov"];
const SLAVIC_LAST: &[&str] = &["Petrov", "Gorbachov"];

const DEFAULT_FIRST: &[&str] = &[
    "Tyler", "Bob", "Sarah", "Jean-Luc", "Katherine", "Sean", "Emanuel", "Samantha",
];
const DEFAULT_LAST: &[&str] = &[
    "Bliha", "Ellensworth", "O'Connor", "Picard", "McDonald", "O'Brien", "Oscar", "Lee",
];

/// Name style requested by a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// Arabic given name with optional `ibn` patronymic and `Al` family name
    Arabic { patronymic: bool, family: bool },
    Western,
    Slavic,
    Default,
}

impl NameStyle {
    /// Detect the style from free-text prompt keywords.
    #[must_use]
    pub fn from_prompt(prompt: &str) -> Self {
        let prompt = prompt.to_lowercase();
        if prompt.contains("arabic") {
            Self::Arabic {
                patronymic: prompt.contains("ibn"),
                family: prompt.contains("al ") || prompt.contains("al-"),
            }
        } else if prompt.contains("european") || prompt.contains("western") {
            Self::Western
        } else if prompt.contains("slavic") || prompt.contains("russian") {
            Self::Slavic
        } else {
            Self::Default
        }
    }
}

/// Generates names by picking from fixed name pools.
#[derive(Debug)]
pub struct PatternGenerator {
    rng: Mutex<StdRng>,
}

impl Default for PatternGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternGenerator {
    /// Generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Generator with a fixed seed, for reproducible output.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Build a name in the given style.
    pub fn generate_style(&self, style: NameStyle) -> String {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut pick = |pool: &[&'static str]| -> &'static str {
            pool.choose(&mut *rng).copied().unwrap_or_default()
        };

        match style {
            NameStyle::Arabic { patronymic, family } => {
                let mut name = pick(ARABIC_FIRST).to_string();
                if patronymic {
                    name.push_str(" ibn ");
                    name.push_str(pick(ARABIC_FIRST));
                }
                if family {
                    name.push_str(" Al ");
                    name.push_str(pick(ARABIC_FAMILY));
                }
                name
            }
            NameStyle::Western => format!("{} {}", pick(WESTERN_FIRST), pick(WESTERN_LAST)),
            NameStyle::Slavic => format!("{} {}", pick(SLAVIC_FIRST), pick(SLAVIC_LAST)),
            NameStyle::Default => format!("{} {}", pick(DEFAULT_FIRST), pick(DEFAULT_LAST)),
        }
    }
}

impl NameGenerator for PatternGenerator {
    fn generate(&self, prompt: &str) -> Result<String> {
        validate_prompt(prompt)?;
        Ok(self.generate_style(NameStyle::from_prompt(prompt)))
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}
