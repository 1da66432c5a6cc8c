//! Supported languages and their reference statistics.

use crate::alphabet::{Alphabet, DIGITS};
use crate::error::VgError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const RUSSIAN_LETTERS: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
const ENGLISH_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

static RUSSIAN_ALPHABET: LazyLock<Alphabet> =
    LazyLock::new(|| Alphabet::build(RUSSIAN_LETTERS, DIGITS));
static ENGLISH_ALPHABET: LazyLock<Alphabet> =
    LazyLock::new(|| Alphabet::build(ENGLISH_LETTERS, DIGITS));

/// Percent frequency of each letter in natural text, in alphabet order.
const ENGLISH_FREQUENCIES: [f64; 26] = [
    8.2, 1.5, 2.8, 4.3, 13.0, 2.2, 2.0, 6.1, 7.0, 0.15, 0.77, 4.0, 2.4,
    6.7, 7.5, 1.9, 0.095, 6.0, 6.3, 9.1, 2.8, 0.98, 2.4, 0.15, 2.0, 0.074,
];

const RUSSIAN_FREQUENCIES: [f64; 33] = [
    8.01, 1.59, 4.54, 1.70, 2.98, 8.45, 0.04, 0.94, 1.65, 7.36, 1.21, 3.49,
    4.40, 3.21, 6.70, 10.97, 2.81, 4.73, 5.47, 6.26, 2.62, 0.26, 0.97, 0.48,
    1.44, 0.73, 0.36, 0.04, 1.90, 1.74, 0.32, 0.32, 0.64,
];

static ENGLISH_PROFILE: LanguageProfile = LanguageProfile {
    letter_frequencies: &ENGLISH_FREQUENCIES,
    reference_ic: 0.0667,
};

static RUSSIAN_PROFILE: LanguageProfile = LanguageProfile {
    letter_frequencies: &RUSSIAN_FREQUENCIES,
    reference_ic: 0.0529,
};

/// Language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(alias = "russian", alias = "ru")]
    Russian,
    #[serde(alias = "english", alias = "en")]
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Russian, Language::English];

    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Self::Russian => &RUSSIAN_ALPHABET,
            Self::English => &ENGLISH_ALPHABET,
        }
    }

    pub fn profile(self) -> &'static LanguageProfile {
        match self {
            Self::Russian => &RUSSIAN_PROFILE,
            Self::English => &ENGLISH_PROFILE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Russian => "Russian",
            Self::English => "English",
        }
    }

    /// Every supported language except `self`.
    pub fn others(self) -> impl Iterator<Item = Language> {
        Self::ALL.into_iter().filter(move |l| *l != self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = VgError;

    /// Accepts the English names, ISO 639-1 codes and the native selector
    /// labels ("Русский", "Английский"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "russian" | "ru" | "русский" => Ok(Self::Russian),
            "english" | "en" | "английский" => Ok(Self::English),
            _ => Err(VgError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Reference statistics of natural text in one language.
#[derive(Debug)]
pub struct LanguageProfile {
    /// Percent frequencies for the letter positions of the alphabet.
    pub letter_frequencies: &'static [f64],
    /// Expected index of coincidence of plaintext.
    pub reference_ic: f64,
}

impl LanguageProfile {
    /// Weight of positions past the letter table (the digits).
    pub const DIGIT_WEIGHT: f64 = 1.0;

    /// Expected percentage for an alphabet position.
    pub fn weight(&self, position: usize) -> f64 {
        self.letter_frequencies
            .get(position)
            .copied()
            .unwrap_or(Self::DIGIT_WEIGHT)
    }
}
