//! Input checks for the encode/decode path.

use vg_core::{Language, Result, VgError};

/// Strip all whitespace from a key and lower-case it.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Alphabet positions of the normalized key symbols.
pub fn key_shifts(key: &str, language: Language) -> Result<Vec<usize>> {
    let alphabet = language.alphabet();
    normalize_key(key)
        .chars()
        .map(|symbol| {
            alphabet
                .index_of(symbol)
                .ok_or(VgError::InvalidKeySymbol { symbol, language })
        })
        .collect()
}

/// Reject text carrying letters of another supported language.
///
/// Only letter sets are compared, so digits never trigger a mismatch.
/// `text` is expected to be lower-cased already.
pub fn check_script(text: &str, language: Language) -> Result<()> {
    for other in language.others() {
        let letters = other.alphabet();
        if text.chars().any(|c| letters.is_letter(c)) {
            return Err(VgError::ScriptMismatch { found: other, selected: language });
        }
    }
    Ok(())
}

/// Alphabet positions of every text symbol; fails on the first symbol
/// outside the alphabet.
pub fn text_positions(text: &str, language: Language) -> Result<Vec<usize>> {
    let alphabet = language.alphabet();
    text.chars()
        .map(|symbol| {
            alphabet
                .index_of(symbol)
                .ok_or(VgError::InvalidTextSymbol { symbol, language })
        })
        .collect()
}
