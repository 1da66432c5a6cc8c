//! The repeating-key shift itself.

use crate::validate;
use tracing::trace;
use vg_core::{Language, Result, VgError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Encode or decode `text` under the repeating `key`.
///
/// Checks run in this order: empty input, script mismatch, key symbols,
/// text symbols. The output has exactly as many symbols as the input.
pub fn process(text: &str, key: &str, language: Language, direction: Direction) -> Result<String> {
    if text.trim().is_empty() || key.trim().is_empty() {
        return Err(VgError::EmptyInput);
    }

    let text = text.to_lowercase();
    validate::check_script(&text, language)?;
    let shifts = validate::key_shifts(key, language)?;
    let positions = validate::text_positions(&text, language)?;

    let alphabet = language.alphabet();
    let symbols = alphabet.symbols();
    let n = alphabet.len();

    let output: String = positions
        .iter()
        .zip(shifts.iter().cycle())
        .map(|(&p, &s)| match direction {
            Direction::Encrypt => symbols[(p + s) % n],
            Direction::Decrypt => symbols[(p + n - s) % n],
        })
        .collect();

    trace!(%language, ?direction, symbols = positions.len(), key_len = shifts.len(), "vigenere transform");
    Ok(output)
}

pub fn encrypt(text: &str, key: &str, language: Language) -> Result<String> {
    process(text, key, language, Direction::Encrypt)
}

pub fn decrypt(text: &str, key: &str, language: Language) -> Result<String> {
    process(text, key, language, Direction::Decrypt)
}
