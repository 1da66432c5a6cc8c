//! Per-column key recovery by chi-squared fit to letter frequencies.

use crate::coincidence::{column, symbol_counts};
use crate::periodicity::minimal_period;
use tracing::trace;
use vg_core::{Alphabet, LanguageProfile};

/// Chi-squared distance between the column histogram read at `shift` and
/// the expected counts for a column of `column_len` symbols.
pub fn chi_squared(counts: &[usize], shift: usize, column_len: usize, profile: &LanguageProfile) -> f64 {
    let n = counts.len();
    (0..n)
        .map(|j| {
            let expected = profile.weight(j) * column_len as f64 / 100.0;
            if expected > 0.0 {
                let diff = counts[(j + shift) % n] as f64 - expected;
                diff * diff / expected
            } else {
                0.0
            }
        })
        .sum()
}

/// Shift with the lowest chi-squared score; the first minimum wins.
pub fn best_shift(column: &[char], alphabet: &Alphabet, profile: &LanguageProfile) -> usize {
    let counts = symbol_counts(column, alphabet);
    let mut best = 0;
    let mut best_score = f64::INFINITY;
    for shift in 0..alphabet.len() {
        let score = chi_squared(&counts, shift, column.len(), profile);
        if score < best_score {
            best_score = score;
            best = shift;
        }
    }
    best
}

/// Recover a key of `key_length` symbols, collapsed to its minimal period.
pub fn recover_key(
    ciphertext: &[char],
    key_length: usize,
    alphabet: &Alphabet,
    profile: &LanguageProfile,
) -> String {
    if key_length == 0 {
        return String::new();
    }
    let symbols = alphabet.symbols();
    let raw: Vec<char> = (0..key_length)
        .map(|offset| {
            let shift = best_shift(&column(ciphertext, offset, key_length), alphabet, profile);
            trace!(column = offset, shift, "key column");
            symbols[shift]
        })
        .collect();
    minimal_period(&raw).iter().collect()
}
