//! Ordered symbol sets with constant-time lookup in both directions.
//!
//! An alphabet is a run of letters followed by the digits `0-9`. The split
//! matters: only the letter part takes part in script detection and only the
//! letter part has reference frequencies.

use crate::error::{Result, VgError};
use std::collections::HashMap;

/// Digits appended to every built-in alphabet.
pub const DIGITS: &str = "0123456789";

#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    positions: HashMap<char, usize>,
    letter_count: usize,
}

impl Alphabet {
    /// Build an alphabet from `letters` followed by `digits`.
    ///
    /// Fails if the combined sequence has fewer than two symbols or repeats a
    /// symbol.
    pub fn new(letters: &str, digits: &str) -> Result<Self> {
        let alphabet = Self::build(letters, digits);
        if alphabet.symbols.len() < 2 {
            return Err(VgError::InvalidAlphabet(format!(
                "needs at least 2 symbols, got {}",
                alphabet.symbols.len()
            )));
        }
        if alphabet.positions.len() != alphabet.symbols.len() {
            let duplicate = alphabet
                .symbols
                .iter()
                .enumerate()
                .find(|&(i, &c)| alphabet.positions.get(&c) != Some(&i))
                .map(|(_, c)| *c)
                .unwrap_or_default();
            return Err(VgError::InvalidAlphabet(format!("duplicate symbol {duplicate:?}")));
        }
        Ok(alphabet)
    }

    /// Unchecked construction for the built-in tables. The first occurrence of
    /// a symbol keeps its position.
    pub(crate) fn build(letters: &str, digits: &str) -> Self {
        let mut symbols: Vec<char> = letters.chars().collect();
        let letter_count = symbols.len();
        symbols.extend(digits.chars());

        let mut positions = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            positions.entry(c).or_insert(i);
        }

        Self { symbols, positions, letter_count }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    pub fn symbol_at(&self, position: usize) -> Option<char> {
        self.symbols.get(position).copied()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.positions.contains_key(&symbol)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The letter part, without the trailing digits.
    pub fn letters(&self) -> &[char] {
        &self.symbols[..self.letter_count]
    }

    pub fn letter_count(&self) -> usize {
        self.letter_count
    }

    pub fn is_letter(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some_and(|i| i < self.letter_count)
    }

    /// Lower-case `text` and keep only the symbols of this alphabet.
    pub fn filter(&self, text: &str) -> Vec<char> {
        text.to_lowercase().chars().filter(|c| self.contains(*c)).collect()
    }
}
