//! Index of coincidence and the column helpers shared by later stages.

use vg_core::Alphabet;

/// Occurrences of each alphabet symbol, indexed by alphabet position.
/// Symbols outside the alphabet are skipped.
pub fn symbol_counts(sequence: &[char], alphabet: &Alphabet) -> Vec<usize> {
    let mut counts = vec![0usize; alphabet.len()];
    for &c in sequence {
        if let Some(i) = alphabet.index_of(c) {
            counts[i] += 1;
        }
    }
    counts
}

/// Every `period`-th symbol starting at `offset`.
///
/// `period` must be non-zero.
pub fn column(sequence: &[char], offset: usize, period: usize) -> Vec<char> {
    sequence.iter().skip(offset).step_by(period).copied().collect()
}

/// `Σ f·(f−1) / (n·(n−1))` over the alphabet symbol counts, where `n` is the
/// full sequence length. Sequences shorter than two symbols yield 0.
pub fn index_of_coincidence(sequence: &[char], alphabet: &Alphabet) -> f64 {
    let n = sequence.len();
    if n < 2 {
        return 0.0;
    }
    let coincidences: usize = symbol_counts(sequence, alphabet)
        .iter()
        .map(|&f| f * f.saturating_sub(1))
        .sum();
    coincidences as f64 / (n as f64 * (n - 1) as f64)
}
