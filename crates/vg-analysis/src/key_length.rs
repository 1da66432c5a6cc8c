//! Key length estimation from the periodicity of the index of coincidence.

use crate::coincidence::{column, index_of_coincidence};
use tracing::trace;
use vg_core::{Alphabet, AnalysisConfig, Language};

/// Mean IC of the `period` interleaved columns of `ciphertext`.
pub fn average_ic(ciphertext: &[char], period: usize, alphabet: &Alphabet) -> f64 {
    if period == 0 {
        return 0.0;
    }
    let total: f64 = (0..period)
        .map(|offset| index_of_coincidence(&column(ciphertext, offset, period), alphabet))
        .sum();
    total / period as f64
}

/// Average IC for every period `1..=max_period`. Index 0 is unused and holds 0.
pub fn ic_profile(ciphertext: &[char], alphabet: &Alphabet, max_period: usize) -> Vec<f64> {
    std::iter::once(0.0)
        .chain((1..=max_period).map(|period| {
            let avg = average_ic(ciphertext, period, alphabet);
            trace!(period, avg_ic = avg, "candidate key length");
            avg
        }))
        .collect()
}

/// Estimate the key period of `ciphertext` with the default candidate range.
pub fn estimate_key_length(ciphertext: &[char], language: Language) -> usize {
    estimate_key_length_with(
        ciphertext,
        language.alphabet(),
        language.profile().reference_ic,
        &AnalysisConfig::default(),
    )
}

/// Pick the candidate whose average IC is closest to `reference_ic`, then
/// prefer the smallest divisor whose average IC lies within
/// `collapse_tolerance` of it.
pub fn estimate_key_length_with(
    ciphertext: &[char],
    alphabet: &Alphabet,
    reference_ic: f64,
    config: &AnalysisConfig,
) -> usize {
    let candidates = config.candidate_lengths();
    let (min, max) = (*candidates.start(), *candidates.end());
    let profile = ic_profile(ciphertext, alphabet, max);

    let mut best = min;
    let mut best_distance = (profile[min] - reference_ic).abs();
    for (period, &avg) in profile.iter().enumerate().skip(min + 1) {
        let distance = (avg - reference_ic).abs();
        if distance < best_distance {
            best_distance = distance;
            best = period;
        }
    }

    collapse_to_divisor(&profile, best, config.collapse_tolerance)
}

/// Smallest proper divisor `d` of `best` with
/// `|profile[d] - profile[best]| < tolerance`, or `best` itself.
pub fn collapse_to_divisor(profile: &[f64], best: usize, tolerance: f64) -> usize {
    let Some(&best_ic) = profile.get(best) else {
        return best;
    };
    (1..best)
        .filter(|d| best % d == 0)
        .find(|&d| profile.get(d).is_some_and(|&ic| (ic - best_ic).abs() < tolerance))
        .unwrap_or(best)
}
