//! Ciphertext-only analysis of repeating-key Vigenère.
//!
//! Stages:
//! 1. Coincidence: index of coincidence of a symbol sequence
//! 2. Key length: average IC per candidate period, nearest to the language
//!    reference, then collapse onto a matching divisor
//! 3. Key recovery: chi-squared fit of each column against letter frequencies
//! 4. Periodicity: reduce a repeated key to its shortest unit
//! 5. Attack: filter, run 2 and 3, decrypt with the recovered key

pub mod attack;
pub mod coincidence;
pub mod key_length;
pub mod key_recovery;
pub mod periodicity;

pub use attack::{attack, decrypt_with_key, AnalysisResult, Analyzer};
pub use coincidence::index_of_coincidence;
pub use key_length::estimate_key_length;
pub use key_recovery::recover_key;
pub use periodicity::minimal_period;
