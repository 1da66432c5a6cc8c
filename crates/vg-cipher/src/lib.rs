//! Vigenère encode/decode over the configured alphabets.
//!
//! Text and key are lower-cased; every text symbol must belong to the
//! selected alphabet. Unlike the analysis path, nothing is filtered here:
//! an unknown symbol fails the whole call.

pub mod transform;
pub mod validate;

pub use transform::{decrypt, encrypt, process, Direction};
