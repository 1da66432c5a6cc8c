//! Attack orchestration: known-key decryption and ciphertext-only recovery.

use crate::key_length::estimate_key_length_with;
use crate::key_recovery::recover_key;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vg_core::{AnalysisConfig, Language, Result, VgError};

/// Outcome of a ciphertext-only attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Period chosen by the key length estimator, before the recovered key
    /// is collapsed.
    pub estimated_key_length: usize,
    pub recovered_key: String,
    pub decoded_text: String,
}

/// Runs attacks under a validated [`AnalysisConfig`].
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Decrypt with a known key. Same validation as [`vg_cipher::decrypt`].
    pub fn decrypt_with_key(&self, ciphertext: &str, key: &str, language: Language) -> Result<String> {
        vg_cipher::decrypt(ciphertext, key, language)
    }

    /// Recover key and plaintext from ciphertext alone.
    ///
    /// Symbols outside the alphabet are dropped rather than rejected, so the
    /// only input error is a ciphertext with nothing left after filtering.
    /// The decoded text is the filtered, lower-cased ciphertext decrypted.
    pub fn attack(&self, ciphertext: &str, language: Language) -> Result<AnalysisResult> {
        let alphabet = language.alphabet();
        let filtered = alphabet.filter(ciphertext);
        if filtered.is_empty() {
            return Err(VgError::EmptyAfterFilter { language });
        }
        debug!(%language, filtered_len = filtered.len(), "attacking ciphertext");

        let profile = language.profile();
        let estimated_key_length =
            estimate_key_length_with(&filtered, alphabet, profile.reference_ic, &self.config);
        let recovered_key = recover_key(&filtered, estimated_key_length, alphabet, profile);
        debug!(estimated_key_length, key = %recovered_key, "recovered key");

        let working: String = filtered.iter().collect();
        let decoded_text = self.decrypt_with_key(&working, &recovered_key, language)?;

        Ok(AnalysisResult {
            estimated_key_length,
            recovered_key,
            decoded_text,
        })
    }
}

/// [`Analyzer::attack`] with the default configuration.
pub fn attack(ciphertext: &str, language: Language) -> Result<AnalysisResult> {
    Analyzer::default().attack(ciphertext, language)
}

/// [`Analyzer::decrypt_with_key`] with the default configuration.
pub fn decrypt_with_key(ciphertext: &str, key: &str, language: Language) -> Result<String> {
    Analyzer::default().decrypt_with_key(ciphertext, key, language)
}
