use crate::error::{Result, VgError};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Tunables for ciphertext-only analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Shortest key length considered.
    pub min_key_length: usize,
    /// Longest key length considered.
    pub max_key_length: usize,
    /// Largest average-IC gap at which a divisor of the best length is
    /// preferred over it.
    pub collapse_tolerance: f64,
}

impl AnalysisConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_key_length == 0 {
            return Err(VgError::InvalidConfig("min_key_length must be at least 1".into()));
        }
        if self.min_key_length > self.max_key_length {
            return Err(VgError::InvalidConfig(format!(
                "min_key_length {} exceeds max_key_length {}",
                self.min_key_length, self.max_key_length
            )));
        }
        if !self.collapse_tolerance.is_finite() || self.collapse_tolerance < 0.0 {
            return Err(VgError::InvalidConfig(format!(
                "collapse_tolerance must be a non-negative number, got {}",
                self.collapse_tolerance
            )));
        }
        Ok(())
    }

    /// Key lengths to try. An unvalidated config is clamped so that the
    /// range is never empty and never contains 0.
    pub fn candidate_lengths(&self) -> RangeInclusive<usize> {
        let min = self.min_key_length.max(1);
        min..=self.max_key_length.max(min)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_key_length: 1,
            max_key_length: 20,
            collapse_tolerance: 0.01,
        }
    }
}
