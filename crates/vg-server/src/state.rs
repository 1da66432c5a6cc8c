//! Application state shared across all handlers.

use std::sync::Arc;
use vg_analysis::Analyzer;
use vg_core::{AnalysisConfig, Result};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_analyzer(Analyzer::default())
    }

    /// State whose attacks run under `config`; fails if the config is invalid.
    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        Ok(Self::with_analyzer(Analyzer::new(config)?))
    }

    fn with_analyzer(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            start_time: std::time::Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
