//! Shared building blocks for the Vigenère toolkit: alphabets, language
//! reference tables, the error type and analysis configuration.

pub mod alphabet;
pub mod config;
pub mod error;
pub mod language;

pub use alphabet::Alphabet;
pub use config::AnalysisConfig;
pub use error::{Result, VgError};
pub use language::{Language, LanguageProfile};
