use crate::language::Language;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VgError {
    #[error("Text or key must not be empty")]
    EmptyInput,
    #[error("Key contains {symbol:?}, which is not in the {language} alphabet")]
    InvalidKeySymbol { symbol: char, language: Language },
    #[error("Text contains {found} letters but the {selected} alphabet is selected")]
    ScriptMismatch { found: Language, selected: Language },
    #[error("Text contains {symbol:?}, which is not in the {language} alphabet")]
    InvalidTextSymbol { symbol: char, language: Language },
    #[error("Nothing is left of the ciphertext after dropping symbols outside the {language} alphabet")]
    EmptyAfterFilter { language: Language },
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),
    #[error("Invalid analysis config: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VgError {
    /// Stable machine-readable kind, independent of the message text.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidKeySymbol { .. } => "invalid_key_symbol",
            Self::ScriptMismatch { .. } => "script_mismatch",
            Self::InvalidTextSymbol { .. } => "invalid_text_symbol",
            Self::EmptyAfterFilter { .. } => "empty_after_filter",
            Self::UnknownLanguage(_) => "unknown_language",
            Self::InvalidAlphabet(_) => "invalid_alphabet",
            Self::InvalidConfig(_) => "invalid_config",
            Self::Serialization(_) => "serialization",
        }
    }

    /// True for errors caused by the caller's input rather than by
    /// configuration or serialization.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::InvalidKeySymbol { .. }
                | Self::ScriptMismatch { .. }
                | Self::InvalidTextSymbol { .. }
                | Self::EmptyAfterFilter { .. }
                | Self::UnknownLanguage(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, VgError>;
