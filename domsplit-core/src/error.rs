//! Core error types
//!
//! Segmentation, scoring and casing never fail. Errors only arise while
//! loading or validating a lexicon, or when a caller-supplied split does
//! not reproduce the characters of the domain it claims to describe.

use thiserror::Error;

/// Core errors (lexicon loading and split validation)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Lexicon TOML could not be parsed
    #[error("failed to parse lexicon '{source_name}': {reason}")]
    LexiconParse {
        /// Lexicon code or file path
        source_name: String,
        /// Parser message
        reason: String,
    },

    /// Lexicon parsed but failed validation
    #[error("invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// No embedded lexicon with this code
    #[error("unknown lexicon code: {0}")]
    UnknownLexicon(String),

    /// Lexicon file could not be read
    #[error("failed to read lexicon file {path}: {reason}")]
    LexiconIo {
        /// File path
        path: String,
        /// I/O error message
        reason: String,
    },

    /// Tokens do not reproduce the characters of the SLD
    #[error("split '{split}' does not match the characters of '{expected}'")]
    SplitMismatch {
        /// The space-joined split that was offered
        split: String,
        /// The SLD it had to reproduce
        expected: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_mismatch_display() {
        let err = CoreError::SplitMismatch {
            split: "best pizzas".to_string(),
            expected: "bestpizza".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "split 'best pizzas' does not match the characters of 'bestpizza'"
        );
    }

    #[test]
    fn test_unknown_lexicon_display() {
        let err = CoreError::UnknownLexicon("xx".to_string());
        assert_eq!(err.to_string(), "unknown lexicon code: xx");
    }
}
