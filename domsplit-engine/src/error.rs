//! Engine error types

use domsplit_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Core error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Edit addressed a row that does not exist
    #[error("result index {index} out of range for batch of {len}")]
    IndexOutOfRange {
        /// Requested row
        index: usize,
        /// Rows in the batch
        len: usize,
    },

    /// Manual split changes the characters of the domain
    #[error("split '{split}' does not match the characters of '{expected}'")]
    SplitMismatch {
        /// Joined split as given
        split: String,
        /// SLD it had to reproduce
        expected: String,
    },

    /// Thread pool could not be built
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// A writer panicked while holding the batch lock
    #[error("batch lock poisoned")]
    LockPoisoned,
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(err.to_string(), "result index 5 out of range for batch of 2");

        let err: EngineError = CoreError::UnknownLexicon("xx".to_string()).into();
        assert!(matches!(err, EngineError::Core(_)));
    }
}
