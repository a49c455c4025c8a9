//! Configuration types for the engine

use crate::{
    cloud::CloudBounds,
    error::{EngineError, Result},
    ExecutionMode,
};

/// Default batch size at which adaptive mode goes parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Default number of words that make it into the word cloud
pub const DEFAULT_CLOUD_MAX_WORDS: usize = 50;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = rayon default)
    pub threads: Option<usize>,
    /// Minimum batch size for adaptive parallel processing
    pub parallel_threshold: usize,
    /// Word cloud display size range
    pub cloud: CloudBounds,
    /// Most frequent filtered words included in the cloud
    pub cloud_max_words: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            cloud: CloudBounds::default(),
            cloud_max_words: DEFAULT_CLOUD_MAX_WORDS,
        }
    }
}

impl EngineConfig {
    /// Create a fast configuration that goes parallel early
    pub fn fast() -> Self {
        Self {
            parallel_threshold: 64,
            ..Self::default()
        }
    }

    /// Create a single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be greater than 0".to_string(),
            ));
        }
        if self.cloud.min_size > self.cloud.max_size {
            return Err(EngineError::ConfigError(format!(
                "cloud min size {} exceeds max size {}",
                self.cloud.min_size, self.cloud.max_size
            )));
        }
        Ok(())
    }
}
