//! High-level configuration API

use crate::{
    dto::ExecutionMode,
    error::{ApiError, Result},
};
use domsplit_core::{CoreError, Lexicon};
use domsplit_engine::{CloudBounds, EngineConfig};
use std::path::PathBuf;
use std::sync::Arc;

/// Where the lexicon comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// Embedded lexicon by code or alias
    Embedded(String),
    /// Lexicon TOML file
    File(PathBuf),
}

impl LexiconSource {
    /// Load the lexicon
    pub fn load(&self) -> Result<Arc<dyn Lexicon>> {
        match self {
            LexiconSource::Embedded(code) => domsplit_core::get_lexicon(code).map_err(|e| match e {
                CoreError::UnknownLexicon(code) => ApiError::UnknownLexicon(code),
                other => ApiError::Lexicon(other),
            }),
            LexiconSource::File(path) => {
                let lexicon = domsplit_core::load_lexicon_file(path)?;
                Ok(Arc::new(lexicon))
            }
        }
    }
}

/// High-level configuration for domain processing
#[derive(Debug, Clone)]
pub struct Config {
    inner: EngineConfig,
    lexicon: LexiconSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inner: EngineConfig::default(),
            lexicon: LexiconSource::Embedded("en".to_string()),
        }
    }
}

impl Config {
    /// Create a fast configuration
    pub fn fast() -> Self {
        Self {
            inner: EngineConfig::fast(),
            ..Self::default()
        }
    }

    /// Create a single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            inner: EngineConfig::sequential(),
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Lexicon source
    pub fn lexicon(&self) -> &LexiconSource {
        &self.lexicon
    }

    /// Engine settings
    pub fn engine(&self) -> &EngineConfig {
        &self.inner
    }

    /// Configured thread count
    pub fn threads(&self) -> Option<usize> {
        self.inner.threads
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Use an embedded lexicon
    pub fn lexicon(mut self, code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(ApiError::Config("lexicon code must not be empty".to_string()));
        }
        self.config.lexicon = LexiconSource::Embedded(code);
        Ok(self)
    }

    /// Load the lexicon from a TOML file
    pub fn lexicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.lexicon = LexiconSource::File(path.into());
        self
    }

    /// Set thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.inner.threads = threads;
        self
    }

    /// Set execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.inner.execution_mode = mode.into();
        self
    }

    /// Batch size at which adaptive mode goes parallel
    pub fn parallel_threshold(mut self, domains: usize) -> Self {
        self.config.inner.parallel_threshold = domains;
        self
    }

    /// Word cloud display size range
    pub fn cloud_bounds(mut self, min_size: u32, max_size: u32) -> Self {
        self.config.inner.cloud = CloudBounds { min_size, max_size };
        self
    }

    /// Words included in the word cloud
    pub fn cloud_max_words(mut self, words: usize) -> Self {
        self.config.inner.cloud_max_words = words;
        self
    }

    /// Use fast configuration
    pub fn fast(mut self) -> Self {
        self.config.inner = EngineConfig::fast();
        self
    }

    /// Use single-threaded configuration
    pub fn sequential(mut self) -> Self {
        self.config.inner = EngineConfig::sequential();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config
            .inner
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(self.config)
    }
}
