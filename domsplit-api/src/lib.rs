//! Public API for domain-name segmentation
//!
//! This crate provides a stable interface over the engine: load a lexicon,
//! process a batch of domains, and get back results plus statistics in the
//! shape presentation layers consume.
//!
//! ```rust
//! use domsplit_api::{DomainProcessor, Input};
//!
//! let processor = DomainProcessor::new().unwrap();
//! let output = processor
//!     .process(Input::from_domains(["bestpizza.com", "mygptapp.io"]))
//!     .unwrap();
//!
//! assert_eq!(output.results[0].converted, "bestPizza.com");
//! assert_eq!(output.results[1].converted, "myGPTApp.io");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use domsplit_core::{Lexicon, ScoredSegmentation};
use domsplit_engine::{BatchAggregator, BatchResult};
use std::sync::Arc;
use std::time::Instant;

// Re-export key types
pub use config::{Config, ConfigBuilder, LexiconSource};
pub use dto::{
    parse_domain_lines, ConversionResultDTO, ExecutionMode, Input, Metadata, Output, Summary,
};
pub use error::{ApiError, Result};

// Engine types needed for editing a batch
pub use domsplit_engine::{SharedBatch, Token, TokenSource};

/// Main entry point for domain segmentation
pub struct DomainProcessor {
    aggregator: BatchAggregator,
    config: Config,
}

impl std::fmt::Debug for DomainProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainProcessor")
            .field("aggregator", &self.aggregator)
            .finish()
    }
}

impl DomainProcessor {
    /// Create a new processor with default configuration (English, adaptive mode)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a new processor with a specific embedded lexicon
    pub fn with_lexicon(code: &str) -> Result<Self> {
        let config = Config::builder().lexicon(code)?.build()?;
        Self::with_config(config)
    }

    /// Create a new processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let lexicon = config.lexicon().load()?;
        Self::with_lexicon_impl(lexicon, config)
    }

    /// Create a processor around any [`Lexicon`] implementation
    pub fn with_lexicon_impl(lexicon: Arc<dyn Lexicon>, config: Config) -> Result<Self> {
        log::debug!("using lexicon '{}' ({})", lexicon.code(), lexicon.name());
        let aggregator = BatchAggregator::new(lexicon, config.engine().clone())?;
        Ok(Self { aggregator, config })
    }

    /// Process input and return the wire view
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let domains = input.read_domains()?;
        let mode = self.aggregator.select_mode(domains.len());
        let batch = self.aggregator.process_with_mode(&domains, mode)?;

        let metadata = Metadata {
            lexicon: self.lexicon().code().to_string(),
            mode_used: format!("{mode:?}"),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };
        Ok(Output::from_batch(&batch, metadata))
    }

    /// Process input and keep the editable batch
    pub fn process_batch(&self, input: Input) -> Result<BatchResult> {
        let domains = input.read_domains()?;
        Ok(self.aggregator.process(&domains)?)
    }

    /// Process with explicit execution mode
    pub fn process_with_mode(&self, input: Input, mode: ExecutionMode) -> Result<Output> {
        let start = Instant::now();
        let domains = input.read_domains()?;
        let mode = self.aggregator.resolve_mode(mode.into(), domains.len());
        let batch = self.aggregator.process_with_mode(&domains, mode)?;

        let metadata = Metadata {
            lexicon: self.lexicon().code().to_string(),
            mode_used: format!("{mode:?}"),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };
        Ok(Output::from_batch(&batch, metadata))
    }

    /// Segment and score a bare SLD
    pub fn segment(&self, sld: &str) -> ScoredSegmentation {
        domsplit_core::segment_scored(sld, self.lexicon().as_ref())
    }

    /// Convert a single domain
    pub fn convert(&self, domain: &str) -> ConversionResultDTO {
        let result = domsplit_engine::ConversionResult::from_domain(domain, self.lexicon().as_ref());
        ConversionResultDTO::from(&result)
    }

    /// Wire view of a batch, e.g. after edits
    pub fn output_for(&self, batch: &BatchResult) -> Output {
        let metadata = Metadata {
            lexicon: self.lexicon().code().to_string(),
            ..Metadata::default()
        };
        Output::from_batch(batch, metadata)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lexicon in use
    pub fn lexicon(&self) -> &Arc<dyn Lexicon> {
        self.aggregator.lexicon()
    }
}

// Convenience functions

/// Process a domain list with default configuration
pub fn process_domains<I, S>(domains: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    DomainProcessor::new()?.process(Input::from_domains(domains))
}

/// Process a file with default configuration
pub fn process_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    DomainProcessor::new()?.process(Input::from_file(path.as_ref().to_path_buf()))
}
