//! Batch orchestration for domain segmentation
//!
//! Converts lists of domains with a sequential or rayon-backed executor,
//! derives word, SLD-length, TLD and word-cloud statistics, and supports
//! editing a batch with a full aggregate rebuild after every change.

#![warn(missing_docs)]

pub mod aggregate;
pub mod batch;
pub mod cloud;
pub mod config;
pub mod error;
pub mod executor;
pub mod result;
pub mod shared;

pub use aggregate::{BatchSummary, SldStat, TldStat, WordStat};
pub use batch::{BatchAggregator, BatchResult};
pub use cloud::{cloud_size, CloudBounds, WordCloudEntry};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use executor::{auto_select, ExecutionMode, Executor};
pub use result::ConversionResult;
pub use shared::SharedBatch;

// Re-export from core for convenience
pub use domsplit_core::{Lexicon, Token, TokenSource};
