//! Output formatting module

use anyhow::Result;
use domsplit_api::{ConversionResultDTO, Output};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format a single converted domain
    fn format_result(&mut self, result: &ConversionResultDTO) -> Result<()>;

    /// Format the batch statistics
    fn format_stats(&mut self, output: &Output) -> Result<()>;

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Words shown in text and markdown statistics
pub(crate) const TOP_WORDS: usize = 10;
