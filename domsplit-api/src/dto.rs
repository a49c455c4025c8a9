//! Data Transfer Objects for API
//!
//! The serialized shape of [`Output`] is the wire contract with
//! presentation layers: per-result `original`, `converted`, `split`,
//! `word_count`, `confidence`, `sld_length` and batch-level `word_stats`,
//! `sld_stats`, `tld_stats`, `word_cloud`. Other fields are additions.

use crate::error::{ApiError, Result};
use domsplit_engine::BatchResult;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for processing
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Domains already split into a list
    Domains(Vec<String>),
    /// Text with one domain per line
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Domains(domains) => f.debug_tuple("Domains").field(&domains.len()).finish(),
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from a domain list
    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Input::Domains(domains.into_iter().map(Into::into).collect())
    }

    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the domain list from the input.
    ///
    /// A `Domains` list is taken as is; every other source is parsed with
    /// [`parse_domain_lines`].
    pub fn read_domains(self) -> Result<Vec<String>> {
        let text = match self {
            Input::Domains(domains) => return Ok(domains),
            Input::Text(text) => text,
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io)?,
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8)?,
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                buffer
            }
        };
        Ok(parse_domain_lines(&text))
    }
}

/// Extract domains from line-oriented text.
///
/// One domain per line. For CSV rows only the first column is used and
/// surrounding quotes are removed. Blank lines are skipped, as is a header
/// row whose first column is `domain`.
pub fn parse_domain_lines(text: &str) -> Vec<String> {
    let text = text.trim_start_matches('\u{feff}');
    let mut domains = Vec::new();
    let mut seen_first = false;

    for line in text.lines() {
        let first = line.split(',').next().unwrap_or_default();
        let first = first.trim().trim_matches('"').trim();
        if first.is_empty() {
            continue;
        }
        if !seen_first {
            seen_first = true;
            if first.eq_ignore_ascii_case("domain") {
                continue;
            }
        }
        domains.push(first.to_string());
    }
    domains
}

/// Execution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// Sequential processing
    Sequential,
    /// Parallel processing
    Parallel,
    /// Automatic selection by batch size
    #[default]
    Adaptive,
}

impl From<ExecutionMode> for domsplit_engine::ExecutionMode {
    fn from(mode: ExecutionMode) -> Self {
        match mode {
            ExecutionMode::Sequential => domsplit_engine::ExecutionMode::Sequential,
            ExecutionMode::Parallel => domsplit_engine::ExecutionMode::Parallel,
            ExecutionMode::Adaptive => domsplit_engine::ExecutionMode::Adaptive,
        }
    }
}

/// One converted domain
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionResultDTO {
    /// Input as given
    pub original: String,
    /// Camel-cased display domain
    pub converted: String,
    /// Space-joined tokens
    pub split: String,
    /// Tokens excluding separators
    pub word_count: usize,
    /// 0..=100
    pub confidence: u8,
    /// SLD length in characters
    pub sld_length: usize,
    /// TLD, empty for malformed input
    pub tld: String,
    /// Confirmed by a person
    pub reviewed: bool,
}

impl From<&domsplit_engine::ConversionResult> for ConversionResultDTO {
    fn from(result: &domsplit_engine::ConversionResult) -> Self {
        Self {
            original: result.original.clone(),
            converted: result.converted.clone(),
            split: result.split.clone(),
            word_count: result.word_count,
            confidence: result.confidence,
            sld_length: result.sld_length,
            tld: result.tld.clone(),
            reviewed: result.reviewed,
        }
    }
}

/// Word frequency
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordStatDTO {
    /// Lower-cased word
    pub word: String,
    /// Occurrences
    pub count: usize,
}

/// SLD length bucket
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SldStatDTO {
    /// SLD length in characters
    pub length: usize,
    /// Domains
    pub count: usize,
}

/// TLD bucket
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TldStatDTO {
    /// Lower-cased TLD
    pub tld: String,
    /// Domains
    pub count: usize,
}

/// Word cloud entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordCloudDTO {
    /// Word
    pub text: String,
    /// Display size
    pub size: u32,
}

/// Batch headline counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Results in the batch
    pub total_domains: usize,
    /// Distinct filtered words
    pub unique_words: usize,
    /// Distinct TLDs
    pub unique_tlds: usize,
    /// Results awaiting review
    pub pending_review: usize,
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Lexicon code
    pub lexicon: String,
    /// Execution mode used
    pub mode_used: String,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete output of one batch
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Per-domain results in input order
    pub results: Vec<ConversionResultDTO>,
    /// Filtered word frequencies
    pub word_stats: Vec<WordStatDTO>,
    /// Unfiltered word frequencies
    pub word_stats_raw: Vec<WordStatDTO>,
    /// SLD length distribution
    pub sld_stats: Vec<SldStatDTO>,
    /// TLD distribution
    pub tld_stats: Vec<TldStatDTO>,
    /// Word cloud
    pub word_cloud: Vec<WordCloudDTO>,
    /// Headline counts
    pub summary: Summary,
    /// Processing metadata
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: Metadata,
}

impl Output {
    /// Build the wire view of a batch
    pub fn from_batch(batch: &BatchResult, metadata: Metadata) -> Self {
        let words = |stats: &[domsplit_engine::WordStat]| {
            stats
                .iter()
                .map(|s| WordStatDTO {
                    word: s.word.clone(),
                    count: s.count,
                })
                .collect::<Vec<_>>()
        };
        let summary = batch.summary();

        Self {
            results: batch.results().iter().map(ConversionResultDTO::from).collect(),
            word_stats: words(batch.word_stats()),
            word_stats_raw: words(batch.word_stats_raw()),
            sld_stats: batch
                .sld_stats()
                .iter()
                .map(|s| SldStatDTO {
                    length: s.length,
                    count: s.count,
                })
                .collect(),
            tld_stats: batch
                .tld_stats()
                .iter()
                .map(|s| TldStatDTO {
                    tld: s.tld.clone(),
                    count: s.count,
                })
                .collect(),
            word_cloud: batch
                .word_cloud()
                .iter()
                .map(|e| WordCloudDTO {
                    text: e.text.clone(),
                    size: e.size,
                })
                .collect(),
            summary: Summary {
                total_domains: summary.total_domains,
                unique_words: summary.unique_words,
                unique_tlds: summary.unique_tlds,
                pending_review: summary.pending_review,
            },
            metadata,
        }
    }

    /// Serialize to JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
