//! Batch statistics
//!
//! Every function here is a pure function of the full result list. Nothing
//! is patched incrementally; callers rebuild after any change.

use crate::result::ConversionResult;
use domsplit_core::{is_default_stop_word, Lexicon, TokenSource};
use std::collections::HashMap;

/// Occurrences of a lower-cased token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStat {
    /// Lower-cased token text
    pub word: String,
    /// Occurrences across the batch
    pub count: usize,
}

/// Domains with a given SLD length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SldStat {
    /// SLD length in characters
    pub length: usize,
    /// Domains in the bucket
    pub count: usize,
}

/// Domains with a given TLD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldStat {
    /// Lower-cased TLD, empty for malformed input
    pub tld: String,
    /// Domains in the bucket
    pub count: usize,
}

/// Headline numbers for a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Results in the batch
    pub total_domains: usize,
    /// Distinct words after stop-word filtering
    pub unique_words: usize,
    /// Distinct non-empty TLDs
    pub unique_tlds: usize,
    /// Unreviewed results below full confidence
    pub pending_review: usize,
}

/// Raw and filtered word frequencies.
///
/// Separators are never counted. The filtered list also drops stop words
/// and single-character tokens. Both are sorted by count descending, then
/// word ascending.
pub fn word_stats(results: &[ConversionResult], lexicon: &dyn Lexicon) -> (Vec<WordStat>, Vec<WordStat>) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in results
        .iter()
        .flat_map(|r| r.tokens.iter())
        .filter(|t| t.source != TokenSource::Separator)
    {
        *counts.entry(token.normalized()).or_insert(0) += 1;
    }

    let mut raw: Vec<WordStat> = counts
        .into_iter()
        .map(|(word, count)| WordStat { word, count })
        .collect();
    raw.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

    let filtered = raw
        .iter()
        .filter(|s| {
            s.word.chars().count() > 1
                && !is_default_stop_word(&s.word)
                && !lexicon.is_stop_word(&s.word)
        })
        .cloned()
        .collect();

    (raw, filtered)
}

/// Domains per SLD length, count descending then length descending
pub fn sld_stats(results: &[ConversionResult]) -> Vec<SldStat> {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for result in results {
        *counts.entry(result.sld_length).or_insert(0) += 1;
    }

    let mut stats: Vec<SldStat> = counts
        .into_iter()
        .map(|(length, count)| SldStat { length, count })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| b.length.cmp(&a.length)));
    stats
}

/// Domains per TLD, count descending then TLD ascending
pub fn tld_stats(results: &[ConversionResult]) -> Vec<TldStat> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for result in results {
        *counts.entry(result.tld.to_ascii_lowercase()).or_insert(0) += 1;
    }

    let mut stats: Vec<TldStat> = counts
        .into_iter()
        .map(|(tld, count)| TldStat { tld, count })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tld.cmp(&b.tld)));
    stats
}

/// Summary counts
pub fn summary(
    results: &[ConversionResult],
    filtered_words: &[WordStat],
    tlds: &[TldStat],
) -> BatchSummary {
    BatchSummary {
        total_domains: results.len(),
        unique_words: filtered_words.len(),
        unique_tlds: tlds.iter().filter(|t| !t.tld.is_empty()).count(),
        pending_review: results.iter().filter(|r| r.is_pending()).count(),
    }
}
