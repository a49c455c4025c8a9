//! Batch processing and editing
//!
//! [`BatchAggregator`] converts a list of domains and derives every
//! statistic from the results. [`BatchResult`] is a value: edits return a
//! new batch whose aggregates were rebuilt from the full result list.

use crate::{
    aggregate::{self, BatchSummary, SldStat, TldStat, WordStat},
    cloud::{self, WordCloudEntry},
    config::EngineConfig,
    error::{EngineError, Result},
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
    result::ConversionResult,
};
use domsplit_core::Lexicon;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Runs conversion and aggregation for whole batches
#[derive(Clone)]
pub struct BatchAggregator {
    lexicon: Arc<dyn Lexicon>,
    config: EngineConfig,
}

impl fmt::Debug for BatchAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchAggregator")
            .field("lexicon", &self.lexicon.code())
            .field("config", &self.config)
            .finish()
    }
}

impl BatchAggregator {
    /// Create an aggregator, validating the configuration
    pub fn new(lexicon: Arc<dyn Lexicon>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { lexicon, config })
    }

    /// Lexicon in use
    pub fn lexicon(&self) -> &Arc<dyn Lexicon> {
        &self.lexicon
    }

    /// Configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Mode the configured execution mode runs as for a batch size
    pub fn select_mode(&self, domain_count: usize) -> ExecutionMode {
        self.resolve_mode(self.config.execution_mode, domain_count)
    }

    /// Resolve `Adaptive` against the parallel threshold; other modes pass
    /// through
    pub fn resolve_mode(&self, mode: ExecutionMode, domain_count: usize) -> ExecutionMode {
        match mode {
            ExecutionMode::Adaptive => auto_select(domain_count, self.config.parallel_threshold),
            mode => mode,
        }
    }

    /// Convert every domain and compute the aggregates.
    ///
    /// One result per input, in input order. Malformed domains produce
    /// results rather than errors, and an empty list gives empty
    /// aggregates.
    pub fn process<S: AsRef<str>>(&self, domains: &[S]) -> Result<BatchResult> {
        let mode = self.select_mode(domains.len());
        self.process_with_mode(domains, mode)
    }

    /// Convert with an explicit execution mode
    pub fn process_with_mode<S: AsRef<str>>(
        &self,
        domains: &[S],
        mode: ExecutionMode,
    ) -> Result<BatchResult> {
        let start = Instant::now();
        let domains: Vec<String> = domains.iter().map(|d| d.as_ref().to_string()).collect();

        let mode = self.resolve_mode(mode, domains.len());
        let executor = self.executor(mode);
        let results = executor.convert(&domains, self.lexicon.as_ref())?;

        log::debug!(
            "converted {} domains ({:?}) in {:.2?}",
            results.len(),
            executor.mode(),
            start.elapsed()
        );

        Ok(BatchResult::build(
            results,
            Arc::clone(&self.lexicon),
            self.config.clone(),
        ))
    }

    fn executor(&self, mode: ExecutionMode) -> Box<dyn Executor> {
        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => Box::new(ParallelExecutor::new(self.config.threads)),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => {
                log::warn!("parallel feature disabled, running sequentially");
                Box::new(SequentialExecutor)
            }
            ExecutionMode::Sequential | ExecutionMode::Adaptive => Box::new(SequentialExecutor),
        }
    }
}

/// Results of one batch plus everything derived from them
#[derive(Clone)]
pub struct BatchResult {
    results: Vec<ConversionResult>,
    word_stats: Vec<WordStat>,
    word_stats_raw: Vec<WordStat>,
    sld_stats: Vec<SldStat>,
    tld_stats: Vec<TldStat>,
    word_cloud: Vec<WordCloudEntry>,
    summary: BatchSummary,
    lexicon: Arc<dyn Lexicon>,
    config: EngineConfig,
}

impl fmt::Debug for BatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchResult")
            .field("results", &self.results.len())
            .field("summary", &self.summary)
            .field("lexicon", &self.lexicon.code())
            .finish()
    }
}

impl PartialEq for BatchResult {
    fn eq(&self, other: &Self) -> bool {
        self.results == other.results
            && self.word_stats == other.word_stats
            && self.word_stats_raw == other.word_stats_raw
            && self.sld_stats == other.sld_stats
            && self.tld_stats == other.tld_stats
            && self.word_cloud == other.word_cloud
            && self.summary == other.summary
    }
}

impl BatchResult {
    fn build(results: Vec<ConversionResult>, lexicon: Arc<dyn Lexicon>, config: EngineConfig) -> Self {
        let mut batch = Self {
            results,
            word_stats: Vec::new(),
            word_stats_raw: Vec::new(),
            sld_stats: Vec::new(),
            tld_stats: Vec::new(),
            word_cloud: Vec::new(),
            summary: BatchSummary::default(),
            lexicon,
            config,
        };
        batch.rebuild();
        batch
    }

    /// Recompute every aggregate from the full result list
    fn rebuild(&mut self) {
        let (raw, filtered) = aggregate::word_stats(&self.results, self.lexicon.as_ref());
        self.sld_stats = aggregate::sld_stats(&self.results);
        self.tld_stats = aggregate::tld_stats(&self.results);
        self.word_cloud = cloud::word_cloud(&filtered, self.config.cloud, self.config.cloud_max_words);
        self.summary = aggregate::summary(&self.results, &filtered, &self.tld_stats);
        self.word_stats = filtered;
        self.word_stats_raw = raw;
    }

    /// Per-domain results in input order
    pub fn results(&self) -> &[ConversionResult] {
        &self.results
    }

    /// Word frequencies without stop words and single characters
    pub fn word_stats(&self) -> &[WordStat] {
        &self.word_stats
    }

    /// Unfiltered word frequencies
    pub fn word_stats_raw(&self) -> &[WordStat] {
        &self.word_stats_raw
    }

    /// SLD length distribution
    pub fn sld_stats(&self) -> &[SldStat] {
        &self.sld_stats
    }

    /// TLD distribution
    pub fn tld_stats(&self) -> &[TldStat] {
        &self.tld_stats
    }

    /// Word cloud entries
    pub fn word_cloud(&self) -> &[WordCloudEntry] {
        &self.word_cloud
    }

    /// Headline counts
    pub fn summary(&self) -> BatchSummary {
        self.summary
    }

    /// Number of results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the batch has no results
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Take the result list
    pub fn into_results(self) -> Vec<ConversionResult> {
        self.results
    }

    /// Replace the split of one row and rebuild the aggregates.
    ///
    /// Fails without changing anything when `index` is out of range or the
    /// pieces do not hold the row's SLD characters.
    pub fn apply_manual_split<S: AsRef<str>>(&self, index: usize, pieces: &[S]) -> Result<Self> {
        self.edit(index, |row, lexicon| row.apply_split(pieces, lexicon))
    }

    /// [`apply_manual_split`](Self::apply_manual_split) with a
    /// whitespace-separated split such as `"best pizza"`
    pub fn apply_manual_split_text(&self, index: usize, split: &str) -> Result<Self> {
        let pieces: Vec<&str> = split.split_whitespace().collect();
        self.apply_manual_split(index, &pieces)
    }

    /// Mark one row reviewed and rebuild the aggregates
    pub fn mark_reviewed(&self, index: usize) -> Result<Self> {
        self.edit(index, |row, _| {
            row.mark_reviewed();
            Ok(())
        })
    }

    fn edit<F>(&self, index: usize, apply: F) -> Result<Self>
    where
        F: FnOnce(&mut ConversionResult, &dyn Lexicon) -> Result<()>,
    {
        let len = self.results.len();
        let mut updated = self.clone();
        let row = updated
            .results
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfRange { index, len })?;

        apply(row, self.lexicon.as_ref())?;
        updated.rebuild();

        log::debug!("rebuilt aggregates after editing row {index}");
        Ok(updated)
    }
}
