//! Shared batch for concurrent editors
//!
//! Each edit runs under the write lock as a single read-modify-write that
//! includes the aggregate rebuild, so readers never see results and
//! aggregates from different states. Concurrent edits to different rows
//! serialize; the last writer of a row wins.

use crate::{
    batch::BatchResult,
    error::{EngineError, Result},
};
use std::sync::{Arc, RwLock};

/// Cloneable handle to one batch
#[derive(Debug, Clone)]
pub struct SharedBatch {
    inner: Arc<RwLock<BatchResult>>,
}

impl SharedBatch {
    /// Wrap a batch
    pub fn new(batch: BatchResult) -> Self {
        Self {
            inner: Arc::new(RwLock::new(batch)),
        }
    }

    /// Consistent copy of the current state
    pub fn snapshot(&self) -> Result<BatchResult> {
        self.read(BatchResult::clone)
    }

    /// Run `f` against the current state under the read lock
    pub fn read<R>(&self, f: impl FnOnce(&BatchResult) -> R) -> Result<R> {
        let guard = self.inner.read().map_err(|_| EngineError::LockPoisoned)?;
        Ok(f(&guard))
    }

    /// Replace the split of one row
    pub fn apply_manual_split<S: AsRef<str>>(&self, index: usize, pieces: &[S]) -> Result<()> {
        self.update(|batch| batch.apply_manual_split(index, pieces))
    }

    /// Replace the split of one row from whitespace-separated text
    pub fn apply_manual_split_text(&self, index: usize, split: &str) -> Result<()> {
        self.update(|batch| batch.apply_manual_split_text(index, split))
    }

    /// Mark one row reviewed
    pub fn mark_reviewed(&self, index: usize) -> Result<()> {
        self.update(|batch| batch.mark_reviewed(index))
    }

    fn update(&self, edit: impl FnOnce(&BatchResult) -> Result<BatchResult>) -> Result<()> {
        let mut guard = self.inner.write().map_err(|_| EngineError::LockPoisoned)?;
        // A failed edit leaves the stored batch as it was
        *guard = edit(&guard)?;
        Ok(())
    }
}

impl From<BatchResult> for SharedBatch {
    fn from(batch: BatchResult) -> Self {
        Self::new(batch)
    }
}
