//! Execution strategies for converting a batch of domains

use crate::{error::Result, result::ConversionResult};
use domsplit_core::Lexicon;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Multi-threaded parallel processing
    Parallel,
    /// Pick by batch size
    Adaptive,
}

/// Converts domains into results, one per input, in input order
pub trait Executor: Send + Sync {
    /// Convert every domain
    fn convert(&self, domains: &[String], lexicon: &dyn Lexicon) -> Result<Vec<ConversionResult>>;

    /// Mode this executor implements
    fn mode(&self) -> ExecutionMode;
}

/// Select sequential or parallel execution for a batch size
pub fn auto_select(domain_count: usize, threshold: usize) -> ExecutionMode {
    if domain_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
