//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
    result::ConversionResult,
};
use domsplit_core::Lexicon;
use rayon::prelude::*;

/// Rayon-backed executor; domains are independent so each is converted on
/// whichever worker picks it up
#[derive(Debug, Clone, Default)]
pub struct ParallelExecutor {
    threads: Option<usize>,
}

impl ParallelExecutor {
    /// Create a new parallel executor, `None` uses the global pool
    pub fn new(threads: Option<usize>) -> Self {
        Self { threads }
    }

    fn convert_all(domains: &[String], lexicon: &dyn Lexicon) -> Vec<ConversionResult> {
        // Indexed collect keeps input order
        domains
            .par_iter()
            .map(|domain| ConversionResult::from_domain(domain, lexicon))
            .collect()
    }
}

impl Executor for ParallelExecutor {
    fn convert(&self, domains: &[String], lexicon: &dyn Lexicon) -> Result<Vec<ConversionResult>> {
        let Some(threads) = self.threads else {
            return Ok(Self::convert_all(domains, lexicon));
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| EngineError::ParallelError(e.to_string()))?;

        Ok(pool.install(|| Self::convert_all(domains, lexicon)))
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SequentialExecutor;
    use domsplit_core::get_lexicon;

    #[test]
    fn test_matches_sequential() {
        let lexicon = get_lexicon("en").unwrap();
        let domains: Vec<String> = (0..200)
            .map(|i| format!("bestpizza{i}.com"))
            .chain(["mygptapp.io".to_string(), "nodot".to_string()])
            .collect();

        let sequential = SequentialExecutor.convert(&domains, lexicon.as_ref()).unwrap();
        for threads in [None, Some(1), Some(4)] {
            let parallel = ParallelExecutor::new(threads)
                .convert(&domains, lexicon.as_ref())
                .unwrap();
            assert_eq!(parallel, sequential);
        }
    }
}
