//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
    result::ConversionResult,
};
use domsplit_core::Lexicon;

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn convert(&self, domains: &[String], lexicon: &dyn Lexicon) -> Result<Vec<ConversionResult>> {
        Ok(domains
            .iter()
            .map(|domain| ConversionResult::from_domain(domain, lexicon))
            .collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_result_per_domain() {
        let lexicon = domsplit_core::get_lexicon("en").unwrap();
        let domains = vec!["bestpizza.com".to_string(), "nodot".to_string()];
        let results = SequentialExecutor.convert(&domains, lexicon.as_ref()).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].converted, "bestPizza.com");
        assert!(results[1].is_malformed());
    }
}
