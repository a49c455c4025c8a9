//! CLI configuration file

use crate::error::CliError;
use anyhow::{Context, Result};
use domsplit_api::ExecutionMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Embedded lexicon code
    pub lexicon: String,

    /// External lexicon file, overrides `lexicon`
    pub lexicon_config: Option<PathBuf>,

    /// `adaptive`, `sequential` or `parallel`
    pub execution: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            lexicon: "en".to_string(),
            lexicon_config: None,
            execution: "adaptive".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Print word, length and TLD statistics after the results
    pub include_stats: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            include_stats: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Batch size at which adaptive mode goes parallel
    pub parallel_threshold: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            parallel_threshold: 512,
        }
    }
}

impl CliConfig {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config.execution_mode()?;
        Ok(config)
    }

    /// Load from `path` or fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parsed `[processing] execution`
    pub fn execution_mode(&self) -> Result<ExecutionMode> {
        match self.processing.execution.to_ascii_lowercase().as_str() {
            "adaptive" => Ok(ExecutionMode::Adaptive),
            "sequential" => Ok(ExecutionMode::Sequential),
            "parallel" => Ok(ExecutionMode::Parallel),
            other => Err(CliError::ConfigError(format!("unknown execution mode '{other}'")).into()),
        }
    }

    /// `[performance] worker_threads`, with 0 meaning automatic
    pub fn threads(&self) -> Option<usize> {
        match self.performance.worker_threads {
            0 => None,
            n => Some(n),
        }
    }
}
