//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::lexicon_source;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use domsplit_api::{Config, DomainProcessor, ExecutionMode, Input};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); CSV uses the first column
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Domains given directly
    #[arg(short, long = "domain", value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Embedded lexicon code
    #[arg(short, long, value_name = "CODE", conflicts_with = "lexicon_config")]
    pub lexicon: Option<String>,

    /// External lexicon TOML file
    #[arg(long, value_name = "FILE")]
    pub lexicon_config: Option<PathBuf>,

    /// Worker threads for parallel processing
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Force parallel processing even for small batches
    #[arg(short, long)]
    pub parallel: bool,

    /// Only list results with at least this confidence
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_confidence: Option<u8>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated line per domain
    Text,
    /// JSON document with results and statistics
    Json,
    /// Markdown tables
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from the config file
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(CliError::ConfigError(format!("unknown format '{other}'")).into()),
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting domain processing");
        log::debug!("Arguments: {:?}", self);

        if self.input.is_empty() && self.domains.is_empty() {
            return Err(CliError::NoInput.into());
        }

        let cli_config = CliConfig::load_or_default(self.config.as_deref())?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&cli_config.output.default_format)?,
        };

        let processor = self.build_processor(&cli_config)?;
        let mut progress = ProgressReporter::new(self.quiet);
        let domains = self.collect_domains(&mut progress)?;
        progress.segmenting(domains.len());

        let output = processor.process(Input::Domains(domains))?;
        progress.finish();
        log::info!(
            "Processed {} domains in {} ms ({})",
            output.summary.total_domains,
            output.metadata.processing_time_ms,
            output.metadata.mode_used
        );

        let writer = self.open_writer()?;
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, cli_config.output.pretty_json))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        let threshold = self.min_confidence.unwrap_or(0);
        for result in output.results.iter().filter(|r| r.confidence >= threshold) {
            formatter.format_result(result)?;
        }
        if cli_config.output.include_stats {
            formatter.format_stats(&output)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn build_processor(&self, cli_config: &CliConfig) -> Result<DomainProcessor> {
        let source = lexicon_source::resolve(
            self.lexicon.as_deref(),
            self.lexicon_config.as_deref(),
            cli_config,
        );
        log::info!("Lexicon: {}", lexicon_source::display_name(&source));

        let mode = if self.parallel {
            ExecutionMode::Parallel
        } else {
            cli_config.execution_mode()?
        };

        let mut builder = Config::builder()
            .threads(self.threads.or(cli_config.threads()))
            .execution_mode(mode)
            .parallel_threshold(cli_config.performance.parallel_threshold);
        builder = match source {
            domsplit_api::LexiconSource::Embedded(code) => builder.lexicon(code)?,
            domsplit_api::LexiconSource::File(path) => builder.lexicon_file(path),
        };

        let config = builder.build().context("Invalid processing options")?;
        DomainProcessor::with_config(config).context("Failed to load lexicon")
    }

    /// Files first, in sorted path order, then `--domain` values
    fn collect_domains(&self, progress: &mut ProgressReporter) -> Result<Vec<String>> {
        let mut domains = Vec::new();

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            progress.init_files(files.len() as u64);
            for path in &files {
                let found = FileReader::read_domains(path)?;
                progress.file_completed(&path.display().to_string(), found.len());
                domains.extend(found);
            }
        }

        domains.extend(self.domains.iter().cloned());
        Ok(domains)
    }

    fn open_writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second init in the same process is not an error for the command
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
