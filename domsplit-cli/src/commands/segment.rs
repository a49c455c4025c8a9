//! Segment command implementation

use crate::config::CliConfig;
use crate::lexicon_source;
use anyhow::{Context, Result};
use clap::Args;
use domsplit_api::{Config, DomainProcessor, LexiconSource, TokenSource};
use domsplit_core::{normalizer, DomainName};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// SLD such as `bestpizza`, or a full domain such as `bestpizza.com`
    #[arg(value_name = "SLD")]
    pub input: String,

    /// Embedded lexicon code
    #[arg(short, long, value_name = "CODE", conflicts_with = "lexicon_config")]
    pub lexicon: Option<String>,

    /// External lexicon TOML file
    #[arg(long, value_name = "FILE")]
    pub lexicon_config: Option<PathBuf>,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(&mut out)
    }

    /// Print tokens, their sources, the confidence and the display label
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<()> {
        let processor = self.processor()?;

        let (sld, tld) = if self.input.contains('.') {
            let domain = DomainName::parse(&self.input, processor.lexicon().compound_suffixes());
            if domain.is_malformed() {
                anyhow::bail!("Not a domain: {}", self.input);
            }
            (domain.sld().to_string(), Some(domain.tld().to_string()))
        } else {
            (self.input.trim().to_string(), None)
        };

        let scored = processor.segment(&sld);
        let tokens = scored.segmentation.tokens();

        writeln!(out, "{sld}")?;
        for token in tokens {
            writeln!(out, "  {:<16}{}", token.text, source_name(token.source))?;
        }
        writeln!(out, "split:      {}", scored.segmentation.split_text())?;
        writeln!(out, "confidence: {}", scored.confidence)?;
        let label = match &tld {
            Some(tld) => normalizer::to_display_domain(tokens, tld),
            None => normalizer::to_display_label(tokens),
        };
        writeln!(out, "label:      {label}")?;

        Ok(())
    }

    fn processor(&self) -> Result<DomainProcessor> {
        let source = lexicon_source::resolve(
            self.lexicon.as_deref(),
            self.lexicon_config.as_deref(),
            &CliConfig::default(),
        );
        let builder = match source {
            LexiconSource::Embedded(code) => Config::builder().lexicon(code)?,
            LexiconSource::File(path) => Config::builder().lexicon_file(path),
        };
        DomainProcessor::with_config(builder.sequential().build()?)
            .context("Failed to load lexicon")
    }
}

fn source_name(source: TokenSource) -> &'static str {
    match source {
        TokenSource::Word => "word",
        TokenSource::Acronym => "acronym",
        TokenSource::Numeric => "numeric",
        TokenSource::Unmatched => "unmatched",
        TokenSource::Separator => "separator",
    }
}
