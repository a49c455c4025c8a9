//! Plain text output formatter

use super::{OutputFormatter, TOP_WORDS};
use anyhow::Result;
use domsplit_api::{ConversionResultDTO, Output};
use std::io::Write;

/// Text formatter: one tab-separated line per domain
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, result: &ConversionResultDTO) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}",
            result.original, result.converted, result.split, result.confidence
        )?;
        Ok(())
    }

    fn format_stats(&mut self, output: &Output) -> Result<()> {
        let summary = &output.summary;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} domains, {} unique words, {} TLDs, {} pending review",
            summary.total_domains, summary.unique_words, summary.unique_tlds, summary.pending_review
        )?;

        if !output.word_stats.is_empty() {
            writeln!(self.writer, "Top words:")?;
            for stat in output.word_stats.iter().take(TOP_WORDS) {
                writeln!(self.writer, "  {:<16}{}", stat.word, stat.count)?;
            }
        }
        if !output.tld_stats.is_empty() {
            writeln!(self.writer, "TLDs:")?;
            for stat in &output.tld_stats {
                let tld = if stat.tld.is_empty() { "(none)" } else { &stat.tld };
                writeln!(self.writer, "  {:<16}{}", tld, stat.count)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
