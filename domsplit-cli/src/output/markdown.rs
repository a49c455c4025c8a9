//! Markdown output formatter

use super::{OutputFormatter, TOP_WORDS};
use anyhow::Result;
use domsplit_api::{ConversionResultDTO, Output};
use std::io::Write;

/// Markdown formatter: a results table followed by statistics tables
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            writeln!(self.writer, "# Domain Segmentation Results")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Domain | Converted | Split | Confidence |")?;
            writeln!(self.writer, "|--------|-----------|-------|-----------:|")?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, result: &ConversionResultDTO) -> Result<()> {
        self.write_header()?;
        writeln!(
            self.writer,
            "| {} | `{}` | {} | {} |",
            escape(&result.original),
            result.converted,
            escape(&result.split),
            result.confidence
        )?;
        Ok(())
    }

    fn format_stats(&mut self, output: &Output) -> Result<()> {
        self.write_header()?;
        let summary = &output.summary;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Domains: {}", summary.total_domains)?;
        writeln!(self.writer, "- Unique words: {}", summary.unique_words)?;
        writeln!(self.writer, "- TLDs: {}", summary.unique_tlds)?;
        writeln!(self.writer, "- Pending review: {}", summary.pending_review)?;

        if !output.word_stats.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "## Top Words")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Word | Count |")?;
            writeln!(self.writer, "|------|------:|")?;
            for stat in output.word_stats.iter().take(TOP_WORDS) {
                writeln!(self.writer, "| {} | {} |", escape(&stat.word), stat.count)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}
