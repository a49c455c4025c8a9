//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use domsplit_api::{ConversionResultDTO, Output};
use std::io::Write;

/// JSON formatter: buffers results and writes one [`Output`] document
pub struct JsonFormatter<W: Write> {
    writer: W,
    output: Output,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            output: Output::default(),
            pretty,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, result: &ConversionResultDTO) -> Result<()> {
        self.output.results.push(result.clone());
        Ok(())
    }

    fn format_stats(&mut self, output: &Output) -> Result<()> {
        let results = std::mem::take(&mut self.output.results);
        self.output = Output {
            results,
            ..output.clone()
        };
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.output)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.output)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
