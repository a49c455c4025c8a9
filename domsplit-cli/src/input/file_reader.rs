//! Domain list files

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads domain lists from disk
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read a file and extract one domain per line.
    ///
    /// CSV files contribute their first column; a leading `domain` header is
    /// dropped.
    pub fn read_domains(path: &Path) -> Result<Vec<String>> {
        let text = Self::read_text(path)?;
        let domains = domsplit_api::parse_domain_lines(&text);
        log::debug!("{}: {} domains", path.display(), domains.len());
        Ok(domains)
    }
}
