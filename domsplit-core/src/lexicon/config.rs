//! Configuration structures and validation
//!
//! This module defines the TOML schema for lexicon configuration.

use serde::{Deserialize, Serialize};

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub acronyms: EntryList,
    #[serde(default)]
    pub stop_words: EntryList,
    #[serde(default)]
    pub suffixes: Suffixes,
    /// Word tiers, most common first. Rank follows file order.
    #[serde(default)]
    pub tiers: Vec<Tier>,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Flat list of entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryList {
    #[serde(default)]
    pub entries: Vec<String>,
}

/// Compound public suffixes such as `co.uk`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suffixes {
    #[serde(default)]
    pub compound: Vec<String>,
}

/// A named group of words sharing a frequency band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    pub words: Vec<String>,
}

impl LexiconConfig {
    /// Parse from a TOML string
    pub fn from_toml(source: &str) -> Result<Self, String> {
        toml::from_str(source).map_err(|e| e.to_string())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }

        let word_count: usize = self.tiers.iter().map(|t| t.words.len()).sum();
        if word_count == 0 && self.acronyms.entries.is_empty() {
            return Err("No words or acronyms defined".to_string());
        }

        for tier in &self.tiers {
            for word in &tier.words {
                check_entry(word).map_err(|e| format!("tier '{}': {e}", tier.name))?;
            }
        }
        for acronym in &self.acronyms.entries {
            check_entry(acronym).map_err(|e| format!("acronyms: {e}"))?;
        }
        for stop_word in &self.stop_words.entries {
            check_entry(stop_word).map_err(|e| format!("stop_words: {e}"))?;
        }
        for suffix in &self.suffixes.compound {
            if !suffix.contains('.') || suffix.starts_with('.') || suffix.ends_with('.') {
                return Err(format!(
                    "suffixes: '{suffix}' is not a compound suffix like 'co.uk'"
                ));
            }
        }

        Ok(())
    }

    /// Total number of words across tiers
    pub fn word_count(&self) -> usize {
        self.tiers.iter().map(|t| t.words.len()).sum()
    }
}

fn check_entry(entry: &str) -> Result<(), String> {
    if entry.is_empty() {
        return Err("empty entry".to_string());
    }
    // Digit runs are always literal tokens, so entries hold letters only
    if !entry.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(format!("'{entry}' must be lower-case ASCII letters"));
    }
    Ok(())
}
