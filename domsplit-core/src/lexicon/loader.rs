//! Lexicon loader
//!
//! Manages embedded and file-based lexicons with caching.

use super::{config::LexiconConfig, runtime::ConfigurableLexicon, Lexicon};
use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

type Embedded = HashMap<&'static str, std::result::Result<Arc<dyn Lexicon>, CoreError>>;

/// Embedded lexicons: (code, aliases, TOML source)
const EMBEDDED_SOURCES: &[(&str, &[&str], &str)] = &[(
    "en",
    &["english"],
    include_str!("../../configs/lexicons/english.toml"),
)];

static EMBEDDED: OnceLock<Embedded> = OnceLock::new();

/// Load an embedded lexicon by code or alias
pub fn get_lexicon(code: &str) -> Result<Arc<dyn Lexicon>> {
    // Parse embedded lexicons on first access
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map: Embedded = HashMap::new();
        for (primary, aliases, source) in EMBEDDED_SOURCES {
            let loaded =
                load_lexicon_str(primary, source).map(|lex| Arc::new(lex) as Arc<dyn Lexicon>);
            for key in std::iter::once(primary).chain(aliases.iter()) {
                map.insert(*key, loaded.clone());
            }
        }
        map
    });

    let key = code.trim().to_ascii_lowercase();
    match embedded.get(key.as_str()) {
        Some(loaded) => loaded.clone(),
        None => Err(CoreError::UnknownLexicon(code.to_string())),
    }
}

/// Codes and names of the embedded lexicons
pub fn available_lexicons() -> Vec<(&'static str, &'static [&'static str])> {
    EMBEDDED_SOURCES
        .iter()
        .map(|(code, aliases, _)| (*code, *aliases))
        .collect()
}

/// Build a lexicon from a TOML string
pub fn load_lexicon_str(source_name: &str, toml_str: &str) -> Result<ConfigurableLexicon> {
    let config = LexiconConfig::from_toml(toml_str).map_err(|reason| CoreError::LexiconParse {
        source_name: source_name.to_string(),
        reason,
    })?;

    ConfigurableLexicon::from_config(&config).map_err(CoreError::InvalidLexicon)
}

/// Build a lexicon from a TOML file
pub fn load_lexicon_file(path: impl AsRef<Path>) -> Result<ConfigurableLexicon> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::LexiconIo {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    load_lexicon_str(&path.display().to_string(), &content)
}
