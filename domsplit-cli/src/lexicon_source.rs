//! Lexicon selection for CLI commands

use crate::config::CliConfig;
use domsplit_api::LexiconSource;
use std::path::Path;

/// Pick the lexicon from command-line flags, then the config file.
///
/// An external file wins over an embedded code at the same level.
pub fn resolve(
    lexicon: Option<&str>,
    lexicon_config: Option<&Path>,
    config: &CliConfig,
) -> LexiconSource {
    if let Some(path) = lexicon_config {
        return LexiconSource::File(path.to_path_buf());
    }
    if let Some(code) = lexicon {
        return LexiconSource::Embedded(code.to_string());
    }
    match &config.processing.lexicon_config {
        Some(path) => LexiconSource::File(path.clone()),
        None => LexiconSource::Embedded(config.processing.lexicon.clone()),
    }
}

/// Human-readable name of a lexicon source
pub fn display_name(source: &LexiconSource) -> String {
    match source {
        LexiconSource::Embedded(code) => format!("Built-in: {code}"),
        LexiconSource::File(path) => format!("External: {}", path.display()),
    }
}
