//! Runtime lexicon built from configuration
//!
//! Bridges the TOML schema and the trait used on the hot path.

use super::{
    config::LexiconConfig, is_default_stop_word, trie::Trie, EntryKind, Lexicon, LexiconMatch,
};
use std::collections::HashSet;

/// Trie-backed lexicon loaded from a [`LexiconConfig`]
#[derive(Debug, Clone)]
pub struct ConfigurableLexicon {
    code: String,
    name: String,
    trie: Trie,
    stop_words: HashSet<String>,
    /// Longest suffix first so the most specific one matches
    suffixes: Vec<String>,
    acronym_count: usize,
}

impl ConfigurableLexicon {
    /// Create from configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self, String> {
        config.validate()?;

        let mut trie = Trie::new();

        // Words rank by position across tiers; rank 0 is reserved for acronyms
        let mut rank = 1u32;
        for tier in &config.tiers {
            for word in &tier.words {
                trie.insert(word, EntryKind::Word, rank);
                rank = rank.saturating_add(1);
            }
        }

        for acronym in &config.acronyms.entries {
            trie.insert(acronym, EntryKind::Acronym, 0);
        }

        let stop_words = config.stop_words.entries.iter().cloned().collect();

        let mut suffixes: Vec<String> = config
            .suffixes
            .compound
            .iter()
            .map(|s| s.to_ascii_lowercase())
            .collect();
        suffixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        suffixes.dedup();

        let acronym_count = config
            .acronyms
            .entries
            .iter()
            .collect::<HashSet<_>>()
            .len();

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            trie,
            stop_words,
            suffixes,
            acronym_count,
        })
    }

    /// Number of distinct entries (words and acronyms)
    pub fn entry_count(&self) -> usize {
        self.trie.len()
    }

    /// Number of distinct acronyms
    pub fn acronym_count(&self) -> usize {
        self.acronym_count
    }

    /// Number of stop words
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Length of the longest entry
    pub fn max_entry_len(&self) -> usize {
        self.trie.max_depth()
    }
}

impl Lexicon for ConfigurableLexicon {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn is_word(&self, word: &str) -> bool {
        self.trie.get(word).is_some()
    }

    #[inline]
    fn is_acronym(&self, word: &str) -> bool {
        matches!(self.trie.get(word), Some((EntryKind::Acronym, _)))
    }

    fn word_rank(&self, word: &str) -> Option<u32> {
        self.trie.get(word).map(|(_, rank)| rank)
    }

    fn entry_kind(&self, word: &str) -> Option<EntryKind> {
        self.trie.get(word).map(|(kind, _)| kind)
    }

    fn is_stop_word(&self, word: &str) -> bool {
        is_default_stop_word(word) || self.stop_words.contains(word)
    }

    fn compound_suffixes(&self) -> &[String] {
        &self.suffixes
    }

    #[inline]
    fn matches_at(&self, chars: &[char], start: usize) -> Vec<LexiconMatch> {
        self.trie.prefixes_at(chars, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> ConfigurableLexicon {
        let config = LexiconConfig::from_toml(
            r#"
[metadata]
code = "t"
name = "Tiny"

[acronyms]
entries = ["ai", "dev", "gpt"]

[stop_words]
entries = ["the", "a"]

[suffixes]
compound = ["co.uk", "uk.com", "net.co.uk"]

[[tiers]]
name = "core"
words = ["the", "best", "dev"]

[[tiers]]
name = "extra"
words = ["pizza", "best"]
"#,
        )
        .unwrap();
        ConfigurableLexicon::from_config(&config).unwrap()
    }

    #[test]
    fn test_ranks_follow_tier_order() {
        let lex = lexicon();
        assert_eq!(lex.word_rank("the"), Some(1));
        assert_eq!(lex.word_rank("best"), Some(2));
        assert_eq!(lex.word_rank("pizza"), Some(4));
        assert_eq!(lex.word_rank("gpt"), Some(0));
    }

    #[test]
    fn test_acronym_wins_over_word() {
        let lex = lexicon();
        assert!(lex.is_acronym("dev"));
        assert!(lex.is_word("dev"));
        assert_eq!(lex.entry_kind("dev"), Some(EntryKind::Acronym));
        assert!(!lex.is_acronym("best"));
    }

    #[test]
    fn test_counts_and_metadata() {
        let lex = lexicon();
        assert_eq!(lex.code(), "t");
        assert_eq!(lex.name(), "Tiny");
        assert_eq!(lex.acronym_count(), 3);
        assert_eq!(lex.stop_word_count(), 2);
        // the, best, dev, pizza, ai, gpt
        assert_eq!(lex.entry_count(), 6);
        assert_eq!(lex.max_entry_len(), 5);
    }

    #[test]
    fn test_suffixes_longest_first() {
        let lex = lexicon();
        assert_eq!(lex.compound_suffixes()[0], "net.co.uk");
        assert!(lex.is_stop_word("the"));
        assert!(!lex.is_stop_word("best"));
    }

    #[test]
    fn test_stop_words_without_table() {
        let config = LexiconConfig::from_toml(
            r#"
[metadata]
code = "bare"
name = "Bare"

[[tiers]]
name = "core"
words = ["the", "best", "and", "for"]
"#,
        )
        .unwrap();
        let lex = ConfigurableLexicon::from_config(&config).unwrap();

        assert_eq!(lex.stop_word_count(), 0);
        for word in ["the", "and", "for", "a"] {
            assert!(lex.is_stop_word(word), "{word}");
        }
        assert!(!lex.is_stop_word("best"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = LexiconConfig::from_toml(
            r#"
[metadata]
code = ""
name = "Broken"

[[tiers]]
name = "core"
words = ["ok"]
"#,
        )
        .unwrap();
        assert!(ConfigurableLexicon::from_config(&config).is_err());
    }
}
