//! Lexicon provider for segmentation
//!
//! The segmenter only sees the [`Lexicon`] trait, so the word list can be
//! swapped (embedded TOML, external file, or a test double) without
//! touching segmentation logic.

pub mod config;
pub(crate) mod loader;
pub(crate) mod runtime;
pub(crate) mod trie;

pub use config::LexiconConfig;
pub use loader::{available_lexicons, get_lexicon, load_lexicon_file, load_lexicon_str};
pub use runtime::ConfigurableLexicon;

/// Kind of lexicon entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Ordinary dictionary word
    Word,
    /// Member of the fixed acronym set
    Acronym,
}

/// A lexicon entry found at a position in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconMatch {
    /// Exclusive end char index
    pub end: usize,
    /// Entry kind
    pub kind: EntryKind,
    /// Frequency rank, lower is more common; acronyms are 0
    pub rank: u32,
}

/// Longest entry the default [`Lexicon::matches_at`] will probe for
pub const DEFAULT_MAX_ENTRY_LEN: usize = 24;

/// Words always left out of word statistics, whatever lexicon is loaded
pub const STOP_WORDS: &[&str] = &[
    "a", "e", "y", "i", "o", "and", "of", "in", "on", "the", "to", "is", "for",
];

/// Whether `word` (lower-case) is in [`STOP_WORDS`]
pub fn is_default_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Source of known words and acronyms.
///
/// All string arguments are expected lower-case.
pub trait Lexicon: Send + Sync {
    /// Short identifier such as `en`
    fn code(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str {
        self.code()
    }

    /// Whether `word` is a dictionary word
    fn is_word(&self, word: &str) -> bool;

    /// Whether `word` belongs to the acronym set
    fn is_acronym(&self, word: &str) -> bool;

    /// Frequency rank of a known entry
    fn word_rank(&self, word: &str) -> Option<u32> {
        if self.is_acronym(word) {
            Some(0)
        } else if self.is_word(word) {
            Some(1)
        } else {
            None
        }
    }

    /// Classify an entry, acronyms first
    fn entry_kind(&self, word: &str) -> Option<EntryKind> {
        if self.is_acronym(word) {
            Some(EntryKind::Acronym)
        } else if self.is_word(word) {
            Some(EntryKind::Word)
        } else {
            None
        }
    }

    /// Whether `word` is excluded from display statistics.
    ///
    /// Implementations may extend [`STOP_WORDS`] but not shrink it.
    fn is_stop_word(&self, word: &str) -> bool {
        is_default_stop_word(word)
    }

    /// Multi-label public suffixes treated as a single TLD
    fn compound_suffixes(&self) -> &[String] {
        &[]
    }

    /// Every entry that is a prefix of `chars[start..]`, shortest first.
    ///
    /// The default probes each length up to [`DEFAULT_MAX_ENTRY_LEN`];
    /// trie-backed implementations override it.
    fn matches_at(&self, chars: &[char], start: usize) -> Vec<LexiconMatch> {
        let mut matches = Vec::new();
        let mut candidate = String::new();
        for (offset, ch) in chars
            .iter()
            .skip(start)
            .take(DEFAULT_MAX_ENTRY_LEN)
            .enumerate()
        {
            candidate.push(ch.to_ascii_lowercase());
            if let Some(kind) = self.entry_kind(&candidate) {
                let rank = self.word_rank(&candidate).unwrap_or(u32::MAX);
                matches.push(LexiconMatch {
                    end: start + offset + 1,
                    kind,
                    rank,
                });
            }
        }
        matches
    }
}
