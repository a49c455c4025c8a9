//! Lexicon trie for forward prefix scanning
//!
//! Compact trie with nodes in a contiguous vector. Lookups are
//! case-insensitive for ASCII and never allocate per character.

use super::{EntryKind, LexiconMatch};
use std::collections::HashMap;

/// Entry stored on a terminal node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    kind: EntryKind,
    rank: u32,
}

/// Trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Set when a lexicon entry ends here
    entry: Option<Entry>,
}

/// Case-insensitive lexicon trie
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    len: usize,
    max_depth: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create empty trie
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
            max_depth: 0,
        }
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Length in chars of the longest entry
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Insert an entry.
    ///
    /// Re-inserting an existing entry keeps the lower rank, and an acronym
    /// always replaces a plain word so acronyms win ties.
    pub fn insert(&mut self, entry: &str, kind: EntryKind, rank: u32) {
        if entry.is_empty() {
            return;
        }

        let mut current_idx = 0u32;
        let mut depth = 0usize;

        for ch in entry.chars().map(|c| c.to_ascii_lowercase()) {
            depth += 1;
            let next_idx = match self.nodes[current_idx as usize].children.get(&ch) {
                Some(&child_idx) => child_idx,
                None => {
                    let new_idx = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current_idx as usize]
                        .children
                        .insert(ch, new_idx);
                    new_idx
                }
            };
            current_idx = next_idx;
        }

        let node = &mut self.nodes[current_idx as usize];
        let incoming = Entry { kind, rank };
        node.entry = match node.entry {
            None => {
                self.len += 1;
                Some(incoming)
            }
            Some(existing) => Some(merge_entries(existing, incoming)),
        };
        self.max_depth = self.max_depth.max(depth);
    }

    /// Exact lookup of a whole entry
    pub fn get(&self, text: &str) -> Option<(EntryKind, u32)> {
        let mut current_idx = 0u32;
        for ch in text.chars().map(|c| c.to_ascii_lowercase()) {
            current_idx = *self.nodes[current_idx as usize].children.get(&ch)?;
        }
        self.nodes[current_idx as usize]
            .entry
            .map(|e| (e.kind, e.rank))
    }

    /// All entries that are a prefix of `chars[start..]`, shortest first.
    ///
    /// `end` in each match is an exclusive char index into `chars`.
    pub fn prefixes_at(&self, chars: &[char], start: usize) -> Vec<LexiconMatch> {
        let mut matches = Vec::new();
        if start >= chars.len() {
            return matches;
        }

        let mut current_idx = 0u32;
        for (offset, ch) in chars[start..].iter().enumerate() {
            let key = ch.to_ascii_lowercase();
            match self.nodes[current_idx as usize].children.get(&key) {
                Some(&next_idx) => current_idx = next_idx,
                None => break,
            }
            if let Some(entry) = self.nodes[current_idx as usize].entry {
                matches.push(LexiconMatch {
                    end: start + offset + 1,
                    kind: entry.kind,
                    rank: entry.rank,
                });
            }
        }

        matches
    }
}

fn merge_entries(existing: Entry, incoming: Entry) -> Entry {
    match (existing.kind, incoming.kind) {
        (EntryKind::Acronym, EntryKind::Word) => existing,
        (EntryKind::Word, EntryKind::Acronym) => incoming,
        _ if incoming.rank < existing.rank => incoming,
        _ => existing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_basic_lookup() {
        let mut trie = Trie::new();
        trie.insert("best", EntryKind::Word, 10);
        trie.insert("pizza", EntryKind::Word, 20);

        assert_eq!(trie.get("best"), Some((EntryKind::Word, 10)));
        assert_eq!(trie.get("BEST"), Some((EntryKind::Word, 10)));
        assert_eq!(trie.get("bes"), None);
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.max_depth(), 5);
    }

    #[test]
    fn test_prefixes_at_returns_all_lengths() {
        let mut trie = Trie::new();
        trie.insert("a", EntryKind::Word, 1);
        trie.insert("app", EntryKind::Word, 5);
        trie.insert("apple", EntryKind::Word, 7);

        let text = chars("xapplesauce");
        let ends: Vec<usize> = trie.prefixes_at(&text, 1).iter().map(|m| m.end).collect();
        assert_eq!(ends, vec![2, 4, 6]);
        assert!(trie.prefixes_at(&text, 0).is_empty());
        assert!(trie.prefixes_at(&text, 42).is_empty());
    }

    #[test]
    fn test_acronym_replaces_word() {
        let mut trie = Trie::new();
        trie.insert("dev", EntryKind::Word, 300);
        trie.insert("dev", EntryKind::Acronym, 0);
        trie.insert("dev", EntryKind::Word, 1);

        assert_eq!(trie.get("dev"), Some((EntryKind::Acronym, 0)));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_duplicate_word_keeps_lowest_rank() {
        let mut trie = Trie::new();
        trie.insert("shop", EntryKind::Word, 40);
        trie.insert("shop", EntryKind::Word, 900);
        assert_eq!(trie.get("shop"), Some((EntryKind::Word, 40)));
    }

    #[test]
    fn test_non_ascii_never_matches() {
        let mut trie = Trie::new();
        trie.insert("cafe", EntryKind::Word, 3);
        assert!(trie.prefixes_at(&chars("café"), 0).is_empty());
        assert_eq!(trie.prefixes_at(&chars("CAFE"), 0).len(), 1);
    }
}
