//! Segmentation value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    /// Dictionary word
    Word,
    /// Member of the acronym set
    Acronym,
    /// Run of ASCII digits, kept literal
    Numeric,
    /// Run of letters no lexicon entry explains
    Unmatched,
    /// Single non-alphanumeric character such as `-`
    Separator,
}

impl TokenSource {
    /// Explained by the lexicon
    pub fn is_recognized(self) -> bool {
        matches!(self, TokenSource::Word | TokenSource::Acronym)
    }

    /// Residual characters that lower confidence
    pub fn is_fallback(self) -> bool {
        matches!(self, TokenSource::Numeric | TokenSource::Unmatched)
    }
}

/// A word-like slice of an SLD
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Characters as they appeared in the input
    pub text: String,
    /// Classification
    pub source: TokenSource,
}

impl Token {
    /// Create a token
    pub fn new(text: impl Into<String>, source: TokenSource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }

    /// Character count
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Lower-cased text used for matching and statistics
    pub fn normalized(&self) -> String {
        self.text.to_lowercase()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered tokens whose concatenation reproduces the SLD
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    tokens: Vec<Token>,
}

impl Segmentation {
    /// Wrap a token list
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Empty segmentation
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tokens in order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Take ownership of the tokens
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Whether there are no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens, separators included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Number of tokens excluding separators
    pub fn word_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.source != TokenSource::Separator)
            .count()
    }

    /// Concatenated token text
    pub fn concat(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Space-joined token text
    pub fn split_text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Characters covered by recognized tokens
    pub fn recognized_chars(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.source.is_recognized())
            .map(Token::char_len)
            .sum()
    }

    /// Characters covered by fallback tokens
    pub fn fallback_chars(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.source.is_fallback())
            .map(Token::char_len)
            .sum()
    }
}

/// A segmentation with its confidence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSegmentation {
    /// The split
    pub segmentation: Segmentation,
    /// 0..=100
    pub confidence: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Segmentation {
        Segmentation::new(vec![
            Token::new("best", TokenSource::Word),
            Token::new("-", TokenSource::Separator),
            Token::new("xq", TokenSource::Unmatched),
            Token::new("7", TokenSource::Numeric),
            Token::new("GPT", TokenSource::Acronym),
        ])
    }

    #[test]
    fn test_concat_and_split_text() {
        let seg = sample();
        assert_eq!(seg.concat(), "best-xq7GPT");
        assert_eq!(seg.split_text(), "best - xq 7 GPT");
    }

    #[test]
    fn test_counts() {
        let seg = sample();
        assert_eq!(seg.len(), 5);
        assert_eq!(seg.word_count(), 4);
        assert_eq!(seg.recognized_chars(), 7);
        assert_eq!(seg.fallback_chars(), 3);
    }

    #[test]
    fn test_source_classes() {
        assert!(TokenSource::Acronym.is_recognized());
        assert!(!TokenSource::Separator.is_recognized());
        assert!(!TokenSource::Separator.is_fallback());
        assert!(TokenSource::Numeric.is_fallback());
    }

    #[test]
    fn test_empty() {
        let seg = Segmentation::empty();
        assert!(seg.is_empty());
        assert_eq!(seg.split_text(), "");
        assert_eq!(seg.word_count(), 0);
    }
}
