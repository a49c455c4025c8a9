//! Per-domain conversion results

use crate::error::{EngineError, Result};
use domsplit_core::{
    classify_tokens, chars_equivalent, score, segment, to_display_domain, DomainName, Lexicon,
    Segmentation, Token, MAX_CONFIDENCE,
};

/// Outcome of converting one input domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// Input exactly as given
    pub original: String,
    /// Camel-cased display domain
    pub converted: String,
    /// Space-joined token text
    pub split: String,
    /// Tokens excluding separators
    pub word_count: usize,
    /// 0..=100
    pub confidence: u8,
    /// SLD length in characters, 0 for malformed input
    pub sld_length: usize,
    /// TLD as it appeared, empty for malformed input
    pub tld: String,
    /// Confirmed by a person
    pub reviewed: bool,
    /// SLD the tokens reproduce
    pub sld: String,
    /// Current segmentation
    pub tokens: Vec<Token>,
}

impl ConversionResult {
    /// Parse, segment, score and render one domain
    pub fn from_domain(raw: &str, lexicon: &dyn Lexicon) -> Self {
        let domain = DomainName::parse(raw, lexicon.compound_suffixes());
        if domain.is_malformed() {
            log::trace!("malformed domain {raw:?}");
            return Self::malformed(raw);
        }

        let segmentation = segment(domain.sld(), lexicon);
        let confidence = score(&segmentation, domain.sld());
        log::trace!(
            "{raw} -> [{}] ({confidence})",
            segmentation.split_text()
        );

        let mut result = Self {
            original: raw.to_string(),
            converted: String::new(),
            split: String::new(),
            word_count: 0,
            confidence,
            sld_length: domain.sld_len(),
            tld: domain.tld().to_string(),
            reviewed: false,
            sld: domain.sld().to_string(),
            tokens: Vec::new(),
        };
        result.set_segmentation(segmentation);
        result
    }

    fn malformed(raw: &str) -> Self {
        Self {
            original: raw.to_string(),
            converted: raw.to_string(),
            split: String::new(),
            word_count: 0,
            confidence: 0,
            sld_length: 0,
            tld: String::new(),
            reviewed: false,
            sld: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Whether the input could not be split into SLD and TLD
    pub fn is_malformed(&self) -> bool {
        self.tld.is_empty()
    }

    /// Awaiting review
    pub fn is_pending(&self) -> bool {
        !self.reviewed && self.confidence < MAX_CONFIDENCE
    }

    /// Replace the segmentation with caller-chosen pieces.
    ///
    /// The pieces must hold the SLD's characters (case-insensitive). Token
    /// text is re-sliced from the SLD so original casing survives, sources
    /// are re-classified, and confidence is recomputed unless the row is
    /// reviewed.
    pub fn apply_split<S: AsRef<str>>(&mut self, pieces: &[S], lexicon: &dyn Lexicon) -> Result<()> {
        let joined: String = pieces.iter().map(AsRef::as_ref).collect();
        let mismatch = || EngineError::SplitMismatch {
            split: joined.clone(),
            expected: self.sld.clone(),
        };

        if self.is_malformed()
            || joined.contains('.')
            || joined.chars().count() != self.sld.chars().count()
            || !chars_equivalent(&joined, &self.sld)
        {
            return Err(mismatch());
        }

        let chars: Vec<char> = self.sld.chars().collect();
        let mut start = 0;
        let mut sliced = Vec::with_capacity(pieces.len());
        for piece in pieces {
            let len = piece.as_ref().chars().count();
            sliced.push(chars[start..start + len].iter().collect::<String>());
            start += len;
        }

        let segmentation = classify_tokens(&sliced, lexicon);
        if !self.reviewed {
            self.confidence = score(&segmentation, &self.sld);
        }
        self.set_segmentation(segmentation);
        Ok(())
    }

    /// Confirm the row; it no longer counts as pending
    pub fn mark_reviewed(&mut self) {
        self.reviewed = true;
        self.confidence = MAX_CONFIDENCE;
    }

    fn set_segmentation(&mut self, segmentation: Segmentation) {
        self.converted = to_display_domain(segmentation.tokens(), &self.tld);
        self.split = segmentation.split_text();
        self.word_count = segmentation.word_count();
        self.tokens = segmentation.into_tokens();
    }
}
