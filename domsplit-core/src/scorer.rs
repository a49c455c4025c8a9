//! Confidence scoring
//!
//! `floor(100 * recognized / countable)`, where countable characters are
//! the SLD's alphanumeric characters. Separators are structural and do not
//! count either way.

use crate::types::Segmentation;

/// Highest confidence
pub const MAX_CONFIDENCE: u8 = 100;

/// Score a segmentation of `sld` on 0..=100.
///
/// 100 only when every countable character is covered by a word or
/// acronym token. Any fallback character drops the score below 100, and an
/// SLD with nothing countable scores 0.
pub fn score(segmentation: &Segmentation, sld: &str) -> u8 {
    let countable = sld.chars().filter(|c| c.is_alphanumeric()).count();
    if countable == 0 {
        return 0;
    }

    let recognized = segmentation.recognized_chars().min(countable);
    // Floor keeps a single unexplained char from rounding up to 100
    ((recognized * 100) / countable) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Token, TokenSource};

    fn seg(parts: &[(&str, TokenSource)]) -> Segmentation {
        Segmentation::new(
            parts
                .iter()
                .map(|(text, source)| Token::new(*text, *source))
                .collect(),
        )
    }

    #[test]
    fn test_full_cover_scores_100() {
        let s = seg(&[("best", TokenSource::Word), ("pizza", TokenSource::Word)]);
        assert_eq!(score(&s, "bestpizza"), 100);
    }

    #[test]
    fn test_separators_ignored() {
        let s = seg(&[
            ("best", TokenSource::Word),
            ("-", TokenSource::Separator),
            ("ai", TokenSource::Acronym),
        ]);
        assert_eq!(score(&s, "best-ai"), 100);
    }

    #[test]
    fn test_nothing_recognized() {
        let s = seg(&[("xq", TokenSource::Unmatched), ("7", TokenSource::Numeric)]);
        assert_eq!(score(&s, "xq7"), 0);
    }

    #[test]
    fn test_partial_cover_floors() {
        let s = seg(&[("best", TokenSource::Word), ("zz", TokenSource::Unmatched)]);
        assert_eq!(score(&s, "bestzz"), 66);
    }

    #[test]
    fn test_one_fallback_char_in_long_sld_is_below_100() {
        let word = "a".repeat(199);
        let s = seg(&[(word.as_str(), TokenSource::Word), ("q", TokenSource::Unmatched)]);
        let sld = format!("{word}q");
        assert_eq!(score(&s, &sld), 99);
    }

    #[test]
    fn test_monotonic_in_fallback_chars() {
        let mut previous = MAX_CONFIDENCE;
        for extra in 0..20 {
            let tail = "z".repeat(extra);
            let s = seg(&[("pizza", TokenSource::Word), (tail.as_str(), TokenSource::Unmatched)]);
            let current = score(&s, &format!("pizza{tail}"));
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn test_empty_sld_scores_zero() {
        assert_eq!(score(&Segmentation::empty(), ""), 0);
        assert_eq!(score(&Segmentation::empty(), "--"), 0);
    }
}
