//! Word segmentation for domain names
//!
//! Splits the second-level part of a domain into lexicon words, scores how
//! much of it the lexicon explains and renders a camel-cased display label.
//!
//! # Example
//!
//! ```rust
//! use domsplit_core::{get_lexicon, normalizer, scorer, segmenter, DomainName};
//!
//! let lexicon = get_lexicon("en").unwrap();
//! let domain = DomainName::parse("mygptapp.io", lexicon.compound_suffixes());
//!
//! let segmentation = segmenter::segment(domain.sld(), lexicon.as_ref());
//! assert_eq!(segmentation.split_text(), "my gpt app");
//! assert_eq!(scorer::score(&segmentation, domain.sld()), 100);
//! assert_eq!(
//!     normalizer::to_display_domain(segmentation.tokens(), domain.tld()),
//!     "myGPTApp.io"
//! );
//! ```

pub mod domain;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod scorer;
pub mod segmenter;
pub mod types;

pub use domain::DomainName;
pub use error::{CoreError, Result};
pub use lexicon::{
    available_lexicons, get_lexicon, is_default_stop_word, load_lexicon_file, load_lexicon_str,
    ConfigurableLexicon, EntryKind, Lexicon, LexiconConfig, LexiconMatch, STOP_WORDS,
};
pub use normalizer::{chars_equivalent, to_display_domain, to_display_label};
pub use scorer::{score, MAX_CONFIDENCE};
pub use segmenter::{classify_tokens, segment};
pub use types::{ScoredSegmentation, Segmentation, Token, TokenSource};

/// Segment and score an SLD in one call
pub fn segment_scored(sld: &str, lexicon: &dyn Lexicon) -> ScoredSegmentation {
    let segmentation = segment(sld, lexicon);
    let confidence = score(&segmentation, sld);
    ScoredSegmentation {
        segmentation,
        confidence,
    }
}
