//! Display casing for segmented domains
//!
//! Case changes are ASCII-only so that removing dots and lower-casing the
//! label always gives back the characters of the input.

use crate::types::{Token, TokenSource};

/// Render tokens as a camel-cased label.
///
/// - `ai` in any case renders `AI`
/// - acronyms render upper-case wherever they appear
/// - the first token renders lower-case, later words capitalized
/// - numeric and unmatched runs render literal lower-case
/// - separators render unchanged
pub fn to_display_label(tokens: &[Token]) -> String {
    let mut label = String::new();
    for (index, token) in tokens.iter().enumerate() {
        render_token(token, index == 0, &mut label);
    }
    label
}

/// Render tokens and append `.tld`
pub fn to_display_domain(tokens: &[Token], tld: &str) -> String {
    let mut label = to_display_label(tokens);
    label.push('.');
    label.push_str(tld);
    label
}

fn render_token(token: &Token, first: bool, out: &mut String) {
    let text = token.text.as_str();

    // Kept alongside the acronym rule below
    if text.eq_ignore_ascii_case("ai") {
        out.push_str("AI");
        return;
    }

    match token.source {
        TokenSource::Acronym => out.push_str(&text.to_ascii_uppercase()),
        TokenSource::Separator => out.push_str(text),
        TokenSource::Numeric | TokenSource::Unmatched => out.push_str(&text.to_ascii_lowercase()),
        TokenSource::Word if first => out.push_str(&text.to_ascii_lowercase()),
        TokenSource::Word => {
            let mut chars = text.chars();
            if let Some(head) = chars.next() {
                out.push(head.to_ascii_uppercase());
                out.extend(chars.map(|c| c.to_ascii_lowercase()));
            }
        }
    }
}

/// Whether two domain strings hold the same characters once dots are
/// removed and case is folded.
///
/// This is the check that guards edits to a split from corrupting the
/// domain.
pub fn chars_equivalent(a: &str, b: &str) -> bool {
    strip_domain(a) == strip_domain(b)
}

/// Remove dots and lower-case
pub fn strip_domain(domain: &str) -> String {
    domain
        .chars()
        .filter(|&c| c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}
