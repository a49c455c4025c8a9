//! Domain name parsing
//!
//! Splits a raw domain into the SLD (every label before the TLD, dots
//! removed) and the TLD (the final label, or a known compound suffix).

use serde::{Deserialize, Serialize};

/// A parsed input domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainName {
    original: String,
    sld: String,
    tld: String,
    malformed: bool,
}

impl DomainName {
    /// Parse a domain, using `compound_suffixes` (lower-case, longest
    /// first) to recognise multi-label TLDs such as `co.uk`.
    ///
    /// Never fails: input without a dot is kept as a malformed domain with
    /// empty SLD and TLD.
    pub fn parse(raw: &str, compound_suffixes: &[String]) -> Self {
        let trimmed = raw.trim();
        // One trailing root dot is allowed
        let host = match trimmed.strip_suffix('.') {
            Some(rest) if rest.contains('.') => rest,
            _ => trimmed,
        };

        if !host.contains('.') {
            return Self::malformed(raw);
        }

        let lower = host.to_ascii_lowercase();
        let (labels, tld) = match split_compound(host, &lower, compound_suffixes) {
            Some(parts) => parts,
            None => match host.rsplit_once('.') {
                Some(parts) => parts,
                None => return Self::malformed(raw),
            },
        };

        if tld.is_empty() {
            return Self::malformed(raw);
        }

        Self {
            original: raw.to_string(),
            sld: labels.replace('.', ""),
            tld: tld.to_string(),
            malformed: false,
        }
    }

    fn malformed(raw: &str) -> Self {
        Self {
            original: raw.to_string(),
            sld: String::new(),
            tld: String::new(),
            malformed: true,
        }
    }

    /// Input exactly as given
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Labels before the TLD with dots removed
    pub fn sld(&self) -> &str {
        &self.sld
    }

    /// TLD as it appeared in the input
    pub fn tld(&self) -> &str {
        &self.tld
    }

    /// SLD length in characters
    pub fn sld_len(&self) -> usize {
        self.sld.chars().count()
    }

    /// Input had no dot
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }
}

fn split_compound<'a>(
    host: &'a str,
    lower: &str,
    compound_suffixes: &[String],
) -> Option<(&'a str, &'a str)> {
    compound_suffixes.iter().find_map(|suffix| {
        let cut = lower.len().checked_sub(suffix.len() + 1)?;
        let matches = lower.ends_with(suffix.as_str()) && lower.as_bytes()[cut] == b'.';
        // At least one label must remain before the suffix
        (matches && cut > 0).then(|| (&host[..cut], &host[cut + 1..]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffixes() -> Vec<String> {
        vec!["co.uk".to_string(), "com.au".to_string()]
    }

    #[test]
    fn test_simple_domain() {
        let d = DomainName::parse("bestpizza.com", &[]);
        assert_eq!(d.sld(), "bestpizza");
        assert_eq!(d.tld(), "com");
        assert_eq!(d.sld_len(), 9);
        assert!(!d.is_malformed());
    }

    #[test]
    fn test_subdomain_labels_join_into_sld() {
        let d = DomainName::parse("shop.example.com", &[]);
        assert_eq!(d.sld(), "shopexample");
        assert_eq!(d.tld(), "com");
    }

    #[test]
    fn test_compound_suffix() {
        let d = DomainName::parse("BestPizza.CO.UK", &suffixes());
        assert_eq!(d.sld(), "BestPizza");
        assert_eq!(d.tld(), "CO.UK");
    }

    #[test]
    fn test_bare_compound_suffix_is_plain_split() {
        let d = DomainName::parse("co.uk", &suffixes());
        assert_eq!(d.sld(), "co");
        assert_eq!(d.tld(), "uk");
    }

    #[test]
    fn test_suffix_must_align_to_label() {
        let d = DomainName::parse("disco.uk", &suffixes());
        assert_eq!(d.sld(), "disco");
        assert_eq!(d.tld(), "uk");
    }

    #[test]
    fn test_malformed_inputs() {
        for raw in ["", "   ", "localhost", "example."] {
            let d = DomainName::parse(raw, &[]);
            assert!(d.is_malformed(), "{raw:?} should be malformed");
            assert_eq!(d.sld(), "");
            assert_eq!(d.tld(), "");
            assert_eq!(d.original(), raw);
        }
    }

    #[test]
    fn test_trailing_root_dot_and_whitespace() {
        let d = DomainName::parse("  example.com. ", &[]);
        assert_eq!(d.sld(), "example");
        assert_eq!(d.tld(), "com");
        assert_eq!(d.original(), "  example.com. ");
    }

    #[test]
    fn test_empty_sld() {
        let d = DomainName::parse(".com", &[]);
        assert!(!d.is_malformed());
        assert_eq!(d.sld(), "");
        assert_eq!(d.tld(), "com");
    }
}
