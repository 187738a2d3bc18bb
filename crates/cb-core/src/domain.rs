//! Domain label normalization.
//!
//! Filter lists carry human-typed domains in mixed case and, occasionally,
//! internationalized form. WebKit's `if-domain`/`unless-domain` arrays want
//! the lowercase ASCII (punycode) encoding, so every label goes through
//! [`normalize`] before landing in a trigger.

use thiserror::Error;

/// Failure to normalize a domain label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDomain {
    /// Label was empty, or only whitespace and dots.
    #[error("empty domain label")]
    Empty,
    /// Punycode encoding rejected the label.
    #[error("cannot encode domain label {0:?}")]
    Encode(String),
}

/// Lowercase a domain label and encode it to its ASCII (punycode) form.
///
/// Idempotent: an already-normalized label comes back unchanged. Fails on
/// empty labels and on anything the STD3 rules reject (embedded spaces,
/// `*`, `~`, overlong labels).
pub fn normalize(label: &str) -> Result<String, InvalidDomain> {
    let trimmed = label.trim().trim_matches('.');
    if trimmed.is_empty() {
        return Err(InvalidDomain::Empty);
    }

    let lowered = trimmed.to_lowercase();
    idna::domain_to_ascii_strict(&lowered)
        .map_err(|_| InvalidDomain::Encode(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_domain_passes_through() {
        assert_eq!(normalize("example.com").unwrap(), "example.com");
        assert_eq!(normalize("sub.example.co.uk").unwrap(), "sub.example.co.uk");
    }

    #[test]
    fn test_case_is_folded() {
        assert_eq!(normalize("Example.COM").unwrap(), "example.com");
        assert_eq!(normalize("ADS.TRACKER.NET").unwrap(), "ads.tracker.net");
    }

    #[test]
    fn test_idempotent() {
        for label in ["example.com", "Example.COM", "münchen.de", "xn--mnchen-3ya.de"] {
            let once = normalize(label).unwrap();
            assert_eq!(normalize(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_internationalized_domain_is_punycoded() {
        assert_eq!(normalize("münchen.de").unwrap(), "xn--mnchen-3ya.de");
        assert_eq!(normalize("bücher.example").unwrap(), "xn--bcher-kva.example");
    }

    #[test]
    fn test_surrounding_whitespace_and_dots_are_trimmed() {
        assert_eq!(normalize("  example.com  ").unwrap(), "example.com");
        assert_eq!(normalize("example.com.").unwrap(), "example.com");
    }

    #[test]
    fn test_empty_label_fails() {
        assert_eq!(normalize(""), Err(InvalidDomain::Empty));
        assert_eq!(normalize("   "), Err(InvalidDomain::Empty));
        assert_eq!(normalize("."), Err(InvalidDomain::Empty));
    }

    #[test]
    fn test_disallowed_characters_fail() {
        assert!(matches!(normalize("~foo.com"), Err(InvalidDomain::Encode(_))));
        assert!(matches!(normalize("bad domain.com"), Err(InvalidDomain::Encode(_))));
        assert!(matches!(normalize("*.example.com"), Err(InvalidDomain::Encode(_))));
    }
}
