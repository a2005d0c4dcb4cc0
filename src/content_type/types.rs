//! Content-Type acceptance rules

use super::parser::MediaType;
use regex::Regex;
use std::sync::LazyLock;

/// Media types accepted by default: any `text/*`, exactly `application/json`,
/// and SAML metadata
const DEFAULT_PATTERNS: &[&str] = &[
    r"^text/.+",
    r"^application/json$",
    r"^application/samlmetadata\+xml",
];

/// Charsets accepted by default (compared case-insensitively)
const DEFAULT_CHARSETS: &[&str] = &["utf-8", "us-ascii"];

/// Process-wide default rules, built once
pub static DEFAULT_RULES: LazyLock<ContentTypeRules> = LazyLock::new(|| {
    ContentTypeRules::new(DEFAULT_PATTERNS, DEFAULT_CHARSETS)
        .expect("default content type patterns are valid")
});

/// Immutable set of rules deciding which `Content-Type` values are text-like
#[derive(Debug, Clone)]
pub struct ContentTypeRules {
    /// Patterns matched against the lowercased `type/subtype`
    patterns: Vec<Regex>,
    /// Lowercased charsets allowed when a `charset` parameter is present
    charsets: Vec<String>,
}

impl Default for ContentTypeRules {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

impl ContentTypeRules {
    /// Build rules from custom patterns and charsets
    pub fn new<P, C>(patterns: P, charsets: C) -> Result<Self, regex::Error>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let charsets = charsets
            .into_iter()
            .map(|c| c.as_ref().to_ascii_lowercase())
            .collect();
        Ok(Self { patterns, charsets })
    }

    /// Check whether a raw `Content-Type` header value is accepted
    pub fn accepts(&self, content_type: &str) -> bool {
        MediaType::parse(content_type).is_some_and(|mt| self.accepts_media_type(&mt))
    }

    /// Check whether an already parsed media type is accepted
    pub fn accepts_media_type(&self, media_type: &MediaType) -> bool {
        if !self
            .patterns
            .iter()
            .any(|p| p.is_match(media_type.essence()))
        {
            return false;
        }

        match media_type.charset() {
            None => true,
            Some(charset) if charset.is_empty() => true,
            Some(charset) => {
                let charset = charset.to_ascii_lowercase();
                self.charsets.iter().any(|c| *c == charset)
            }
        }
    }
}

/// Check a `Content-Type` header value against the default rules
///
/// ```
/// use pagechain::content_type::is_text_like;
///
/// assert!(is_text_like("application/json; charset=utf-8"));
/// assert!(!is_text_like("image/png"));
/// ```
pub fn is_text_like(content_type: &str) -> bool {
    DEFAULT_RULES.accepts(content_type)
}
