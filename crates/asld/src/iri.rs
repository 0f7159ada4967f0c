//! Lenient IRI references.
//!
//! Property values are recognized as IRIs before any other kind, so the
//! parser here is deliberately permissive: relative references are accepted,
//! and the only things rejected are text that could never be a reference at
//! all (empty input, whitespace, control characters, malformed `%` escapes).

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A parsed IRI reference.
///
/// Ordering and equality are lexical over the original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri {
    text: String,
    scheme_len: Option<usize>,
}

impl Iri {
    /// Parses `text` as an IRI reference. Returns `None` if it cannot be one.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        if text.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return None;
        }
        if !escapes_are_valid(text.as_bytes()) {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            scheme_len: scheme_len(text),
        })
    }

    /// The reference as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The scheme (without the trailing `:`), if the reference is absolute.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme_len.map(|len| &self.text[..len])
    }

    /// True if the reference carries a scheme.
    #[must_use]
    pub fn has_scheme(&self) -> bool {
        self.scheme_len.is_some()
    }

    /// Consumes the IRI, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

/// RFC 3986: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
fn scheme_len(text: &str) -> Option<usize> {
    let colon = text.find(':')?;
    let scheme = &text[..colon];
    let mut bytes = scheme.bytes();
    let first = bytes.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    bytes
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
        .then_some(colon)
}

fn escapes_are_valid(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Iri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::MalformedDocument(format!("invalid IRI {s:?}")))
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_references_have_schemes() {
        let iri = Iri::parse("https://example.com/notes/1").unwrap();
        assert_eq!(iri.scheme(), Some("https"));
        assert!(Iri::parse("urn:uuid:1234").unwrap().has_scheme());
        assert!(Iri::parse("did:key:z6Mk").unwrap().has_scheme());
    }

    #[test]
    fn relative_references_parse_without_scheme() {
        for text in ["Note", "/notes/1", "#frag", "a/b?c=d", "Hello!"] {
            let iri = Iri::parse(text).unwrap();
            assert!(!iri.has_scheme(), "{text} should be scheme-less");
        }
    }

    #[test]
    fn colon_without_valid_scheme_is_relative() {
        assert!(!Iri::parse("1abc:def").unwrap().has_scheme());
        assert!(!Iri::parse(":nothing").unwrap().has_scheme());
        assert!(!Iri::parse("a_b:c").unwrap().has_scheme());
    }

    #[test]
    fn rejects_text_that_cannot_be_a_reference() {
        assert!(Iri::parse("").is_none());
        assert!(Iri::parse("hello world").is_none());
        assert!(Iri::parse("line\nbreak").is_none());
        assert!(Iri::parse("bad%zzescape").is_none());
        assert!(Iri::parse("trailing%2").is_none());
        assert!(Iri::parse("ok%20escape").is_some());
    }

    #[test]
    fn from_str_reports_malformed() {
        let err = "two words".parse::<Iri>().unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[test]
    fn ordering_is_lexical() {
        let a = Iri::parse("https://a.example").unwrap();
        let b = Iri::parse("https://b.example").unwrap();
        assert!(a < b);
        assert_eq!(a.to_string(), "https://a.example");
    }
}
