//! IRI type for type-safe URL handling.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Browser boundary: Decode on input, encode on output

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded IRI (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Path form starts with `/` (except [`Iri::relative`]); absolute form
///   keeps its scheme
/// - Query string and fragment are stripped at construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Create from a raw path as received over the wire (decode
    /// percent-encoding, strip query string and fragment).
    pub fn from_raw(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;
        let path = encoded.split(['?', '#']).next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_path(&decoded)
    }

    /// Create from an already-decoded path. Normalizes the leading slash
    /// and strips query string and fragment.
    pub fn from_path(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        // Absolute and network-path IRIs are kept verbatim (minus query
        // and fragment); only bare paths get slash normalization.
        let path = trimmed.split(['?', '#']).next().unwrap_or(trimmed);
        if Self::has_scheme(path) || path.starts_with("//") {
            return Self(Arc::from(path));
        }

        let normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self(Arc::from(normalized))
    }

    /// Create from a full URL without normalization of the authority part.
    pub fn from_url(url: &url::Url) -> Self {
        use percent_encoding::percent_decode_str;
        let s = url.as_str();
        let stripped = s.split(['?', '#']).next().unwrap_or(s);
        let decoded = percent_decode_str(stripped)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| stripped.to_string());
        Self(Arc::from(decoded))
    }

    /// Create a relative-path IRI (no leading slash).
    pub fn relative(decoded: &str) -> Self {
        let path = decoded.split(['?', '#']).next().unwrap_or(decoded);
        Self(Arc::from(path.trim_start_matches('/')))
    }

    fn has_scheme(s: &str) -> bool {
        s.split_once("://")
            .is_some_and(|(scheme, _)| !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')))
    }

    /// Get the decoded IRI as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode for the wire (percent-encode non-ASCII and special
    /// characters, path segments only).
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Check if the IRI is only the root path.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Iri {
    fn default() -> Self {
        Self::from_path("/")
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Iri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Self::from_path(&s)
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Self::from_path(s)
    }
}

impl PartialEq<str> for Iri {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for Iri {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for Iri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Iri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_path(&s))
    }
}
