//! Reference type - the URL form requested from the route table.

use serde::{Deserialize, Serialize};

/// The URL form a generated IRI should take.
///
/// Passed through verbatim to the route table; the converter never
/// downgrades one form to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceType {
    /// Absolute path: `/dummies/1`
    #[default]
    AbsPath,
    /// Absolute URL with scheme and host: `http://example.com/dummies/1`
    AbsUrl,
    /// Network path (scheme-relative): `//example.com/dummies/1`
    NetworkPath,
    /// Path relative to the current location: `dummies/1`
    RelPath,
}

impl std::fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::AbsPath => "abs-path",
            Self::AbsUrl => "abs-url",
            Self::NetworkPath => "network-path",
            Self::RelPath => "rel-path",
        };
        write!(f, "{s}")
    }
}
