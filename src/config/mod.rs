//! Converter configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ReferenceType;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),
}

// ============================================================================
// CollectionIdentifiers
// ============================================================================

/// How a collection IRI gets its identifier mapping when the caller
/// supplies no explicit `uri_variables`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionIdentifiers {
    /// Use an empty mapping (plain `/dummies`-style collections).
    #[default]
    None,
    /// Extract from the instance when one is at hand (sub-resource
    /// collections like `/dummies/1/foo`); class references still get an
    /// empty mapping.
    FromInstance,
}

// ============================================================================
// ConvertConfig
// ============================================================================

/// Converter configuration.
///
/// All fields have defaults; a missing config means default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Default reference type when the caller does not pick one.
    pub reference_type: ReferenceType,
    /// Identifier source for collection IRIs without explicit variables.
    pub collection_identifiers: CollectionIdentifiers,
}

impl ConvertConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&content)
    }
}
