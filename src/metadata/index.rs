//! Metadata index seam and its in-memory backing.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::{Operation, ResourceMetadata};

// ============================================================================
// MetadataError
// ============================================================================

/// Metadata-index failures
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("no resource metadata declared for class \"{0}\"")]
    NotFound(String),
}

// ============================================================================
// MetadataIndex
// ============================================================================

/// Resolves a resource class to its declared operation list.
///
/// One implementation per backing technology (configuration files,
/// annotations, a static registry); the converter only depends on this
/// trait. Implementations must be safe for concurrent read access.
pub trait MetadataIndex: Send + Sync {
    /// Resolve the metadata declared for a resource class.
    fn resolve(&self, resource_class: &str) -> Result<ResourceMetadata, MetadataError>;
}

// ============================================================================
// StaticMetadataIndex
// ============================================================================

/// In-memory metadata index over a class -> metadata map.
#[derive(Debug, Default)]
pub struct StaticMetadataIndex {
    resources: FxHashMap<String, ResourceMetadata>,
}

impl StaticMetadataIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a resource class with its ordered operations.
    ///
    /// Re-declaring a class replaces its previous operation list.
    pub fn declare(mut self, class: impl Into<String>, operations: Vec<Operation>) -> Self {
        let class = class.into();
        self.resources
            .insert(class.clone(), ResourceMetadata::new(class, operations));
        self
    }

    /// Number of declared resource classes.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Check if no classes are declared.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl MetadataIndex for StaticMetadataIndex {
    fn resolve(&self, resource_class: &str) -> Result<ResourceMetadata, MetadataError> {
        self.resources
            .get(resource_class)
            .cloned()
            .ok_or_else(|| MetadataError::NotFound(resource_class.to_string()))
    }
}
