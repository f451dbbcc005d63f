//! Data provider seam - operation + identifiers -> instance.

use thiserror::Error;

use crate::core::{IdentifierMap, Iri};
use crate::metadata::Operation;

// ============================================================================
// ProviderError
// ============================================================================

/// Data-provider failures
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The backing store could not serve the lookup.
    #[error("provider failed for operation \"{operation}\": {detail}")]
    Backend {
        /// Operation name
        operation: String,
        /// What went wrong
        detail: String,
    },
}

// ============================================================================
// FetchContext
// ============================================================================

/// Per-fetch context passed to the data provider.
///
/// Carries at least the original IRI for diagnostics; timeout and
/// cancellation semantics belong to the provider itself.
#[derive(Debug, Clone)]
pub struct FetchContext {
    /// The IRI the lookup originated from.
    pub iri: Iri,
    /// Name of the resolved operation.
    pub operation_name: String,
}

impl FetchContext {
    /// Create a fetch context for an IRI and operation.
    pub fn new(iri: impl Into<Iri>, operation_name: impl Into<String>) -> Self {
        Self {
            iri: iri.into(),
            operation_name: operation_name.into(),
        }
    }
}

// ============================================================================
// DataProvider
// ============================================================================

/// Retrieves resource instances for resolved identifiers.
///
/// `Ok(None)` signals absence; errors signal the store itself failed.
/// Implementations must be safe for concurrent read access.
pub trait DataProvider<T>: Send + Sync {
    /// Fetch the instance addressed by the decoded identifiers.
    fn fetch(
        &self,
        operation: &Operation,
        identifiers: &IdentifierMap,
        context: &FetchContext,
    ) -> Result<Option<T>, ProviderError>;
}
