//! Identifier codec trait and errors.

use thiserror::Error;

use crate::core::IdentifierMap;
use crate::metadata::Operation;

// ============================================================================
// CodecError
// ============================================================================

/// Identifier extraction/decoding failures
#[derive(Debug, Error)]
pub enum CodecError {
    /// The instance cannot yield identifiers in the shape the operation
    /// declares.
    #[error("malformed identifiers for operation \"{operation}\": {detail}")]
    Malformed {
        /// Operation name (or resource class when unnamed)
        operation: String,
        /// What was wrong
        detail: String,
    },

    /// A declared URL variable has no value.
    #[error("missing identifier \"{variable}\" for operation \"{operation}\"")]
    Missing {
        /// Operation name (or resource class when unnamed)
        operation: String,
        /// The absent variable
        variable: String,
    },
}

// ============================================================================
// IdentifierCodec
// ============================================================================

/// Extracts and decodes identifier mappings for an operation.
///
/// Implementations must be safe for concurrent read access.
pub trait IdentifierCodec<T>: Send + Sync {
    /// Extract the identifier mapping for `operation` from an instance.
    fn extract(&self, instance: &T, operation: &Operation) -> Result<IdentifierMap, CodecError>;

    /// Decode a raw mapping bound from a matched URL into the fetch-ready
    /// mapping. The result contains exactly the variables the operation
    /// declares, in declaration order; extra raw keys are dropped.
    fn decode(&self, raw: &IdentifierMap, operation: &Operation)
    -> Result<IdentifierMap, CodecError>;
}

/// Label an operation for codec diagnostics.
pub(crate) fn operation_label(operation: &Operation) -> String {
    operation
        .name()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| operation.resource_class())
        .to_string()
}
