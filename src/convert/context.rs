//! Per-call resolution context.

use crate::core::IdentifierMap;

/// Context overrides for a single conversion call.
///
/// Only the forward direction consults the overrides; the reverse
/// direction resolves everything from the URL itself.
#[derive(Debug, Clone, Default)]
pub struct ConvertContext {
    /// Pre-supplied identifier mapping, used verbatim instead of codec
    /// extraction. Supports generating IRIs for instances not yet
    /// persisted, and collection sub-resources.
    pub uri_variables: Option<IdentifierMap>,
    /// Infer a collection operation when no explicit operation is given.
    pub force_collection: bool,
}

impl ConvertContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply an explicit identifier mapping.
    pub fn with_uri_variables(mut self, variables: IdentifierMap) -> Self {
        self.uri_variables = Some(variables);
        self
    }

    /// Request collection-operation inference.
    pub fn collection(mut self) -> Self {
        self.force_collection = true;
        self
    }
}
