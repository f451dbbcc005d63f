//! Route table trait and match result.

use thiserror::Error;

use crate::core::{IdentifierMap, Iri, ReferenceType};

// ============================================================================
// RouteError
// ============================================================================

/// Route-table failures
#[derive(Debug, Error)]
pub enum RouteError {
    /// The supplied URL does not match any registered route.
    #[error("no route matches \"{0}\"")]
    NoMatch(String),

    /// No route registered under the given operation name.
    #[error("no route named \"{0}\"")]
    UnknownRoute(String),

    /// A template variable had no value in the identifier mapping.
    #[error("missing value for URL variable \"{variable}\" in route \"{route}\"")]
    MissingVariable {
        /// Route (operation) name
        route: String,
        /// The unbound variable
        variable: String,
    },

    /// The requested reference type needs a base URL and none is configured.
    #[error("route \"{0}\" needs a base URL for the requested reference type")]
    NoBaseUrl(String),
}

// ============================================================================
// RouteMatch
// ============================================================================

/// A URL matched back to its route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    /// Resource class the matched route belongs to.
    pub resource_class: String,
    /// Operation name the route was registered under.
    pub operation_name: String,
    /// Raw variable mapping bound from the URL. May contain matched
    /// parameters beyond the operation's identifiers; downstream decoding
    /// keeps only the declared variables.
    pub variables: IdentifierMap,
}

// ============================================================================
// RouteTable
// ============================================================================

/// Generates URLs from operations and matches URLs back to them.
///
/// Implementations must be safe for concurrent read access.
pub trait RouteTable: Send + Sync {
    /// Generate a URL for an operation name, identifier mapping and
    /// reference type. The reference type must be honored verbatim.
    fn generate(
        &self,
        operation_name: &str,
        variables: &IdentifierMap,
        reference: ReferenceType,
    ) -> Result<Iri, RouteError>;

    /// Match a URL string back to an operation name plus raw variable
    /// mapping. `RouteError::NoMatch` signals an invalid path or unknown
    /// route.
    fn match_iri(&self, iri: &str) -> Result<RouteMatch, RouteError>;
}
