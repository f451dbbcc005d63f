//! Converter error taxonomy.
//!
//! The four variants of [`ConvertError`] are the only failures callers of
//! the converter see; collaborator errors are preserved as sources but
//! never cross the boundary unwrapped.

use thiserror::Error;

/// Boxed collaborator error kept as a cause.
pub type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Conversion failures
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Forward-direction failure: unresolvable operation, identifier
    /// extraction failure, or route generation failure.
    #[error("Unable to generate an IRI for the item of type \"{class}\"")]
    IriGeneration {
        /// The resource class an IRI was requested for
        class: String,
        #[source]
        source: Cause,
    },

    /// The supplied URL does not match any known route, or the matched
    /// route no longer resolves to a usable operation.
    #[error("No route matches \"{iri}\".")]
    ResourceNotFound {
        /// The offending IRI
        iri: String,
        #[source]
        source: Option<Cause>,
    },

    /// The matched URL identifies a collection operation when an item was
    /// required.
    #[error("The iri \"{iri}\" references a collection not an item.")]
    CollectionNotItem {
        /// The offending IRI
        iri: String,
    },

    /// The data provider returned no instance for otherwise-valid,
    /// resolved identifiers.
    #[error("Item not found for \"{iri}\".")]
    ItemNotFound {
        /// The offending IRI
        iri: String,
        #[source]
        source: Option<Cause>,
    },
}

impl ConvertError {
    /// Forward-direction failure for a resource class, wrapping its cause.
    pub(crate) fn iri_generation(class: &str, cause: impl Into<Cause>) -> Self {
        Self::IriGeneration {
            class: class.to_string(),
            source: cause.into(),
        }
    }

    /// Reverse-direction route/metadata failure for an IRI.
    pub(crate) fn resource_not_found(iri: &str, cause: impl Into<Cause>) -> Self {
        Self::ResourceNotFound {
            iri: iri.to_string(),
            source: Some(cause.into()),
        }
    }

    /// Absent item for an IRI.
    pub(crate) fn item_not_found(iri: &str, cause: Option<Cause>) -> Self {
        Self::ItemNotFound {
            iri: iri.to_string(),
            source: cause,
        }
    }
}
