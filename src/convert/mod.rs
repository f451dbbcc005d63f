//! IRI resolution core.
//!
//! [`IriConverter`] orchestrates the four collaborator seams into the two
//! exposed operations:
//!
//! - [`IriConverter::resource_to_iri`]: resolve operation -> extract
//!   identifiers -> generate URL
//! - [`IriConverter::iri_to_resource`]: match URL -> resolve operation ->
//!   decode identifiers -> fetch instance
//!
//! The converter is stateless between calls and performs a small, bounded
//! sequence of collaborator calls per invocation; all failures are
//! synchronous and single-attempt.

mod context;
mod error;
mod forward;
mod operation;
mod reverse;

#[cfg(test)]
pub(crate) mod fakes;

pub use context::ConvertContext;
pub use error::ConvertError;
pub use operation::OperationError;

use std::sync::Arc;

use crate::config::ConvertConfig;
use crate::identifier::IdentifierCodec;
use crate::metadata::MetadataIndex;
use crate::provider::DataProvider;
use crate::route::RouteTable;

/// Bidirectional resource <-> IRI converter.
///
/// Holds no mutable state of its own; safe to share across threads when
/// the injected collaborators allow concurrent reads (their `Send + Sync`
/// bounds enforce this).
pub struct IriConverter<T> {
    pub(crate) metadata: Arc<dyn MetadataIndex>,
    pub(crate) codec: Arc<dyn IdentifierCodec<T>>,
    pub(crate) routes: Arc<dyn RouteTable>,
    pub(crate) provider: Arc<dyn DataProvider<T>>,
    pub(crate) config: ConvertConfig,
}

impl<T> IriConverter<T> {
    /// Create a converter over the four collaborator seams, with default
    /// configuration.
    pub fn new(
        metadata: Arc<dyn MetadataIndex>,
        codec: Arc<dyn IdentifierCodec<T>>,
        routes: Arc<dyn RouteTable>,
        provider: Arc<dyn DataProvider<T>>,
    ) -> Self {
        Self {
            metadata,
            codec,
            routes,
            provider,
            config: ConvertConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ConvertConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }
}
