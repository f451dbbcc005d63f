//! iri-convert - bidirectional IRI <-> resource resolution.
//!
//! This crate converts in-memory domain resource instances into the
//! canonical URL strings (IRIs) that identify them over HTTP, and back.
//! It unifies four independently-evolving seams - route generation,
//! resource metadata, identifier extraction/encoding, and data retrieval -
//! into one operation-aware lookup with strict error semantics.
//!
//! # Architecture
//!
//! ```text
//! resource_to_iri:  resolve operation -> extract identifiers -> generate URL
//! iri_to_resource:  match URL -> resolve operation -> decode ids -> fetch
//! ```
//!
//! The four collaborators are trait seams injected at construction:
//!
//! - [`MetadataIndex`]: resource class -> ordered operation list
//! - [`IdentifierCodec`]: instance <-> identifier mapping
//! - [`RouteTable`]: operation + variables <-> URL string
//! - [`DataProvider`]: operation + identifiers -> instance
//!
//! One in-memory implementation ships per seam ([`StaticMetadataIndex`],
//! [`SerdeCodec`], [`TemplateRouteTable`]) so the converter is usable
//! without an external framework.
//!
//! # Usage
//!
//! ```ignore
//! let converter = IriConverter::new(index, codec, routes, provider);
//!
//! let iri = converter.resource_to_iri(
//!     ResourceRef::instance(&dummy),
//!     Some(ReferenceType::AbsPath),
//!     None,
//!     &ConvertContext::default(),
//! )?;
//!
//! let dummy: Dummy = converter.iri_to_resource("/dummies/1", &ConvertContext::default())?;
//! ```

pub mod config;
pub mod convert;
pub mod core;
pub mod identifier;
pub mod logger;
pub mod metadata;
pub mod provider;
pub mod route;

pub use crate::config::{CollectionIdentifiers, ConfigError, ConvertConfig};
pub use crate::convert::{ConvertContext, ConvertError, IriConverter, OperationError};
pub use crate::core::{IdentifierMap, Iri, ReferenceType, ResourceClass, ResourceRef};
pub use crate::identifier::{CodecError, IdentifierCodec, SerdeCodec};
pub use crate::metadata::{
    MetadataError, MetadataIndex, Operation, ResourceMetadata, StaticMetadataIndex, UriVariable,
};
pub use crate::provider::{DataProvider, FetchContext, ProviderError};
pub use crate::route::{RouteError, RouteMatch, RouteTable, TemplateRouteTable};
