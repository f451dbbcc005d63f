//! Core types - pure abstractions shared across the codebase.

mod identifiers;
mod iri;
mod reference;
mod resource;

pub use identifiers::IdentifierMap;
pub use iri::Iri;
pub use reference::ReferenceType;
pub use resource::{ResourceClass, ResourceRef};
