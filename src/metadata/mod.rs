//! Resource metadata - declared operations and the index seam.
//!
//! Every resource class declares an ordered list of [`Operation`]s at load
//! time. The converter consults this module through the [`MetadataIndex`]
//! trait; [`StaticMetadataIndex`] is the in-memory backing.
//!
//! Operation order is a contract: without an explicit operation the
//! converter selects the first declared operation matching the wanted
//! item/collection semantics.

mod index;
mod operation;

pub use index::{MetadataError, MetadataIndex, StaticMetadataIndex};
pub use operation::{Operation, ResourceMetadata, UriVariable};
