//! Identifier codec seam - instance <-> identifier mapping.
//!
//! Extraction turns an instance into the variable mapping an operation's
//! URL template needs; decoding turns the raw mapping bound from a matched
//! URL into the fetch-ready mapping, scoped to the operation's declared
//! variables.

mod codec;
mod serde_codec;

pub use codec::{CodecError, IdentifierCodec};
pub use serde_codec::SerdeCodec;
