//! Operation resolution.
//!
//! Given a resource class and an optional (possibly partially-specified)
//! operation, produce the concrete operation to use. Selection over the
//! declared list is an ordered scan with early return, so operation order
//! is a visible and testable contract.

use thiserror::Error;

use crate::metadata::{MetadataError, Operation};

use super::IriConverter;

/// Operation-resolution failures
#[derive(Debug, Error)]
pub enum OperationError {
    /// No usable operation declared for the resource class.
    #[error("no usable operation declared for resource class \"{0}\"")]
    Unresolvable(String),

    /// The metadata index does not know the resource class.
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

impl<T> IriConverter<T> {
    /// Resolve the concrete operation for a resource class.
    ///
    /// An explicit operation with a non-empty name is used as-is, with no
    /// index lookup - callers that already hold a fully-specified
    /// operation pay no lookup cost and their choice is never overridden.
    /// Otherwise the class's declared operations are scanned in order for
    /// the first named, generable operation with the wanted item or
    /// collection semantics.
    pub(crate) fn resolve_operation(
        &self,
        resource_class: &str,
        requested: Option<&Operation>,
        force_collection: bool,
    ) -> Result<Operation, OperationError> {
        if let Some(operation) = requested
            && operation.is_named()
        {
            return Ok(operation.clone());
        }

        let want_collection = requested.map_or(force_collection, Operation::is_collection);

        let metadata = self.metadata.resolve(resource_class)?;
        for operation in metadata.operations() {
            if operation.is_named()
                && operation.is_generable()
                && operation.is_collection() == want_collection
            {
                crate::debug!("convert"; "resolved operation {} for {}",
                    operation.name().unwrap_or_default(), resource_class);
                return Ok(operation.clone());
            }
        }

        Err(OperationError::Unresolvable(resource_class.to_string()))
    }
}
