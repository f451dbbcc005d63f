//! Serde-backed identifier codec.

use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use crate::core::IdentifierMap;
use crate::metadata::Operation;

use super::codec::{CodecError, IdentifierCodec, operation_label};

/// Identifier codec for any `Serialize` instance type.
///
/// Extraction serializes the instance to a JSON object and reads each
/// declared URL variable's source property out of it. This is the Rust
/// stand-in for property reflection: the instance's serde view is its
/// identifier surface.
#[derive(Debug)]
pub struct SerdeCodec<T> {
    _marker: PhantomData<fn(&T)>,
}

impl<T> SerdeCodec<T> {
    /// Create a codec.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SerdeCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize + Send + Sync> IdentifierCodec<T> for SerdeCodec<T> {
    fn extract(&self, instance: &T, operation: &Operation) -> Result<IdentifierMap, CodecError> {
        let label = operation_label(operation);

        let value = serde_json::to_value(instance).map_err(|e| CodecError::Malformed {
            operation: label.clone(),
            detail: e.to_string(),
        })?;
        let object = value.as_object().ok_or_else(|| CodecError::Malformed {
            operation: label.clone(),
            detail: "instance does not serialize to an object".to_string(),
        })?;

        let mut identifiers = IdentifierMap::new();
        for (name, link) in operation.uri_variables() {
            let property = link.property_for(name);
            match object.get(property) {
                Some(Value::Null) | None => {
                    return Err(CodecError::Missing {
                        operation: label,
                        variable: name.to_string(),
                    });
                }
                Some(value) => {
                    identifiers.insert(name, value.clone());
                }
            }
        }
        Ok(identifiers)
    }

    fn decode(
        &self,
        raw: &IdentifierMap,
        operation: &Operation,
    ) -> Result<IdentifierMap, CodecError> {
        let mut identifiers = IdentifierMap::new();
        for name in operation.variable_names() {
            let value = raw.get(name).ok_or_else(|| CodecError::Missing {
                operation: operation_label(operation),
                variable: name.to_string(),
            })?;
            identifiers.insert(name, value.clone());
        }
        Ok(identifiers)
    }
}
