//! Forward conversion - resource to IRI.

use crate::core::{Iri, ReferenceType, ResourceClass, ResourceRef};
use crate::metadata::Operation;

use super::error::Cause;
use super::{ConvertContext, ConvertError, IriConverter};

impl<T: ResourceClass> IriConverter<T> {
    /// Convert a resource (instance or class reference) into its IRI.
    ///
    /// An explicit `reference` is handed to the route table verbatim;
    /// `None` falls back to the configured default reference type. An
    /// explicit named `operation` is used as-is; otherwise one is inferred
    /// from the class's declared operations. Every failure along the way
    /// surfaces as [`ConvertError::IriGeneration`] naming the resource
    /// class, so callers have one error kind to handle regardless of which
    /// step failed.
    pub fn resource_to_iri(
        &self,
        resource: ResourceRef<'_, T>,
        reference: Option<ReferenceType>,
        operation: Option<&Operation>,
        context: &ConvertContext,
    ) -> Result<Iri, ConvertError> {
        let reference = reference.unwrap_or(self.config.reference_type);
        let class = resource.resource_class();

        let operation = self
            .resolve_operation(class, operation, context.force_collection)
            .map_err(|e| ConvertError::iri_generation(class, e))?;

        let identifiers = self
            .identifiers_for(&resource, &operation, context)
            .map_err(|e| ConvertError::iri_generation(class, e))?;

        let name = operation.name().unwrap_or_default();
        let iri = self
            .routes
            .generate(name, &identifiers, reference)
            .map_err(|e| ConvertError::iri_generation(class, e))?;

        crate::debug!("convert"; "{} -> {}", class, iri);
        Ok(iri)
    }

    /// Determine the identifier mapping for URL generation.
    ///
    /// Context-supplied `uri_variables` win verbatim. Collection
    /// operations fall back to the configured policy; item operations
    /// extract from the instance via the codec.
    fn identifiers_for(
        &self,
        resource: &ResourceRef<'_, T>,
        operation: &Operation,
        context: &ConvertContext,
    ) -> Result<crate::core::IdentifierMap, Cause> {
        use crate::config::CollectionIdentifiers;
        use crate::core::IdentifierMap;

        if let Some(variables) = &context.uri_variables {
            return Ok(variables.clone());
        }

        if operation.is_collection() {
            return match (self.config.collection_identifiers, resource.as_instance()) {
                (CollectionIdentifiers::FromInstance, Some(instance)) => {
                    Ok(self.codec.extract(instance, operation)?)
                }
                _ => Ok(IdentifierMap::new()),
            };
        }

        match resource.as_instance() {
            Some(instance) => Ok(self.codec.extract(instance, operation)?),
            None => Err("cannot extract identifiers from a bare class reference".into()),
        }
    }
}
