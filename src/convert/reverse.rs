//! Reverse conversion - IRI to resource instance.

use crate::provider::FetchContext;

use super::{ConvertContext, ConvertError, IriConverter};

impl<T> IriConverter<T> {
    /// Resolve an IRI to exactly one resource instance.
    ///
    /// The URL is matched against the route table, the matched operation
    /// is looked up in the class's metadata, the raw variables are decoded
    /// into fetch-ready identifiers and the instance is retrieved from the
    /// data provider. A URL that matches a collection operation fails even
    /// though matching succeeded: the contract here is "one item".
    ///
    /// `context` is accepted for call-site symmetry with the forward
    /// direction; its overrides only affect IRI generation.
    pub fn iri_to_resource(&self, iri: &str, _context: &ConvertContext) -> Result<T, ConvertError> {
        let matched = self
            .routes
            .match_iri(iri)
            .map_err(|e| ConvertError::resource_not_found(iri, e))?;

        let metadata = self
            .metadata
            .resolve(&matched.resource_class)
            .map_err(|e| ConvertError::resource_not_found(iri, e))?;
        let operation = metadata
            .get(&matched.operation_name)
            .ok_or_else(|| ConvertError::ResourceNotFound {
                iri: iri.to_string(),
                source: None,
            })?;

        if operation.is_collection() {
            return Err(ConvertError::CollectionNotItem {
                iri: iri.to_string(),
            });
        }

        let identifiers = self
            .codec
            .decode(&matched.variables, operation)
            .map_err(|e| ConvertError::resource_not_found(iri, e))?;

        crate::debug!("convert"; "{} -> {} {:?}", iri, matched.operation_name, identifiers);

        let fetch_context = FetchContext::new(iri, matched.operation_name.clone());
        match self.provider.fetch(operation, &identifiers, &fetch_context) {
            Ok(Some(instance)) => Ok(instance),
            Ok(None) => Err(ConvertError::item_not_found(iri, None)),
            Err(e) => Err(ConvertError::item_not_found(iri, Some(e.into()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::super::fakes::{Dummy, FakeCodec, FakeIndex, FakeProvider, FakeRoutes, dummy_metadata};
    use super::*;
    use crate::core::IdentifierMap;
    use crate::metadata::ResourceMetadata;
    use crate::route::RouteMatch;

    fn item_match() -> RouteMatch {
        RouteMatch {
            resource_class: "Dummy".to_string(),
            operation_name: "get".to_string(),
            variables: [("id", json!(1))].into_iter().collect(),
        }
    }

    fn collection_match() -> RouteMatch {
        RouteMatch {
            resource_class: "Dummy".to_string(),
            operation_name: "get_collection".to_string(),
            variables: IdentifierMap::new(),
        }
    }

    fn converter(
        routes: FakeRoutes,
        provider: FakeProvider,
    ) -> (Arc<FakeProvider>, IriConverter<Dummy>) {
        let provider = Arc::new(provider);
        let converter = IriConverter::new(
            Arc::new(FakeIndex::new(dummy_metadata())),
            Arc::new(FakeCodec::passthrough()),
            Arc::new(routes),
            provider.clone(),
        );
        (provider, converter)
    }

    #[test]
    fn test_item_from_iri() {
        let item = Dummy::new(1);
        let (provider, converter) = converter(
            FakeRoutes::matching(item_match()),
            FakeProvider::returning(item.clone()),
        );

        let fetched = converter
            .iri_to_resource("/dummies/1", &ConvertContext::default())
            .unwrap();

        // Identity-preserving passthrough of the provider's instance
        assert_eq!(fetched, item);

        let fetched_calls = provider.fetched.lock().unwrap();
        assert_eq!(fetched_calls.len(), 1);
        let (identifiers, context) = &fetched_calls[0];
        assert_eq!(identifiers.get("id"), Some(&json!(1)));
        assert_eq!(context.iri, "/dummies/1");
        assert_eq!(context.operation_name, "get");
    }

    #[test]
    fn test_no_route_match() {
        let (_, converter) = converter(FakeRoutes::empty(), FakeProvider::absent());

        let err = converter
            .iri_to_resource("/nope", &ConvertContext::default())
            .unwrap_err();

        assert_eq!(err.to_string(), "No route matches \"/nope\".");
    }

    #[test]
    fn test_collection_iri_is_not_an_item() {
        let (_, converter) = converter(
            FakeRoutes::matching(collection_match()),
            FakeProvider::absent(),
        );

        let err = converter
            .iri_to_resource("/dummies", &ConvertContext::default())
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "The iri \"/dummies\" references a collection not an item."
        );
    }

    #[test]
    fn test_absent_item() {
        let (provider, converter) = converter(
            FakeRoutes::matching(item_match()),
            FakeProvider::absent(),
        );

        let err = converter
            .iri_to_resource("/dummies/1", &ConvertContext::default())
            .unwrap_err();

        assert_eq!(err.to_string(), "Item not found for \"/dummies/1\".");
        // The provider was consulted before failing
        assert_eq!(provider.fetched.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_matched_class() {
        let routes = FakeRoutes::matching(RouteMatch {
            resource_class: "Ghost".to_string(),
            operation_name: "get".to_string(),
            variables: IdentifierMap::new(),
        });
        let (_, converter) = converter(routes, FakeProvider::absent());

        let err = converter
            .iri_to_resource("/ghosts/1", &ConvertContext::default())
            .unwrap_err();

        assert!(matches!(err, ConvertError::ResourceNotFound { .. }));
    }

    #[test]
    fn test_unknown_matched_operation_name() {
        let routes = FakeRoutes::matching(RouteMatch {
            resource_class: "Dummy".to_string(),
            operation_name: "renamed".to_string(),
            variables: IdentifierMap::new(),
        });
        let (_, converter) = converter(routes, FakeProvider::absent());

        let err = converter
            .iri_to_resource("/dummies/1", &ConvertContext::default())
            .unwrap_err();

        assert!(matches!(err, ConvertError::ResourceNotFound { .. }));
    }

    #[test]
    fn test_extra_matched_parameters_are_dropped() {
        let routes = FakeRoutes::matching(RouteMatch {
            resource_class: "Dummy".to_string(),
            operation_name: "get".to_string(),
            variables: [("_format", json!("json")), ("id", json!(1))]
                .into_iter()
                .collect(),
        });
        let (provider, converter) = converter(routes, FakeProvider::returning(Dummy::new(1)));

        converter
            .iri_to_resource("/dummies/1", &ConvertContext::default())
            .unwrap();

        let fetched_calls = provider.fetched.lock().unwrap();
        let (identifiers, _) = &fetched_calls[0];
        assert_eq!(identifiers.len(), 1);
        assert!(identifiers.get("_format").is_none());
    }

    #[test]
    fn test_decode_failure_is_resource_not_found() {
        // Matched variables miss the declared `id`
        let routes = FakeRoutes::matching(RouteMatch {
            resource_class: "Dummy".to_string(),
            operation_name: "get".to_string(),
            variables: IdentifierMap::new(),
        });
        let (_, converter) = converter(routes, FakeProvider::absent());

        let err = converter
            .iri_to_resource("/dummies/", &ConvertContext::default())
            .unwrap_err();

        assert!(matches!(err, ConvertError::ResourceNotFound { source: Some(_), .. }));
    }

    #[test]
    fn test_metadata_without_operations() {
        let converter: IriConverter<Dummy> = IriConverter::new(
            Arc::new(FakeIndex::new(ResourceMetadata::new("Dummy", vec![]))),
            Arc::new(FakeCodec::passthrough()),
            Arc::new(FakeRoutes::matching(item_match())),
            Arc::new(FakeProvider::absent()),
        );

        let err = converter
            .iri_to_resource("/dummies/1", &ConvertContext::default())
            .unwrap_err();

        assert!(matches!(err, ConvertError::ResourceNotFound { .. }));
    }
}
