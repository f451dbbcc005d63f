//! Hand-rolled collaborator fakes with call recording.
//!
//! Shared by the converter test modules. Counters use atomics and records
//! use mutexes so the fakes satisfy the seams' `Send + Sync` bounds.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;
use serde_json::json;

use crate::core::{IdentifierMap, Iri, ReferenceType, ResourceClass};
use crate::identifier::{CodecError, IdentifierCodec};
use crate::metadata::{
    MetadataError, MetadataIndex, Operation, ResourceMetadata, UriVariable,
};
use crate::provider::{DataProvider, FetchContext, ProviderError};
use crate::route::{RouteError, RouteMatch, RouteTable};

// ============================================================================
// Test resource
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Dummy {
    pub id: u64,
    pub name: String,
}

impl Dummy {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            name: format!("dummy {id}"),
        }
    }
}

impl ResourceClass for Dummy {
    fn resource_class(&self) -> &str {
        "Dummy"
    }
}

/// Standard Dummy metadata: item operation `get` first, then collection
/// operation `get_collection`.
pub(crate) fn dummy_metadata() -> ResourceMetadata {
    ResourceMetadata::new(
        "Dummy",
        vec![
            Operation::item("Dummy")
                .named("get")
                .with_uri_variable("id", UriVariable::new()),
            Operation::collection("Dummy").named("get_collection"),
        ],
    )
}

// ============================================================================
// FakeIndex
// ============================================================================

pub(crate) struct FakeIndex {
    metadata: Option<ResourceMetadata>,
    pub calls: AtomicUsize,
}

impl FakeIndex {
    pub fn new(metadata: ResourceMetadata) -> Self {
        Self {
            metadata: Some(metadata),
            calls: AtomicUsize::new(0),
        }
    }

    /// An index that knows no classes.
    pub fn empty() -> Self {
        Self {
            metadata: None,
            calls: AtomicUsize::new(0),
        }
    }
}

impl MetadataIndex for FakeIndex {
    fn resolve(&self, resource_class: &str) -> Result<ResourceMetadata, MetadataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.metadata
            .as_ref()
            .filter(|m| m.class() == resource_class)
            .cloned()
            .ok_or_else(|| MetadataError::NotFound(resource_class.to_string()))
    }
}

// ============================================================================
// FakeCodec
// ============================================================================

pub(crate) enum CodecBehavior {
    /// Extract `{"id": <instance id>}`; decode scoped to declared vars.
    Passthrough,
    /// Every extraction fails as malformed.
    FailMalformed,
}

pub(crate) struct FakeCodec {
    behavior: CodecBehavior,
    pub extract_calls: AtomicUsize,
}

impl FakeCodec {
    pub fn passthrough() -> Self {
        Self {
            behavior: CodecBehavior::Passthrough,
            extract_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            behavior: CodecBehavior::FailMalformed,
            extract_calls: AtomicUsize::new(0),
        }
    }
}

impl IdentifierCodec<Dummy> for FakeCodec {
    fn extract(&self, instance: &Dummy, operation: &Operation) -> Result<IdentifierMap, CodecError> {
        self.extract_calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            CodecBehavior::Passthrough => {
                Ok([("id", json!(instance.id))].into_iter().collect())
            }
            CodecBehavior::FailMalformed => Err(CodecError::Malformed {
                operation: operation.name().unwrap_or("?").to_string(),
                detail: "bad identifiers".to_string(),
            }),
        }
    }

    fn decode(
        &self,
        raw: &IdentifierMap,
        operation: &Operation,
    ) -> Result<IdentifierMap, CodecError> {
        let mut identifiers = IdentifierMap::new();
        for name in operation.variable_names() {
            let value = raw.get(name).ok_or_else(|| CodecError::Missing {
                operation: operation.name().unwrap_or("?").to_string(),
                variable: name.to_string(),
            })?;
            identifiers.insert(name, value.clone());
        }
        Ok(identifiers)
    }
}

// ============================================================================
// FakeRoutes
// ============================================================================

pub(crate) struct FakeRoutes {
    generate_result: Option<Iri>,
    match_result: Option<RouteMatch>,
    /// Recorded generate calls: (operation name, variables, reference type)
    pub generated: Mutex<Vec<(String, IdentifierMap, ReferenceType)>>,
}

impl FakeRoutes {
    /// A table that generates nothing and matches nothing.
    pub fn empty() -> Self {
        Self {
            generate_result: None,
            match_result: None,
            generated: Mutex::new(Vec::new()),
        }
    }

    /// A table whose generate always yields `iri`.
    pub fn generating(iri: &str) -> Self {
        Self {
            generate_result: Some(Iri::from_path(iri)),
            ..Self::empty()
        }
    }

    /// A table whose match always yields the given result.
    pub fn matching(result: RouteMatch) -> Self {
        Self {
            match_result: Some(result),
            ..Self::empty()
        }
    }
}

impl RouteTable for FakeRoutes {
    fn generate(
        &self,
        operation_name: &str,
        variables: &IdentifierMap,
        reference: ReferenceType,
    ) -> Result<Iri, RouteError> {
        self.generated.lock().unwrap().push((
            operation_name.to_string(),
            variables.clone(),
            reference,
        ));
        self.generate_result
            .clone()
            .ok_or_else(|| RouteError::UnknownRoute(operation_name.to_string()))
    }

    fn match_iri(&self, iri: &str) -> Result<RouteMatch, RouteError> {
        self.match_result
            .clone()
            .ok_or_else(|| RouteError::NoMatch(iri.to_string()))
    }
}

// ============================================================================
// FakeProvider
// ============================================================================

pub(crate) struct FakeProvider {
    item: Option<Dummy>,
    /// Recorded fetch calls: (identifiers, context)
    pub fetched: Mutex<Vec<(IdentifierMap, FetchContext)>>,
}

impl FakeProvider {
    pub fn returning(item: Dummy) -> Self {
        Self {
            item: Some(item),
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn absent() -> Self {
        Self {
            item: None,
            fetched: Mutex::new(Vec::new()),
        }
    }
}

impl DataProvider<Dummy> for FakeProvider {
    fn fetch(
        &self,
        _operation: &Operation,
        identifiers: &IdentifierMap,
        context: &FetchContext,
    ) -> Result<Option<Dummy>, ProviderError> {
        self.fetched
            .lock()
            .unwrap()
            .push((identifiers.clone(), context.clone()));
        Ok(self.item.clone())
    }
}
