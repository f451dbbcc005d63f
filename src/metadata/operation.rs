//! Operation descriptors.

use serde::{Deserialize, Serialize};

// ============================================================================
// UriVariable
// ============================================================================

/// Link descriptor for one URL-template variable.
///
/// Describes where the variable's value comes from when extracting
/// identifiers from an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriVariable {
    /// Property on the instance the value is read from.
    /// Defaults to the variable name itself when `None`.
    pub property: Option<String>,
    /// Resource class the variable originates from (sub-resource links).
    pub from_class: Option<String>,
}

impl UriVariable {
    /// A variable read from the identically-named instance property.
    pub fn new() -> Self {
        Self::default()
    }

    /// A variable read from a specific instance property.
    pub fn from_property(property: impl Into<String>) -> Self {
        Self {
            property: Some(property.into()),
            from_class: None,
        }
    }

    /// Set the originating resource class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.from_class = Some(class.into());
        self
    }

    /// Resolve the source property for a variable of the given name.
    pub fn property_for<'a>(&'a self, variable: &'a str) -> &'a str {
        self.property.as_deref().unwrap_or(variable)
    }
}

// ============================================================================
// Operation
// ============================================================================

/// A named, metadata-declared action bound to a resource class.
///
/// Immutable once declared; the converter treats operations as read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation name, unique within the resource's operation set.
    /// `None` means the operation still needs inference.
    name: Option<String>,
    /// Target resource class.
    resource_class: String,
    /// Ordered URL-variable declarations (name -> link descriptor).
    uri_variables: Vec<(String, UriVariable)>,
    /// Collection semantics (vs item semantics).
    collection: bool,
    /// Eligible for URL generation.
    generable: bool,
}

impl Operation {
    /// Declare an item operation for a resource class.
    pub fn item(resource_class: impl Into<String>) -> Self {
        Self {
            name: None,
            resource_class: resource_class.into(),
            uri_variables: Vec::new(),
            collection: false,
            generable: true,
        }
    }

    /// Declare a collection operation for a resource class.
    pub fn collection(resource_class: impl Into<String>) -> Self {
        Self {
            collection: true,
            ..Self::item(resource_class)
        }
    }

    /// Set the operation name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare a URL variable. Declaration order is preserved.
    pub fn with_uri_variable(mut self, name: impl Into<String>, link: UriVariable) -> Self {
        self.uri_variables.push((name.into(), link));
        self
    }

    /// Mark the operation ineligible for URL generation.
    pub fn not_generable(mut self) -> Self {
        self.generable = false;
        self
    }

    /// The operation name, if declared.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the operation carries a non-empty name.
    pub fn is_named(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// The target resource class.
    pub fn resource_class(&self) -> &str {
        &self.resource_class
    }

    /// Whether this operation has collection semantics.
    pub fn is_collection(&self) -> bool {
        self.collection
    }

    /// Whether this operation is eligible for URL generation.
    pub fn is_generable(&self) -> bool {
        self.generable
    }

    /// Declared URL variables in declaration order.
    pub fn uri_variables(&self) -> impl Iterator<Item = (&str, &UriVariable)> {
        self.uri_variables
            .iter()
            .map(|(name, link)| (name.as_str(), link))
    }

    /// Declared variable names in declaration order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.uri_variables.iter().map(|(name, _)| name.as_str())
    }
}

// ============================================================================
// ResourceMetadata
// ============================================================================

/// The ordered operation list declared for one resource class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceMetadata {
    /// The resource class these operations belong to.
    class: String,
    /// Declared operations, in declaration order.
    operations: Vec<Operation>,
}

impl ResourceMetadata {
    /// Create metadata for a resource class.
    pub fn new(class: impl Into<String>, operations: Vec<Operation>) -> Self {
        Self {
            class: class.into(),
            operations,
        }
    }

    /// The resource class.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Declared operations in declaration order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Look up an operation by name.
    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|op| op.name() == Some(name))
    }
}
