//! Identifier mapping - ordered variable name -> value pairs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered mapping from URL-variable name to scalar or composite value.
///
/// Produced by the identifier codec from an instance (URL generation) and
/// by the route table from a matched URL (later decoded by the codec).
/// Iteration order is insertion order (`serde_json` with `preserve_order`),
/// so declaration order survives the round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentifierMap(Map<String, Value>);

impl IdentifierMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert a variable. Returns the previous value, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Get a variable's value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Check whether a variable is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Render a value the way it appears inside a URL segment.
    ///
    /// Strings render bare (no quotes); everything else uses its JSON form.
    pub fn value_as_segment(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for IdentifierMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a IdentifierMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
