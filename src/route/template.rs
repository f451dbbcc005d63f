//! In-memory route table over `{var}` path templates.

use rustc_hash::FxHashMap;
use url::Url;

use crate::core::{IdentifierMap, Iri, ReferenceType};

use super::{RouteError, RouteMatch, RouteTable};

// ============================================================================
// Template segments
// ============================================================================

/// One segment of a parsed path template
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Fixed text, matched verbatim
    Literal(String),
    /// `{var}` placeholder, binds one segment
    Variable(String),
}

fn parse_template(template: &str) -> Vec<Segment> {
    template
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
                .map_or_else(
                    || Segment::Literal(s.to_string()),
                    |name| Segment::Variable(name.to_string()),
                )
        })
        .collect()
}

// ============================================================================
// TemplateRouteTable
// ============================================================================

/// A registered route
#[derive(Debug, Clone)]
struct Route {
    name: String,
    resource_class: String,
    segments: Vec<Segment>,
}

/// In-memory route table.
///
/// Routes are registered as `(operation name, resource class, template)`
/// triples, e.g. `("get", "Dummy", "/dummies/{id}")`. Matching tries
/// routes in registration order; the first hit wins.
#[derive(Debug, Default)]
pub struct TemplateRouteTable {
    routes: Vec<Route>,
    by_name: FxHashMap<String, usize>,
    base_url: Option<Url>,
}

impl TemplateRouteTable {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL used for absolute-URL and network-path generation.
    pub fn with_base_url(mut self, base: Url) -> Self {
        self.base_url = Some(base);
        self
    }

    /// Register a route. Re-registering a name replaces the old template
    /// for generation but keeps match order by first registration.
    pub fn route(
        mut self,
        name: impl Into<String>,
        resource_class: impl Into<String>,
        template: &str,
    ) -> Self {
        let name = name.into();
        let route = Route {
            name: name.clone(),
            resource_class: resource_class.into(),
            segments: parse_template(template),
        };
        if let Some(&idx) = self.by_name.get(&name) {
            self.routes[idx] = route;
        } else {
            self.by_name.insert(name, self.routes.len());
            self.routes.push(route);
        }
        self
    }

    /// Render the decoded path for a route from an identifier mapping.
    fn render_path(route: &Route, variables: &IdentifierMap) -> Result<String, RouteError> {
        let mut parts = Vec::with_capacity(route.segments.len());
        for segment in &route.segments {
            match segment {
                Segment::Literal(text) => parts.push(text.clone()),
                Segment::Variable(name) => {
                    let value =
                        variables
                            .get(name)
                            .ok_or_else(|| RouteError::MissingVariable {
                                route: route.name.clone(),
                                variable: name.clone(),
                            })?;
                    parts.push(IdentifierMap::value_as_segment(value));
                }
            }
        }
        Ok(format!("/{}", parts.join("/")))
    }
}

impl RouteTable for TemplateRouteTable {
    fn generate(
        &self,
        operation_name: &str,
        variables: &IdentifierMap,
        reference: ReferenceType,
    ) -> Result<Iri, RouteError> {
        let route = self
            .by_name
            .get(operation_name)
            .map(|&idx| &self.routes[idx])
            .ok_or_else(|| RouteError::UnknownRoute(operation_name.to_string()))?;

        let path = Self::render_path(route, variables)?;

        match reference {
            ReferenceType::AbsPath => Ok(Iri::from_path(&path)),
            ReferenceType::RelPath => Ok(Iri::relative(&path)),
            ReferenceType::AbsUrl => {
                let base = self
                    .base_url
                    .as_ref()
                    .ok_or_else(|| RouteError::NoBaseUrl(route.name.clone()))?;
                // Keep any path component of the base URL
                let prefix = base.as_str().trim_end_matches('/');
                Ok(Iri::from_path(&format!("{prefix}{path}")))
            }
            ReferenceType::NetworkPath => {
                let base = self
                    .base_url
                    .as_ref()
                    .ok_or_else(|| RouteError::NoBaseUrl(route.name.clone()))?;
                let prefix = base.as_str().trim_end_matches('/');
                let authority = prefix
                    .strip_prefix(base.scheme())
                    .and_then(|s| s.strip_prefix(':'))
                    .unwrap_or(prefix);
                Ok(Iri::from_path(&format!("{authority}{path}")))
            }
        }
    }

    fn match_iri(&self, iri: &str) -> Result<RouteMatch, RouteError> {
        // Reduce absolute and network forms to their path before matching.
        let decoded = Iri::from_raw(iri);
        let s = decoded.as_str();
        let path = if let Some(rest) = s.strip_prefix("//") {
            rest.find('/').map_or("/", |i| &rest[i..])
        } else if let Some(pos) = s.find("://") {
            let rest = &s[pos + 3..];
            rest.find('/').map_or("/", |i| &rest[i..])
        } else {
            s
        };

        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        for route in &self.routes {
            if let Some(variables) = bind(&route.segments, &segments) {
                return Ok(RouteMatch {
                    resource_class: route.resource_class.clone(),
                    operation_name: route.name.clone(),
                    variables,
                });
            }
        }

        Err(RouteError::NoMatch(iri.to_string()))
    }
}

/// Try to bind URL segments against template segments.
fn bind(template: &[Segment], segments: &[&str]) -> Option<IdentifierMap> {
    if template.len() != segments.len() {
        return None;
    }

    let mut variables = IdentifierMap::new();
    for (expected, actual) in template.iter().zip(segments) {
        match expected {
            Segment::Literal(text) => {
                if text != actual {
                    return None;
                }
            }
            Segment::Variable(name) => {
                variables.insert(name.clone(), (*actual).to_string());
            }
        }
    }
    Some(variables)
}
