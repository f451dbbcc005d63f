//! Route table seam - operation name + variables <-> URL string.
//!
//! The converter only depends on the [`RouteTable`] trait;
//! [`TemplateRouteTable`] is the in-memory backing over `{var}` path
//! templates.

mod table;
mod template;

pub use table::{RouteError, RouteMatch, RouteTable};
pub use template::TemplateRouteTable;
