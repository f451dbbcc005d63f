//! Resource references - instance vs class, as an exhaustive variant.

/// Domain types that know their resource class.
///
/// The resource class is the stable name operations are declared against
/// (e.g. `"Dummy"`), not a Rust type name.
pub trait ResourceClass {
    /// The resource class this instance belongs to.
    fn resource_class(&self) -> &str;
}

/// A resource as supplied to the converter.
///
/// Either a concrete instance, or a bare class reference when no instance
/// exists (e.g. for collection IRIs). Modeled as a tagged variant so both
/// branches are exhaustive and checked - no runtime type inspection.
#[derive(Debug, Clone, Copy)]
pub enum ResourceRef<'a, T> {
    /// A concrete domain instance.
    Instance(&'a T),
    /// A resource class with no instance at hand.
    Class(&'a str),
}

impl<'a, T> ResourceRef<'a, T> {
    /// Reference a concrete instance.
    pub fn instance(value: &'a T) -> Self {
        Self::Instance(value)
    }

    /// Reference a resource class only.
    pub fn class(class: &'a str) -> Self {
        Self::Class(class)
    }

    /// Get the instance, if one is at hand.
    pub fn as_instance(&self) -> Option<&'a T> {
        match *self {
            Self::Instance(value) => Some(value),
            Self::Class(_) => None,
        }
    }

    /// Check if this is a bare class reference.
    pub const fn is_class(&self) -> bool {
        matches!(self, Self::Class(_))
    }
}

impl<'a, T: ResourceClass> ResourceRef<'a, T> {
    /// The resource class, from the payload or the instance itself.
    pub fn resource_class(&self) -> &'a str {
        match *self {
            Self::Instance(value) => value.resource_class(),
            Self::Class(class) => class,
        }
    }
}
