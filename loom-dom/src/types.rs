//! Type references usable anywhere in a declaration tree.
//!
//! A [`TypeReference`] is resolved to a [`CodeTypeReference`] during
//! lowering. It can name a type by string, wrap an externally supplied
//! host-type handle, or point at a type declared in the tree itself.

use std::{fmt, sync::Arc};

use crate::target::CodeTypeReference;

/// An externally supplied type known to the host environment.
///
/// The core never inspects a host type beyond these operations.
pub trait HostType: fmt::Debug + Send + Sync {
    /// Short name (e.g., "Boolean").
    fn name(&self) -> &str;

    /// Fully qualified name (e.g., "System.Boolean").
    fn full_name(&self) -> &str {
        self.name()
    }

    /// Resolve to a target type reference.
    fn type_reference(&self) -> CodeTypeReference {
        CodeTypeReference::new(self.full_name())
    }
}

/// Shared handle to a [`HostType`].
///
/// Two handles are equal when their fully qualified names are equal.
#[derive(Clone)]
pub struct HostTypeHandle(Arc<dyn HostType>);

impl HostTypeHandle {
    /// Wrap a host type.
    pub fn new(host: impl HostType + 'static) -> Self {
        Self(Arc::new(host))
    }

    /// Short name.
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Fully qualified name.
    pub fn full_name(&self) -> &str {
        self.0.full_name()
    }

    /// Resolve to a target type reference.
    pub fn type_reference(&self) -> CodeTypeReference {
        self.0.type_reference()
    }
}

impl fmt::Debug for HostTypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HostTypeHandle")
            .field(&self.full_name())
            .finish()
    }
}

impl PartialEq for HostTypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.full_name() == other.full_name()
    }
}

impl Eq for HostTypeHandle {}

/// Well-known framework types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemType {
    name: &'static str,
    full_name: &'static str,
}

impl SystemType {
    pub const BOOLEAN: Self = Self::new("Boolean", "System.Boolean");
    pub const INT32: Self = Self::new("Int32", "System.Int32");
    pub const STRING: Self = Self::new("String", "System.String");
    pub const OBJECT: Self = Self::new("Object", "System.Object");
    pub const EVENT_HANDLER: Self = Self::new("EventHandler", "System.EventHandler");
    pub const ARGUMENT_NULL_EXCEPTION: Self =
        Self::new("ArgumentNullException", "System.ArgumentNullException");
    pub const DICTIONARY_BASE: Self =
        Self::new("DictionaryBase", "System.Collections.DictionaryBase");
    pub const COLLECTION_BASE: Self =
        Self::new("CollectionBase", "System.Collections.CollectionBase");

    /// Describe a framework type.
    pub const fn new(name: &'static str, full_name: &'static str) -> Self {
        Self { name, full_name }
    }
}

impl HostType for SystemType {
    fn name(&self) -> &str {
        self.name
    }

    fn full_name(&self) -> &str {
        self.full_name
    }
}

impl From<SystemType> for HostTypeHandle {
    fn from(ty: SystemType) -> Self {
        Self::new(ty)
    }
}

/// A reference to a type from inside the declaration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeReference {
    /// A type named by an arbitrary string, emitted verbatim.
    Named(String),
    /// A host-environment type.
    Host(HostTypeHandle),
    /// A type declared in the tree, referenced by its full name.
    Declared(String),
}

impl TypeReference {
    /// Reference a type by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Reference a host type.
    pub fn host(handle: impl Into<HostTypeHandle>) -> Self {
        Self::Host(handle.into())
    }

    /// Short name of the referenced type.
    ///
    /// For named and declared types this is the last dotted segment.
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) | Self::Declared(name) => name.rsplit('.').next().unwrap_or(name),
            Self::Host(handle) => handle.name(),
        }
    }

    /// Resolve to a target type reference.
    pub fn resolve(&self) -> CodeTypeReference {
        match self {
            Self::Named(name) | Self::Declared(name) => CodeTypeReference::new(name.as_str()),
            Self::Host(handle) => handle.type_reference(),
        }
    }
}

impl From<SystemType> for TypeReference {
    fn from(ty: SystemType) -> Self {
        Self::host(ty)
    }
}

impl From<HostTypeHandle> for TypeReference {
    fn from(handle: HostTypeHandle) -> Self {
        Self::Host(handle)
    }
}
