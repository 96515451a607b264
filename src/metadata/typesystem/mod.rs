//! Introspectable type model.
//!
//! This module provides an explicit description of types (classes, interfaces and
//! primitives) that stands in for runtime reflection. A type is described once, through
//! the [`TypeBuilder`], and shared as an immutable [`TypeRc`]. The property resolver walks
//! these descriptors; nothing in here knows about properties.
//!
//! # Key Components
//!
//! - [`TypeDescriptor`]: a type with its base, interfaces, methods, fields and constructors
//! - [`TypeBuilder`]: fluent construction and validation of descriptors
//! - [`TypeRegistry`]: name and token lookup of registered descriptors
//! - [`PrimitiveKind`]: the built-in primitive types
//! - [`Introspectable`]: ties a Rust type to its descriptor
//!
//! # Examples
//!
//! ```rust
//! use propscope::metadata::typesystem::{PrimitiveKind, TypeBuilder};
//!
//! #[derive(Default)]
//! struct Person {
//!     name: String,
//! }
//!
//! let string = PrimitiveKind::String.descriptor();
//! let person = TypeBuilder::class("demo", "Person")
//!     .getter("getName", &string, |p: &Person| p.name.clone())
//!     .setter("setName", &string, |p: &mut Person, v: String| p.name = v)
//!     .default_constructor(Person::default)
//!     .build()?;
//!
//! assert_eq!(person.fullname(), "demo.Person");
//! assert!(PrimitiveKind::Object.descriptor().is_assignable_from(&person));
//! # Ok::<(), propscope::Error>(())
//! ```

mod builder;
mod primitives;
mod registry;

use std::{
    any::Any,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

pub use builder::TypeBuilder;
pub use primitives::{PrimitiveKind, PRIMITIVE_NAMESPACE};
pub use registry::TypeRegistry;

use crate::metadata::{
    field::FieldList,
    method::{ConstructorRc, MethodList},
    token::Token,
};

/// Reference to a `TypeDescriptor`
pub type TypeRc = Arc<TypeDescriptor>;

/// The kind of a described type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFlavor {
    /// A concrete or abstract class, may extend one base class
    Class,
    /// An interface, only contributes declarations
    Interface,
    /// A built-in primitive
    Primitive(PrimitiveKind),
}

/// Implemented by Rust types that expose a descriptor of themselves.
///
/// Implementations usually keep the descriptor in a `static OnceLock<TypeRc>` so it
/// is built once per process.
pub trait Introspectable: Any {
    /// Returns the descriptor of this type
    fn type_descriptor() -> TypeRc;
}

/// Represents a described type.
///
/// Equality and hashing use the [`Token`] only.
pub struct TypeDescriptor {
    /// Token
    pub token: Token,
    /// The flavor of this type
    pub flavor: TypeFlavor,
    /// Namespace (can be empty)
    pub namespace: String,
    /// Name
    pub name: String,
    /// This types base aka 'extends'
    base: Option<TypeRc>,
    /// All interfaces this type directly implements (or extends, for interfaces)
    pub interfaces: Vec<TypeRc>,
    /// All methods this type declares
    pub methods: MethodList,
    /// All fields this type declares
    pub fields: FieldList,
    /// All constructors this type declares
    pub constructors: Vec<ConstructorRc>,
}

impl TypeDescriptor {
    /// Create the descriptor of a primitive
    pub(crate) fn primitive(kind: PrimitiveKind) -> Self {
        TypeDescriptor {
            token: kind.token(),
            flavor: TypeFlavor::Primitive(kind),
            namespace: PRIMITIVE_NAMESPACE.to_string(),
            name: kind.to_string(),
            base: None,
            interfaces: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Access the base type of this type, if it exists
    #[must_use]
    pub fn base(&self) -> Option<&TypeRc> {
        self.base.as_ref()
    }

    /// Returns the full name (Namespace.Name) of the entity
    #[must_use]
    pub fn fullname(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{0}.{1}", self.namespace, self.name)
        }
    }

    /// Returns true if this type is an interface
    #[must_use]
    pub fn is_interface(&self) -> bool {
        matches!(self.flavor, TypeFlavor::Interface)
    }

    /// Returns the primitive kind if this is a primitive type
    #[must_use]
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self.flavor {
            TypeFlavor::Primitive(kind) => Some(kind),
            _ => None,
        }
    }

    /// Iterates this type followed by each base type up to the root
    pub fn hierarchy(&self) -> impl Iterator<Item = &TypeDescriptor> {
        std::iter::successors(Some(self), |current| current.base.as_deref())
    }

    /// Returns true if `token` is reachable from this type through base types and
    /// implemented interfaces (not counting this type itself)
    #[must_use]
    pub fn inherits_from(&self, token: Token) -> bool {
        self.base
            .iter()
            .chain(self.interfaces.iter())
            .any(|parent| parent.token == token || parent.inherits_from(token))
    }

    /// Returns true if a value of type `other` can be used where this type is expected.
    ///
    /// This holds when both are the same type, when this type is `Object` and `other` is
    /// not a value primitive, or when this type is a (transitive) base type or interface
    /// of `other`.
    #[must_use]
    pub fn is_assignable_from(&self, other: &TypeDescriptor) -> bool {
        if self.token == other.token {
            return true;
        }

        if self.primitive_kind() == Some(PrimitiveKind::Object) {
            return !other.primitive_kind().is_some_and(|kind| kind.is_value());
        }

        other.inherits_from(self.token)
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("token", &self.token)
            .field("flavor", &self.flavor)
            .field("fullname", &self.fullname())
            .field("base", &self.base.as_ref().map(|base| base.fullname()))
            .field("interfaces", &self.interfaces.len())
            .field("methods", &self.methods.len())
            .field("fields", &self.fields.len())
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fullname())
    }
}
