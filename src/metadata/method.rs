//! Methods and constructors declared by a type.
//!
//! # Key Types
//! - [`Method`]: a declared method with its signature, visibility, modifiers and body
//! - [`MethodModifiers`]: static/abstract/bridge/synthetic flags
//! - [`MethodBody`]: how (and whether) the method can be invoked
//! - [`Constructor`]: a declared constructor with an optional factory

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;

use crate::metadata::{
    access::Visibility,
    typesystem::TypeRc,
    value::{FactoryFn, ReadFn, WriteFn},
};

/// A reference to a `Method`
pub type MethodRc = Arc<Method>;
/// A list of `Method`
pub type MethodList = Vec<MethodRc>;
/// A reference to a `Constructor`
pub type ConstructorRc = Arc<Constructor>;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Method modifier flags
    pub struct MethodModifiers: u32 {
        /// Defined on type, else per instance
        const STATIC = 0x0001;
        /// Method has no implementation in the declaring type
        const ABSTRACT = 0x0002;
        /// Method is final and cannot be overridden
        const FINAL = 0x0004;
        /// Method was generated by the compiler
        const SYNTHETIC = 0x0008;
        /// Compiler generated duplicate of a covariant override under the wider signature
        const BRIDGE = 0x0010;
    }
}

/// Implementation behind a method
#[derive(Clone)]
pub enum MethodBody {
    /// Declared only (interface or abstract method)
    Abstract,
    /// Zero-argument method returning a value
    Reader(ReadFn),
    /// Single-argument method storing a value
    Writer(WriteFn),
    /// Implemented, but not invocable through property access
    Opaque,
}

impl fmt::Debug for MethodBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodBody::Abstract => write!(f, "Abstract"),
            MethodBody::Reader(_) => write!(f, "Reader"),
            MethodBody::Writer(_) => write!(f, "Writer"),
            MethodBody::Opaque => write!(f, "Opaque"),
        }
    }
}

/// A method declared on a type
#[derive(Debug)]
pub struct Method {
    /// Method name
    pub name: String,
    /// Full name of the type declaring this method
    pub declaring_type: String,
    /// Return type, `None` for void
    pub return_type: Option<TypeRc>,
    /// Ordered parameter types
    pub params: Vec<TypeRc>,
    /// Declared visibility
    pub visibility: Visibility,
    /// Modifier flags
    pub modifiers: MethodModifiers,
    /// Implementation
    pub body: MethodBody,
}

impl Method {
    /// Returns the signature used to collapse overridden declarations.
    ///
    /// The format is `<return>#<name>:<param>,<param>`, where the return part is
    /// omitted for void and the parameter part is omitted for parameterless methods.
    /// The return type is part of the signature so that covariant overrides stay
    /// distinct candidates.
    #[must_use]
    pub fn signature(&self) -> String {
        let mut signature = String::new();
        if let Some(return_type) = &self.return_type {
            signature.push_str(&return_type.fullname());
            signature.push('#');
        }
        signature.push_str(&self.name);
        for (index, param) in self.params.iter().enumerate() {
            signature.push(if index == 0 { ':' } else { ',' });
            signature.push_str(&param.fullname());
        }
        signature
    }

    /// Number of declared parameters
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Returns true if this is a compiler generated bridge method
    #[must_use]
    pub fn is_bridge(&self) -> bool {
        self.modifiers.contains(MethodModifiers::BRIDGE)
    }

    /// Returns true if the method is defined on the type instead of per instance
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(MethodModifiers::STATIC)
    }

    /// Returns true if the method has no implementation
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(MethodModifiers::ABSTRACT)
            || matches!(self.body, MethodBody::Abstract)
    }
}

/// A constructor declared on a type
pub struct Constructor {
    /// Full name of the type this constructor creates
    pub declaring_type: String,
    /// Ordered parameter types
    pub params: Vec<TypeRc>,
    /// Declared visibility
    pub visibility: Visibility,
    /// Factory producing a new instance, `None` if the constructor cannot be invoked
    pub factory: Option<FactoryFn>,
}

impl Constructor {
    /// Returns true if this constructor takes no arguments
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.params.is_empty()
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("declaring_type", &self.declaring_type)
            .field("params", &self.params.len())
            .field("visibility", &self.visibility)
            .field("invocable", &self.factory.is_some())
            .finish()
    }
}
