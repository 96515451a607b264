//! # propscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the propscope library. Import this module to get quick access to the essential
//! types for describing types and resolving their properties.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all propscope operations
pub use crate::Error;

/// The result type used throughout propscope
pub use crate::Result;

/// Configuration of the property metadata cache
pub use crate::ReflectorConfig;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Per-type property table cache and its tables
pub use crate::reflection::{PropertyMetadataCache, PropertyTable};

/// Property read and write wrappers
pub use crate::reflection::{AccessorKind, FieldInvoker, Invoker, MethodInvoker};

// ================================================================================================
// Type Model
// ================================================================================================

/// Type descriptors and their construction
pub use crate::metadata::typesystem::{
    Introspectable, PrimitiveKind, TypeBuilder, TypeDescriptor, TypeFlavor, TypeRc, TypeRegistry,
};

/// Members of a type
pub use crate::metadata::{
    field::{Field, FieldAttributes, FieldRc},
    method::{Constructor, ConstructorRc, Method, MethodBody, MethodModifiers, MethodRc},
};

/// Visibility and access policy
pub use crate::metadata::access::{AccessPolicy, Visibility};

/// Type identity
pub use crate::metadata::token::Token;

/// Dynamically typed values and accessor closures
pub use crate::metadata::value::{factory, reader, writer, FactoryFn, ReadFn, Value, WriteFn};

// ================================================================================================
// Token Substitution
// ================================================================================================

/// Delimiter-based substitution
pub use crate::parsing::{TokenHandler, TokenScanner};
