//! Introspectable description of types and their members.
//!
//! This module contains the type model the property resolver walks. It stands in for
//! runtime reflection: every type is described once, explicitly, and shared as an
//! immutable descriptor.
//!
//! # Key Components
//!
//! - [`typesystem`] - Type descriptors, builder, registry and primitives
//! - [`method`] - Declared methods and constructors
//! - [`field`] - Declared fields
//! - [`access`] - Member visibility and the access policy
//! - [`value`] - Dynamically typed values and accessor closures
//! - [`token`] - Process-unique type identity
//!
//! # Examples
//!
//! ```rust
//! use propscope::metadata::typesystem::{PrimitiveKind, TypeBuilder};
//!
//! let collection = TypeBuilder::interface("util", "Collection").build()?;
//! let array_list = TypeBuilder::class("util", "ArrayList")
//!     .implements(&collection)
//!     .build()?;
//!
//! assert!(collection.is_assignable_from(&array_list));
//! assert!(!PrimitiveKind::Int.descriptor().is_assignable_from(&array_list));
//! # Ok::<(), propscope::Error>(())
//! ```

/// Member visibility and access policy
pub mod access;
/// Declared fields
pub mod field;
/// Declared methods and constructors
pub mod method;
/// Type identity tokens
pub mod token;
/// Type descriptors, builder and registry
pub mod typesystem;
/// Dynamically typed values and accessor closures
pub mod value;
