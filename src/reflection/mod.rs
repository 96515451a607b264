//! Property metadata resolution.
//!
//! Turns a [`crate::metadata::typesystem::TypeDescriptor`] into a [`PropertyTable`]:
//! the set of readable and writable properties of the type, how to invoke each one and
//! which type it carries. Tables are memoized per type by the [`PropertyMetadataCache`].
//!
//! # Resolution pipeline
//!
//! 1. Default constructor discovery on the type's own constructors
//! 2. Method collection across base types and interfaces, one entry per signature
//! 3. Classification into getter and setter candidates by naming convention
//! 4. Conflict resolution between covariant or overloaded candidates
//! 5. Field fallback for properties still lacking a getter or setter
//!
//! A type whose accessors cannot be resolved unambiguously has no table; the build
//! fails with [`crate::Error::AmbiguousAccessor`].
//!
//! # Examples
//!
//! ```rust
//! use propscope::{
//!     metadata::typesystem::{PrimitiveKind, TypeBuilder},
//!     PropertyMetadataCache,
//! };
//!
//! #[derive(Default)]
//! struct User {
//!     login: String,
//! }
//!
//! let string = PrimitiveKind::String.descriptor();
//! let user = TypeBuilder::class("app", "User")
//!     .getter("getLogin", &string, |u: &User| u.login.clone())
//!     .setter("setLogin", &string, |u: &mut User, v: String| u.login = v)
//!     .default_constructor(User::default)
//!     .build()?;
//!
//! let table = PropertyMetadataCache::global().for_type(&user)?;
//! let mut instance = table.instantiate()?;
//! table
//!     .get_setter("login")?
//!     .write(&mut *instance, Box::new("root".to_string()))?;
//!
//! let login = table.get_getter("login")?.read(&*instance)?;
//! assert_eq!(login.downcast_ref::<String>().map(String::as_str), Some("root"));
//! assert_eq!(table.find_property_name("LOGIN"), Some("login"));
//! # Ok::<(), propscope::Error>(())
//! ```

use strum::Display;

mod cache;
mod classifier;
mod collector;
mod config;
mod fields;
mod invoker;
pub mod namer;
mod resolver;
mod table;

pub use cache::PropertyMetadataCache;
pub use config::ReflectorConfig;
pub use invoker::{FieldInvoker, Invoker, MethodInvoker};
pub use table::PropertyTable;

/// Side of a property an accessor serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AccessorKind {
    /// Reads the property
    Getter,
    /// Writes the property
    Setter,
}
