//! Central registry of type descriptors.
//!
//! The [`TypeRegistry`] lets callers refer to described types by full name, the way an
//! object mapper resolves the type named in a mapping. Lookups are lock-free:
//!
//! - **Token-based lookup**: primary index (`SkipMap`)
//! - **Name-based lookup**: secondary index on the full name (`DashMap`)
//! - **Registration order**: append-only list of every registered type (`boxcar::Vec`)
//!
//! Primitive types are registered on construction.
//!
//! # Examples
//!
//! ```rust
//! use propscope::metadata::typesystem::{TypeBuilder, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//! let person = TypeBuilder::class("demo", "Person").build()?;
//! registry.insert(&person)?;
//!
//! assert!(registry.get_by_fullname("demo.Person").is_some());
//! assert!(registry.get_by_fullname("lang.String").is_some());
//! # Ok::<(), propscope::Error>(())
//! ```

use crossbeam_skiplist::SkipMap;
use dashmap::{mapref::entry::Entry, DashMap};
use strum::IntoEnumIterator;

use crate::{
    metadata::{
        token::Token,
        typesystem::{PrimitiveKind, TypeRc},
    },
    Error::{TypeError, TypeNotFound},
    Result,
};

/// Registry of described types, indexed by token and by full name.
///
/// Fully thread-safe; registration and lookup may happen concurrently.
pub struct TypeRegistry {
    /// Primary type storage indexed by tokens
    types: SkipMap<Token, TypeRc>,
    /// Secondary index: types indexed by full name (namespace.name)
    types_by_fullname: DashMap<String, Token>,
    /// Every registered type, in registration order
    registered: boxcar::Vec<TypeRc>,
}

impl TypeRegistry {
    /// Create a new registry with the primitive types registered
    #[must_use]
    pub fn new() -> Self {
        let registry = TypeRegistry {
            types: SkipMap::new(),
            types_by_fullname: DashMap::new(),
            registered: boxcar::Vec::new(),
        };

        for kind in PrimitiveKind::iter() {
            let primitive = kind.descriptor();
            registry
                .types_by_fullname
                .insert(primitive.fullname(), primitive.token);
            registry.store(&primitive);
        }

        registry
    }

    /// Register a type
    ///
    /// Registering the same descriptor twice is a no-op.
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeError`] if a different type with the same full name
    /// is already registered.
    pub fn insert(&self, new_type: &TypeRc) -> Result<()> {
        match self.types_by_fullname.entry(new_type.fullname()) {
            Entry::Occupied(existing) => {
                if *existing.get() == new_type.token {
                    Ok(())
                } else {
                    Err(TypeError(format!(
                        "A different type named '{}' is already registered",
                        existing.key()
                    )))
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(new_type.token);
                self.store(new_type);
                Ok(())
            }
        }
    }

    fn store(&self, new_type: &TypeRc) {
        self.types.insert(new_type.token, new_type.clone());
        self.registered.push(new_type.clone());
    }

    /// Get a type by token
    #[must_use]
    pub fn get(&self, token: &Token) -> Option<TypeRc> {
        self.types.get(token).map(|entry| entry.value().clone())
    }

    /// Get a type by full name (Namespace.Name)
    #[must_use]
    pub fn get_by_fullname(&self, fullname: &str) -> Option<TypeRc> {
        let token = *self.types_by_fullname.get(fullname)?;
        self.get(&token)
    }

    /// Resolve a type by full name
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeNotFound`] if no type with that name is registered.
    pub fn resolve(&self, fullname: &str) -> Result<TypeRc> {
        self.get_by_fullname(fullname)
            .ok_or_else(|| TypeNotFound(fullname.to_string()))
    }

    /// Iterate all registered types in registration order
    pub fn iter(&self) -> impl Iterator<Item = &TypeRc> {
        self.registered.iter().map(|(_, entry)| entry)
    }

    /// Number of registered types, primitives included
    #[must_use]
    pub fn len(&self) -> usize {
        self.registered.count()
    }

    /// Returns true if no type is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{metadata::typesystem::TypeBuilder, Error};

    #[test]
    fn test_primitives_registered() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.len(), PrimitiveKind::iter().count());

        let string = registry.resolve("lang.String").unwrap();
        assert!(Arc::ptr_eq(&string, &PrimitiveKind::String.descriptor()));
        assert!(registry.get(&PrimitiveKind::Int.token()).is_some());

        for (kind, registered) in PrimitiveKind::iter().zip(registry.iter()) {
            assert_eq!(registered.token, kind.token());
            assert!(registry.get_by_fullname(&registered.fullname()).is_some());
        }
        registry.insert(&PrimitiveKind::Long.descriptor()).unwrap();
        assert_eq!(registry.len(), PrimitiveKind::iter().count());
    }

    #[test]
    fn test_insert_and_lookup() {
        let registry = TypeRegistry::new();
        let person = TypeBuilder::class("demo", "Person").build().unwrap();

        registry.insert(&person).unwrap();
        registry.insert(&person).unwrap();

        assert_eq!(registry.len(), PrimitiveKind::iter().count() + 1);
        assert_eq!(registry.get(&person.token).unwrap().name, "Person");
        assert_eq!(registry.iter().last().unwrap().token, person.token);
    }

    #[test]
    fn test_duplicate_name() {
        let registry = TypeRegistry::new();
        let first = TypeBuilder::class("demo", "Person").build().unwrap();
        let second = TypeBuilder::class("demo", "Person").build().unwrap();

        registry.insert(&first).unwrap();
        assert!(matches!(registry.insert(&second), Err(Error::TypeError(_))));
    }

    #[test]
    fn test_resolve_missing() {
        let registry = TypeRegistry::new();
        match registry.resolve("demo.Missing") {
            Err(Error::TypeNotFound(name)) => assert_eq!(name, "demo.Missing"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
