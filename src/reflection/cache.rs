//! Memoization of property tables per type.
//!
//! The [`PropertyMetadataCache`] owns one [`PropertyTable`] per described type, built
//! lazily on the first request and never evicted. Lookups from many threads are safe;
//! two threads missing on the same type may both build, and whichever inserts last
//! wins. Both tables are equal, so callers cannot observe the difference.
//!
//! # Examples
//!
//! ```rust
//! use propscope::{
//!     metadata::typesystem::{PrimitiveKind, TypeBuilder},
//!     PropertyMetadataCache, ReflectorConfig,
//! };
//!
//! struct Point {
//!     x: i32,
//! }
//!
//! let int = PrimitiveKind::Int.descriptor();
//! let point = TypeBuilder::class("geo", "Point")
//!     .getter("getX", &int, |p: &Point| p.x)
//!     .build()?;
//!
//! let cache = PropertyMetadataCache::new(ReflectorConfig::default());
//! let table = cache.for_type(&point)?;
//! assert_eq!(table.readable_names(), ["x"]);
//! assert_eq!(cache.len(), 1);
//! # Ok::<(), propscope::Error>(())
//! ```

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, OnceLock,
};

use dashmap::DashMap;
use log::{debug, trace};

use crate::{
    metadata::{
        access::AccessPolicy,
        token::Token,
        typesystem::{Introspectable, TypeRc, TypeRegistry},
    },
    reflection::{config::ReflectorConfig, table::PropertyTable},
    Result,
};

/// Thread-safe store of resolved property tables, keyed by type token
pub struct PropertyMetadataCache {
    tables: DashMap<Token, Arc<PropertyTable>>,
    caching_enabled: AtomicBool,
    access_policy: AccessPolicy,
}

impl PropertyMetadataCache {
    /// Create an empty cache
    #[must_use]
    pub fn new(config: ReflectorConfig) -> Self {
        PropertyMetadataCache {
            tables: DashMap::new(),
            caching_enabled: AtomicBool::new(config.caching_enabled),
            access_policy: config.access_policy,
        }
    }

    /// The process-wide cache, created with the default configuration on first use
    pub fn global() -> &'static PropertyMetadataCache {
        static GLOBAL: OnceLock<PropertyMetadataCache> = OnceLock::new();
        GLOBAL.get_or_init(PropertyMetadataCache::default)
    }

    /// Get the property table of `ty`, building it if necessary
    ///
    /// # Errors
    /// Returns [`crate::Error::AmbiguousAccessor`] if the accessors of a property cannot
    /// be resolved. Nothing is cached in that case.
    pub fn for_type(&self, ty: &TypeRc) -> Result<Arc<PropertyTable>> {
        if !self.is_caching_enabled() {
            return self.build(ty).map(Arc::new);
        }

        if let Some(table) = self.tables.get(&ty.token) {
            trace!("Property table cache hit for '{}'", ty);
            return Ok(table.value().clone());
        }

        let table = Arc::new(self.build(ty)?);
        self.tables.insert(ty.token, table.clone());
        Ok(table)
    }

    /// Get the property table of a Rust type that describes itself
    ///
    /// # Errors
    /// See [`PropertyMetadataCache::for_type`].
    pub fn for_introspectable<T: Introspectable>(&self) -> Result<Arc<PropertyTable>> {
        self.for_type(&T::type_descriptor())
    }

    /// Get the property table of the type registered under `fullname`
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeNotFound`] if `registry` has no such type, otherwise
    /// see [`PropertyMetadataCache::for_type`].
    pub fn for_name(&self, registry: &TypeRegistry, fullname: &str) -> Result<Arc<PropertyTable>> {
        let ty = registry.resolve(fullname)?;
        self.for_type(&ty)
    }

    fn build(&self, ty: &TypeRc) -> Result<PropertyTable> {
        let table = PropertyTable::build(ty, self.access_policy)?;
        debug!(
            "Built property table for '{}': {} readable, {} writable",
            ty,
            table.readable_names().len(),
            table.writable_names().len()
        );
        Ok(table)
    }

    /// Enable or disable memoization; already cached tables are kept
    pub fn set_caching_enabled(&self, enabled: bool) {
        self.caching_enabled.store(enabled, Ordering::Relaxed);
    }

    /// Returns true if tables are memoized
    #[must_use]
    pub fn is_caching_enabled(&self) -> bool {
        self.caching_enabled.load(Ordering::Relaxed)
    }

    /// The policy tables are built with
    #[must_use]
    pub fn access_policy(&self) -> AccessPolicy {
        self.access_policy
    }

    /// Snapshot of the current configuration
    #[must_use]
    pub fn config(&self) -> ReflectorConfig {
        ReflectorConfig {
            caching_enabled: self.is_caching_enabled(),
            access_policy: self.access_policy,
        }
    }

    /// Number of cached tables
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no table is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Drop every cached table
    pub fn clear(&self) {
        self.tables.clear();
    }
}

impl Default for PropertyMetadataCache {
    fn default() -> Self {
        Self::new(ReflectorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::typesystem::{PrimitiveKind, TypeBuilder},
        test::{create_ambiguous_type, create_person_type, Holder, Person},
        Error,
    };

    #[test]
    fn test_cached_table_is_shared() {
        let cache = PropertyMetadataCache::default();
        let person = create_person_type();

        let first = cache.for_type(&person).unwrap();
        let second = cache.for_type(&person).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_same_name_types_get_own_tables() {
        let cache = PropertyMetadataCache::default();
        let string = PrimitiveKind::String.descriptor();
        let first = TypeBuilder::class("demo", "Account")
            .getter("getName", &string, |_: &Holder| String::new())
            .build()
            .unwrap();
        let second = TypeBuilder::class("demo", "Account")
            .getter("getEmail", &string, |_: &Holder| String::new())
            .build()
            .unwrap();

        let first_table = cache.for_type(&first).unwrap();
        let second_table = cache.for_type(&second).unwrap();

        assert_eq!(first_table.readable_names(), ["name"]);
        assert_eq!(second_table.readable_names(), ["email"]);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_uncached_builds_every_time() {
        let cache = PropertyMetadataCache::new(ReflectorConfig::uncached());
        let person = create_person_type();

        let first = cache.for_type(&person).unwrap();
        let second = cache.for_type(&person).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_toggle_caching() {
        let cache = PropertyMetadataCache::default();
        let person = create_person_type();

        cache.set_caching_enabled(false);
        assert!(!cache.is_caching_enabled());
        cache.for_type(&person).unwrap();
        assert!(cache.is_empty());

        cache.set_caching_enabled(true);
        cache.for_type(&person).unwrap();
        assert_eq!(cache.len(), 1);
        assert!(cache.config().caching_enabled);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_failed_build_not_cached() {
        let cache = PropertyMetadataCache::default();
        let ambiguous = create_ambiguous_type();

        assert!(matches!(
            cache.for_type(&ambiguous),
            Err(Error::AmbiguousAccessor { .. })
        ));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_for_introspectable() {
        let cache = PropertyMetadataCache::default();
        let table = cache.for_introspectable::<Person>().unwrap();

        assert_eq!(table.type_descriptor().fullname(), "demo.Person");
        let again = cache.for_type(&Person::type_descriptor()).unwrap();
        assert!(Arc::ptr_eq(&table, &again));
    }

    #[test]
    fn test_for_name() {
        let cache = PropertyMetadataCache::default();
        let registry = TypeRegistry::new();
        registry.insert(&create_person_type()).unwrap();

        let table = cache.for_name(&registry, "demo.Person").unwrap();
        assert!(table.has_getter("name"));

        assert!(matches!(
            cache.for_name(&registry, "demo.Missing"),
            Err(Error::TypeNotFound(_))
        ));
    }

    #[test]
    fn test_restricted_policy() {
        let cache = PropertyMetadataCache::new(ReflectorConfig::restricted());
        assert_eq!(cache.access_policy(), AccessPolicy::PublicOnly);

        let table = cache.for_type(&create_person_type()).unwrap();
        assert!(!table.has_getter("age"));
        assert!(table.has_getter("name"));
    }

    #[test]
    fn test_global_is_singleton() {
        assert!(std::ptr::eq(
            PropertyMetadataCache::global(),
            PropertyMetadataCache::global()
        ));
    }
}
