//! Configuration of the property metadata cache
//!
//! Controls whether resolved tables are memoized and which members the resolver may
//! make accessible.

use crate::metadata::access::AccessPolicy;

/// Configuration for a [`crate::PropertyMetadataCache`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorConfig {
    /// Memoize resolved tables per type (default: true)
    /// When disabled every lookup resolves the type again
    pub caching_enabled: bool,

    /// Which members may be used by the resolver (default: unrestricted)
    /// Members refused by the policy are still described, but reads, writes and
    /// instantiation through them fail
    pub access_policy: AccessPolicy,
}

impl Default for ReflectorConfig {
    fn default() -> Self {
        Self {
            caching_enabled: true,
            access_policy: AccessPolicy::Unrestricted,
        }
    }
}

impl ReflectorConfig {
    /// Creates a configuration that resolves every lookup afresh
    #[must_use]
    pub fn uncached() -> Self {
        Self {
            caching_enabled: false,
            ..Self::default()
        }
    }

    /// Creates a configuration that only uses public members
    #[must_use]
    pub fn restricted() -> Self {
        Self {
            access_policy: AccessPolicy::PublicOnly,
            ..Self::default()
        }
    }
}
