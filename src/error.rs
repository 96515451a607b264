use thiserror::Error;

use crate::reflection::AccessorKind;

macro_rules! target_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::TargetError($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::TargetError(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Table Construction Errors
/// - [`Error::AmbiguousAccessor`] - Accessor candidates could not be ordered by type dominance
///
/// ## Lookup Errors
/// - [`Error::MissingAccessor`] - No getter or setter is registered for the property
/// - [`Error::MissingDefaultConstructor`] - Default construction was demanded but is unavailable
/// - [`Error::TypeNotFound`] - Requested type name is not registered
///
/// ## Invocation Errors
/// - [`Error::AccessDenied`] - The member is not usable under the active access policy
/// - [`Error::TargetError`] - The invocation target failed (wrong instance, wrong value, abstract)
///
/// ## Model Errors
/// - [`Error::InvalidAccessorName`] - Method name carries no accessor prefix
/// - [`Error::TypeError`] - A type description is inconsistent, or type tokens ran out
///
/// # Examples
///
/// ```rust
/// use propscope::{Error, PropertyMetadataCache, metadata::typesystem::TypeBuilder};
///
/// let empty = TypeBuilder::class("demo", "Empty").build()?;
/// let cache = PropertyMetadataCache::default();
/// let table = cache.for_type(&empty)?;
///
/// match table.get_getter("name") {
///     Err(Error::MissingAccessor { property, .. }) => assert_eq!(property, "name"),
///     _ => unreachable!(),
/// }
/// # Ok::<(), propscope::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Two or more accessor candidates for the same property cannot be ordered.
    ///
    /// Raised while building a [`crate::PropertyTable`] when the candidates share
    /// the same type or have unrelated types. The whole build is aborted and the
    /// type must be treated as unmappable.
    #[error("Illegal overloaded {kind} method with ambiguous type for property '{property}' in '{type_name}'")]
    AmbiguousAccessor {
        /// Which side of the table failed to resolve
        kind: AccessorKind,
        /// The property name that produced the conflict
        property: String,
        /// Full name of the type being resolved
        type_name: String,
    },

    /// No accessor is registered for the requested property.
    #[error("There is no {kind} for property named '{property}' in '{type_name}'")]
    MissingAccessor {
        /// Which map was queried
        kind: AccessorKind,
        /// The property name that was looked up
        property: String,
        /// Full name of the type that was queried
        type_name: String,
    },

    /// Default construction was explicitly demanded but the type has no usable
    /// zero-argument constructor.
    #[error("There is no default constructor for '{0}'")]
    MissingDefaultConstructor(String),

    /// The member exists but may not be used under the active access policy.
    #[error("Access denied to '{member}' in '{type_name}'")]
    AccessDenied {
        /// Name of the method, field or constructor
        member: String,
        /// Full name of the declaring type
        type_name: String,
    },

    /// The invocation itself failed.
    ///
    /// Covers abstract or opaque methods, an instance of the wrong concrete type,
    /// and values that do not match the accessor's declared type.
    #[error("{0}")]
    TargetError(String),

    /// A method name handed to the naming converter has no `get`, `set` or `is` prefix.
    #[error("Error parsing property name '{0}'. Didn't start with 'is', 'get' or 'set'.")]
    InvalidAccessorName(String),

    /// Failed to find a type by name.
    #[error("Failed to find type - {0}")]
    TypeNotFound(String),

    /// A type description is inconsistent, or no type token is left for it.
    #[error("{0}")]
    TypeError(String),
}
