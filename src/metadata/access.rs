//! Member visibility and the policy that decides whether encapsulation may be bypassed.
//!
//! A member whose [`Visibility`] is not [`Visibility::Public`] is only usable when the
//! active [`AccessPolicy`] allows elevating access to it. The policy is evaluated once
//! per table build; a member that stays unusable is still described, but any attempt to
//! invoke it fails with [`crate::Error::AccessDenied`].

use strum::{Display, EnumIter};

/// Declared visibility of a method, field or constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    /// Accessible by anyone
    #[default]
    Public,
    /// Accessible by the declaring type and its sub-types
    Protected,
    /// Accessible within the declaring package or module
    Package,
    /// Accessible only by the declaring type
    Private,
}

impl Visibility {
    /// Returns true if the member can be used without elevating access
    #[must_use]
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Whether non-public members may be made accessible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum AccessPolicy {
    /// Access to every member may be elevated
    #[default]
    Unrestricted,
    /// Elevation is refused; only public members are usable
    PublicOnly,
}

impl AccessPolicy {
    /// Returns true if the policy permits elevating access to non-public members
    #[must_use]
    pub fn can_elevate(&self) -> bool {
        matches!(self, AccessPolicy::Unrestricted)
    }

    /// Returns true if a member with the given visibility is usable under this policy
    #[must_use]
    pub fn permits(&self, visibility: Visibility) -> bool {
        visibility.is_public() || self.can_elevate()
    }
}
