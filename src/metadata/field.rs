use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;

use crate::metadata::{
    access::Visibility,
    typesystem::TypeRc,
    value::{ReadFn, WriteFn},
};

/// A reference to a `Field`
pub type FieldRc = Arc<Field>;
/// A list of `Field`
pub type FieldList = Vec<FieldRc>;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// All possible flags for field declarations
    pub struct FieldAttributes: u32 {
        /// Defined on type, else per instance
        const STATIC = 0x0010;
        /// Field can only be initialized, not written to after init
        const FINAL = 0x0020;
        /// Field should not be serialized
        const TRANSIENT = 0x0080;
        /// Field is written and read without caching across threads
        const VOLATILE = 0x0100;
    }
}

/// A field declared on a type.
///
/// The `read` and `write` closures perform raw storage access, bypassing any
/// accessor method. Static fields ignore the instance they receive.
pub struct Field {
    /// Field name
    pub name: String,
    /// Full name of the type declaring this field
    pub declaring_type: String,
    /// Declared type of the field
    pub field_type: TypeRc,
    /// Declared visibility
    pub visibility: Visibility,
    /// Field flags
    pub flags: FieldAttributes,
    /// Raw storage read
    pub read: ReadFn,
    /// Raw storage write
    pub write: WriteFn,
}

impl Field {
    /// Returns true if the field is defined on the type instead of per instance
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.flags.contains(FieldAttributes::STATIC)
    }

    /// Returns true if the field cannot be reassigned after initialization
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.flags.contains(FieldAttributes::FINAL)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("declaring_type", &self.declaring_type)
            .field("field_type", &self.field_type.fullname())
            .field("visibility", &self.visibility)
            .field("flags", &self.flags)
            .finish()
    }
}
