//! Built-in primitive types.
//!
//! Primitive descriptors are created once per process and carry fixed tokens in the
//! `0xF000_0001`+ range, so every caller of [`PrimitiveKind::descriptor`] observes the
//! same [`TypeRc`].

use std::sync::{Arc, OnceLock};

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::metadata::{
    token::Token,
    typesystem::{TypeDescriptor, TypeRc},
};

/// Namespace shared by all primitive types
pub const PRIMITIVE_NAMESPACE: &str = "lang";

/// All primitive kinds known to the type model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PrimitiveKind {
    /// No value
    Void,
    /// true/false value
    Boolean,
    /// Signed 32-bit integer
    Int,
    /// Signed 64-bit integer
    Long,
    /// 64-bit floating point
    Double,
    /// Text value
    String,
    /// Root of every reference type
    Object,
}

static PRIMITIVES: OnceLock<Vec<TypeRc>> = OnceLock::new();

impl PrimitiveKind {
    /// Get the fixed token of this primitive
    #[must_use]
    pub fn token(&self) -> Token {
        Token::new(match self {
            PrimitiveKind::Void => 0xF000_0001,
            PrimitiveKind::Boolean => 0xF000_0002,
            PrimitiveKind::Int => 0xF000_0003,
            PrimitiveKind::Long => 0xF000_0004,
            PrimitiveKind::Double => 0xF000_0005,
            PrimitiveKind::String => 0xF000_0011,
            PrimitiveKind::Object => 0xF000_0010,
        })
    }

    /// Returns true if values of this kind are not references
    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::Void
                | PrimitiveKind::Boolean
                | PrimitiveKind::Int
                | PrimitiveKind::Long
                | PrimitiveKind::Double
        )
    }

    /// Get the shared descriptor of this primitive
    #[must_use]
    pub fn descriptor(&self) -> TypeRc {
        let primitives = PRIMITIVES.get_or_init(|| {
            PrimitiveKind::iter()
                .map(|kind| Arc::new(TypeDescriptor::primitive(kind)))
                .collect()
        });

        // EnumIter yields variants in declaration order
        primitives[*self as usize].clone()
    }
}
