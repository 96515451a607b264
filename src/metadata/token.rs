//! Type identity tokens.
//!
//! Every [`crate::metadata::typesystem::TypeDescriptor`] carries a [`Token`] that
//! identifies it for the lifetime of the process. Tokens are the key of the
//! property metadata cache, so two descriptors describing the same shape are still
//! distinct types. Type tokens are never handed out twice.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};

use crate::{Error::TypeError, Result};

/// Kind byte for user-defined types (classes and interfaces)
pub const TOKEN_KIND_TYPE: u8 = 0x02;
/// Kind byte for built-in primitive types
pub const TOKEN_KIND_PRIMITIVE: u8 = 0xF0;

/// Largest row a token can carry
const MAX_ROW: u32 = 0x00FF_FFFF;

/// Row counter for user-defined types, shared by every registry and builder
static NEXT_TYPE_ROW: AtomicU32 = AtomicU32::new(1);

/// A token identifying a type.
///
/// The value consists of a 32-bit value where:
/// - The high byte (bits 24-31) indicates the kind of type
/// - The low 24 bits (bits 0-23) indicate the row within that kind
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Token(pub u32);

impl Token {
    /// Creates a new token from a raw 32-bit value
    #[must_use]
    pub fn new(value: u32) -> Self {
        Token(value)
    }

    /// Allocates a fresh, process-unique token for a user-defined type
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeError`] once all 24-bit rows have been handed out.
    /// Rows are never reused, so no two descriptors can share a token.
    pub fn next_type() -> Result<Self> {
        let row = allocate_row(&NEXT_TYPE_ROW)
            .ok_or_else(|| TypeError("Type tokens exhausted".to_string()))?;

        Ok(Token((u32::from(TOKEN_KIND_TYPE) << 24) | row))
    }

    /// Returns the raw token value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Extracts the kind from the token (high byte)
    #[must_use]
    pub fn kind(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Extracts the row from the token (low 24 bits)
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    /// Returns true if this token identifies a built-in primitive
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.kind() == TOKEN_KIND_PRIMITIVE
    }

    /// Returns true if this is a null token (value 0)
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

/// Take the next row from `counter`, refusing to go past [`MAX_ROW`]
fn allocate_row(counter: &AtomicU32) -> Option<u32> {
    counter
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |row| {
            (row <= MAX_ROW).then_some(row + 1)
        })
        .ok()
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl From<Token> for u32 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(0x{:08x}, kind: 0x{:02x}, row: {})",
            self.0,
            self.kind(),
            self.row()
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
