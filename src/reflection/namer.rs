//! Naming convention between accessor methods and property names.
//!
//! `getName`/`setName` map to `name`, `isActive` maps to `active`. The first character
//! is only lower-cased when the remainder is a single character or its second
//! character is not uppercase, so `getURL` keeps `URL`.

use crate::{Error::InvalidAccessorName, Result};

/// Turns an accessor method name into the property name it implies.
///
/// # Errors
/// Returns [`crate::Error::InvalidAccessorName`] if the name does not start with
/// `is`, `get` or `set`.
pub fn method_to_property(name: &str) -> Result<String> {
    let stripped = if let Some(rest) = name.strip_prefix("is") {
        rest
    } else if let Some(rest) = name.strip_prefix("get").or_else(|| name.strip_prefix("set")) {
        rest
    } else {
        return Err(InvalidAccessorName(name.to_string()));
    };

    let mut chars = stripped.chars();
    let Some(first) = chars.next() else {
        return Ok(String::new());
    };

    let keep_case = chars.next().is_some_and(char::is_uppercase);
    if keep_case {
        return Ok(stripped.to_string());
    }

    let mut property: String = first.to_lowercase().collect();
    property.push_str(&stripped[first.len_utf8()..]);
    Ok(property)
}

/// Returns true if the name carries any accessor prefix
#[must_use]
pub fn is_property(name: &str) -> bool {
    is_getter(name) || is_setter(name)
}

/// Returns true if the name looks like a getter (`get…` or `is…`)
#[must_use]
pub fn is_getter(name: &str) -> bool {
    (name.starts_with("get") && name.len() > 3) || (name.starts_with("is") && name.len() > 2)
}

/// Returns true if the name looks like a setter (`set…`)
#[must_use]
pub fn is_setter(name: &str) -> bool {
    name.starts_with("set") && name.len() > 3
}
