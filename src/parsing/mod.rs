//! Delimiter-based text substitution.
//!
//! The [`TokenScanner`] finds regions enclosed by an open and a close delimiter (for
//! example `${` and `}`) and replaces each one, delimiters included, by what its
//! [`TokenHandler`] returns for the enclosed content. Any `FnMut(&str) -> String`
//! closure is a handler.
//!
//! # Examples
//!
//! ```rust
//! use propscope::parsing::TokenScanner;
//!
//! let mut scanner = TokenScanner::new("${", "}", |key: &str| key.to_uppercase());
//! assert_eq!(scanner.parse("${a} and ${b}"), "A and B");
//! assert_eq!(scanner.parse("\\${a}"), "${a}");
//! ```

mod token;

pub use token::{TokenHandler, TokenScanner};
