// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # propscope
//!
//! Per-type property metadata for object mappers. `propscope` answers, for any described
//! type, which named properties it exposes, how to read and write each one, and which
//! type each property carries. The answer is computed once per type and cached.
//!
//! ## Features
//!
//! - **Explicit type model** - Classes, interfaces, methods, fields and constructors are
//!   described through a builder instead of runtime reflection
//! - **Accessor resolution** - `getX`/`isX`/`setX` naming convention, covariant
//!   override handling and overload disambiguation
//! - **Field fallback** - Properties without accessor methods use direct field access
//! - **Thread-safe cache** - Lock-free lookup of built tables from any thread
//! - **Access policy** - Optionally refuse to use non-public members
//! - **Token scanning** - `${…}` style substitution with backslash escapes
//!
//! ## Quick Start
//!
//! ```rust
//! use propscope::prelude::*;
//!
//! #[derive(Default)]
//! struct Account {
//!     owner: String,
//!     balance: i64,
//! }
//!
//! let string = PrimitiveKind::String.descriptor();
//! let long = PrimitiveKind::Long.descriptor();
//! let account = TypeBuilder::class("bank", "Account")
//!     .getter("getOwner", &string, |a: &Account| a.owner.clone())
//!     .setter("setOwner", &string, |a: &mut Account, v: String| a.owner = v)
//!     .field(
//!         "balance",
//!         &long,
//!         Visibility::Private,
//!         FieldAttributes::empty(),
//!         |a: &Account| a.balance,
//!         |a: &mut Account, v: i64| a.balance = v,
//!     )
//!     .default_constructor(Account::default)
//!     .build()?;
//!
//! let table = PropertyMetadataCache::global().for_type(&account)?;
//! assert_eq!(table.readable_names(), ["balance", "owner"]);
//! assert!(table.get_getter("balance")?.is_field());
//! # Ok::<(), propscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`] - The type model: descriptors, members, tokens, registry
//! - [`reflection`] - Property resolution and the per-type cache
//! - [`parsing`] - Delimiter-based token substitution
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never installs a
//! logger itself. Table builds are reported at `debug`, cache hits and per-member
//! decisions at `trace`, and accessor ambiguities at `warn`.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use propscope::prelude::*;
///
/// let empty = TypeBuilder::class("demo", "Empty").build()?;
/// let table = PropertyMetadataCache::default().for_type(&empty)?;
/// assert!(table.readable_names().is_empty());
/// # Ok::<(), propscope::Error>(())
/// ```
pub mod prelude;

/// Introspectable type model: descriptors, members, tokens and the type registry
pub mod metadata;

/// Delimiter-based token substitution
pub mod parsing;

/// Property resolution and caching
pub mod reflection;

/// `propscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `propscope` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

/// Thread-safe cache of per-type property tables
///
/// See [`reflection::PropertyMetadataCache`].
pub use reflection::PropertyMetadataCache;

/// Resolved properties of a single type
pub use reflection::PropertyTable;

/// A single property read or write
pub use reflection::Invoker;

/// Cache configuration
pub use reflection::ReflectorConfig;

/// Token substitution
pub use parsing::{TokenHandler, TokenScanner};
