// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Wire formats for Tornado-compatible signed cookie values.
//!
//! Two incompatible layouts are supported:
//!
//! - **V1**: `value|timestamp|signature`. The value is not escaped and may
//!   contain `|`; the last two fields are always the timestamp and signature.
//! - **V2**: `2|<kv>|<kv>|<kv>|<kv>|signature`, where every `kv` field is
//!   `length:content` and carries, in order, the key version, the timestamp,
//!   the cookie name and the base64-encoded value.
//!
//! Deserializers never verify signatures: they only rebuild a [`CookieValue`]
//! with the embedded signature attached. Verification is the caller's job.
//!
//! ## Example
//!
//! ```rust
//! use crumbseal_format::{CookieValue, V2Deserializer, V2Serializer, ValueDeserializer, ValueSerializer};
//!
//! let value = CookieValue::builder()
//!     .with_name("one")
//!     .with_value("simple value")
//!     .with_timestamp(1521518443)
//!     .build();
//!
//! let wire = V2Serializer.serialize(&value);
//! assert_eq!(wire, "2|1:0|10:1521518443|3:one|16:c2ltcGxlIHZhbHVl");
//!
//! let parsed = V2Deserializer.deserialize(&format!("{wire}|00ff")).expect("Failed to deserialize(..)");
//! assert_eq!(parsed.value(), "simple value");
//! assert_eq!(parsed.signature(), Some("00ff"));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod fields;
mod traits;
mod v1;
mod v2;
mod value;
mod version;

pub use error::FormatError;
pub use traits::{ValueDeserializer, ValueSerializer};
pub use v1::{V1Deserializer, V1Serializer};
pub use v2::{V2Deserializer, V2Serializer};
pub use value::{CookieValue, CookieValueBuilder, current_timestamp};
pub use version::FormatVersion;
