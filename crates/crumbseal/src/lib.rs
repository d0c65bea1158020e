// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # crumbseal
//!
//! Signed cookie values compatible with Tornado's `set_secure_cookie` /
//! `get_secure_cookie`.
//!
//! A [`CookieCodec`] replaces the value of a [`Cookie`] with a signed wire
//! string on [`encode`](CookieCodec::encode) and restores the plaintext on
//! [`decode`](CookieCodec::decode), failing closed when anything about the
//! wire string or its signature is off. Values are signed, not encrypted.
//!
//! ## Formats
//!
//! - [`FormatVersion::V1`]: `value|timestamp|signature`, HMAC-SHA1 over
//!   name, value and timestamp, one secret.
//! - [`FormatVersion::V2`]: length-prefixed fields, HMAC-SHA256 over the
//!   serialized record, an ordered list of secrets selected by key version.
//!
//! ## Example
//!
//! ```rust
//! use crumbseal::{Cookie, CookieCodec, FormatVersion};
//!
//! let codec = CookieCodec::builder(FormatVersion::V2)
//!     .with_secret_key("not-so-secret")
//!     .with_secret_key("like-a-ninja")
//!     .with_timestamp(1521518443)
//!     .build()
//!     .expect("Failed to build()");
//!
//! let signed = codec
//!     .encode(&Cookie::new("one", "simple value"))
//!     .expect("Failed to encode(..)");
//! assert_eq!(
//!     signed.value(),
//!     "2|1:0|10:1521518443|3:one|16:c2ltcGxlIHZhbHVl|94639b39df48c578b6396f7e02cad0cb3c496a7a1440107ef0182c8fb35ecfbb"
//! );
//!
//! let plain = codec.decode(&signed).expect("Failed to decode(..)");
//! assert_eq!(plain.value(), "simple value");
//! ```
//!
//! ## Crates
//!
//! - `crumbseal-hasher`: [`SignatureHasher`] (HMAC-SHA1 / HMAC-SHA256, hex output)
//! - `crumbseal-format`: [`CookieValue`] and the V1/V2 wire formats

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod builder;
mod codec;
mod config;
mod error;
mod support;
mod traits;
mod v1;
mod v2;

pub use builder::CookieCodecBuilder;
pub use codec::CookieCodec;
pub use config::CodecConfig;
pub use error::{CodecError, ConfigError};
pub use traits::SigningScheme;
pub use v1::V1Codec;
pub use v2::V2Codec;

pub use cookie::Cookie;
pub use crumbseal_format::{CookieValue, CookieValueBuilder, FormatError, FormatVersion};
pub use crumbseal_hasher::{HashAlgorithm, HasherError, SignatureHasher};
