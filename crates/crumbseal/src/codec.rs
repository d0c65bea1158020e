// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Version-dispatching cookie codec.

use cookie::Cookie;
use crumbseal_format::{CookieValue, FormatVersion};
use tracing::{debug, instrument, trace};

use crate::builder::CookieCodecBuilder;
use crate::config::CodecConfig;
use crate::error::{CodecError, ConfigError};
use crate::traits::SigningScheme;
use crate::v1::V1Codec;
use crate::v2::V2Codec;

/// Key slot used by [`CookieCodec::encode`].
const DEFAULT_KEY_VERSION: i32 = 0;

/// Signs and verifies cookie values in one of the supported wire formats.
///
/// Built with [`CookieCodec::builder`] or [`CookieCodec::from_config`]. All
/// hashers are initialized at build time, so a built codec is immutable and
/// can be shared across threads behind an `Arc` or a plain reference.
///
/// # Example
///
/// ```rust
/// use crumbseal::{Cookie, CookieCodec, FormatVersion};
///
/// let codec = CookieCodec::builder(FormatVersion::V1)
///     .with_secret_key("not-so-secret")
///     .with_timestamp(1521518443)
///     .build()
///     .expect("Failed to build()");
///
/// let signed = codec
///     .encode(&Cookie::new("tricky", "trick4|Str!n€"))
///     .expect("Failed to encode(..)");
/// assert_eq!(
///     signed.value(),
///     "trick4|Str!n€|1521518443|4159ecdafe58baf080d68d96eb4efd6d730795d0"
/// );
/// ```
#[derive(Debug)]
pub enum CookieCodec {
    /// `value|timestamp|signature`, HMAC-SHA1.
    V1(V1Codec),
    /// Length-prefixed fields, HMAC-SHA256 with key rotation.
    V2(V2Codec),
}

impl CookieCodec {
    /// Starts building a codec for `version`.
    pub fn builder(version: FormatVersion) -> CookieCodecBuilder {
        CookieCodecBuilder::new(version)
    }

    /// Builds a codec from a plain configuration.
    ///
    /// # Errors
    ///
    /// Same as [`CookieCodecBuilder::build`].
    pub fn from_config(config: &CodecConfig) -> Result<Self, ConfigError> {
        config.builder().build()
    }

    fn scheme(&self) -> &dyn SigningScheme {
        match self {
            Self::V1(codec) => codec,
            Self::V2(codec) => codec,
        }
    }

    /// Wire format of this codec.
    pub fn version(&self) -> FormatVersion {
        self.scheme().version()
    }

    /// Number of configured secret keys.
    pub fn key_count(&self) -> usize {
        match self {
            Self::V1(_) => 1,
            Self::V2(codec) => codec.key_count(),
        }
    }

    /// Signs `source` with the first secret key.
    ///
    /// Returns a copy of `source` whose value is the signed wire string; every
    /// other attribute (path, domain, expiry...) is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::NameSeparator`] if a V2 cookie name contains `|`.
    pub fn encode(&self, source: &Cookie<'_>) -> Result<Cookie<'static>, CodecError> {
        self.encode_with_key_version(source, DEFAULT_KEY_VERSION)
    }

    /// Signs `source` with the secret key in slot `key_version`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::UnknownKeyVersion`] if the slot does not exist; V1
    ///   codecs only have slot `0`
    /// - [`CodecError::NameSeparator`] if a V2 cookie name contains `|`
    #[instrument(level = "trace", skip_all, fields(cookie = source.name(), key_version = key_version))]
    pub fn encode_with_key_version(
        &self,
        source: &Cookie<'_>,
        key_version: i32,
    ) -> Result<Cookie<'static>, CodecError> {
        self.scheme()
            .encode_cookie(source, key_version)
            .inspect(|_| trace!(version = %self.version(), "cookie encoded"))
            .inspect_err(|err| debug!(version = %self.version(), reason = %err, "cookie not encoded"))
    }

    /// Verifies `source` and returns a copy whose value is the plaintext.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the value is malformed, names another cookie,
    /// refers to an unknown key or carries a wrong signature.
    #[instrument(level = "trace", skip_all, fields(cookie = source.name()))]
    pub fn decode(&self, source: &Cookie<'_>) -> Result<Cookie<'static>, CodecError> {
        self.scheme()
            .decode_cookie(source)
            .inspect(|_| trace!(version = %self.version(), "cookie decoded"))
            .inspect_err(|err| debug!(version = %self.version(), reason = %err, "cookie rejected"))
    }

    /// Verifies `source` and returns the whole record.
    ///
    /// Useful when the caller enforces a maximum age from
    /// [`CookieValue::timestamp`] or tracks [`CookieValue::key_version`].
    ///
    /// # Errors
    ///
    /// Same as [`decode`](CookieCodec::decode).
    #[instrument(level = "trace", skip_all, fields(cookie = source.name()))]
    pub fn decode_value(&self, source: &Cookie<'_>) -> Result<CookieValue, CodecError> {
        self.scheme()
            .decode_value(source)
            .inspect(|value| {
                trace!(
                    version = %self.version(),
                    key_version = value.key_version(),
                    "cookie decoded"
                )
            })
            .inspect_err(|err| debug!(version = %self.version(), reason = %err, "cookie rejected"))
    }
}
