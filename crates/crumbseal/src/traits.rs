// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Signing scheme trait shared by the V1 and V2 codecs.

use cookie::Cookie;
use crumbseal_format::{CookieValue, FormatVersion, current_timestamp};

use crate::error::CodecError;

/// Version-specific half of a cookie codec.
///
/// Implementors say how a record is read, written and signed; the provided
/// methods tie those steps into encode and decode, so every format gets the
/// same verification order:
///
/// 1. read the wire value (format checks, name checks)
/// 2. resolve the signing key for the record's key version
/// 3. recompute the signature and compare it in constant time
///
/// Nothing is returned unless all three steps pass.
pub trait SigningScheme {
    /// Wire format produced by this scheme.
    fn version(&self) -> FormatVersion;

    /// Timestamp override applied on encode, if configured.
    fn fixed_timestamp(&self) -> Option<i64>;

    /// Parses the value of `source` into a record carrying the embedded signature.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the value is malformed or names another cookie.
    fn read_value(&self, source: &Cookie<'_>) -> Result<CookieValue, CodecError>;

    /// Serializes `value`, including its signature when present.
    fn write_value(&self, value: &CookieValue) -> String;

    /// Computes the signature of `value`, ignoring any signature it carries.
    ///
    /// Only called on encode, so it is also where a record that the format
    /// cannot represent gets refused.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownKeyVersion`] if no key matches `value.key_version()`,
    /// or [`CodecError::NameSeparator`] if the name cannot be framed.
    fn compute_signature(&self, value: &CookieValue) -> Result<String, CodecError>;

    /// Checks the signature carried by `value` in constant time.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownKeyVersion`] if no key matches `value.key_version()`.
    fn verify_signature(&self, value: &CookieValue) -> Result<bool, CodecError>;

    /// Timestamp to sign with: the override, or the current time.
    fn timestamp(&self) -> i64 {
        self.fixed_timestamp().unwrap_or_else(current_timestamp)
    }

    /// Signs `source` with the key in slot `key_version`.
    ///
    /// Returns a copy of `source` whose value is the signed wire string.
    ///
    /// # Errors
    ///
    /// Same as [`compute_signature`](SigningScheme::compute_signature).
    fn encode_cookie(
        &self,
        source: &Cookie<'_>,
        key_version: i32,
    ) -> Result<Cookie<'static>, CodecError> {
        let unsigned = CookieValue::builder()
            .with_name(source.name())
            .with_value(source.value())
            .with_timestamp(self.timestamp())
            .with_key_version(key_version)
            .build();

        let signature = self.compute_signature(&unsigned)?;
        let signed = unsigned.builder_from().with_signature(signature).build();

        let mut encoded = source.clone().into_owned();
        encoded.set_value(self.write_value(&signed));

        Ok(encoded)
    }

    /// Reads and verifies `source`, returning the full record.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] on any format, name, key or signature problem.
    fn decode_value(&self, source: &Cookie<'_>) -> Result<CookieValue, CodecError> {
        let candidate = self.read_value(source)?;

        if !self.verify_signature(&candidate)? {
            return Err(CodecError::SignatureMismatch);
        }

        Ok(candidate)
    }

    /// Reads and verifies `source`, returning a copy whose value is the plaintext.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] on any format, name, key or signature problem.
    fn decode_cookie(&self, source: &Cookie<'_>) -> Result<Cookie<'static>, CodecError> {
        let verified = self.decode_value(source)?;

        let mut decoded = source.clone().into_owned();
        decoded.set_value(verified.into_value());

        Ok(decoded)
    }
}
