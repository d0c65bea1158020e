// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Immutable cookie record and its builder.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current UNIX time in seconds.
///
/// A clock set before the epoch yields `0`.
pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or_default()
}

/// Name, plaintext value, timestamp and signature of a signed cookie.
///
/// Immutable: use [`CookieValue::builder_from`] to derive a modified copy.
///
/// # Example
///
/// ```rust
/// use crumbseal_format::CookieValue;
///
/// let unsigned = CookieValue::builder()
///     .with_name("session")
///     .with_value("user=42")
///     .with_timestamp(1521518443)
///     .build();
/// assert_eq!(unsigned.signature(), None);
///
/// let signed = unsigned.builder_from().with_signature("c0ffee").build();
/// assert_eq!(signed.signature(), Some("c0ffee"));
/// assert_eq!(signed.timestamp(), 1521518443);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieValue {
    name: String,
    value: String,
    timestamp: i64,
    signature: Option<String>,
    key_version: i32,
}

impl CookieValue {
    /// Starts an empty builder (empty name and value, key version 0, no signature).
    pub fn builder() -> CookieValueBuilder {
        CookieValueBuilder::default()
    }

    /// Starts a builder pre-filled with every field of `self`.
    pub fn builder_from(&self) -> CookieValueBuilder {
        CookieValueBuilder {
            name: self.name.clone(),
            value: self.value.clone(),
            timestamp: Some(self.timestamp),
            signature: self.signature.clone(),
            key_version: self.key_version,
        }
    }

    /// Cookie name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plaintext value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// UNIX timestamp in seconds.
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Hex signature, if any.
    #[inline]
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Signature key slot (V2).
    #[inline]
    pub fn key_version(&self) -> i32 {
        self.key_version
    }

    /// Consumes the record, returning the plaintext value.
    pub fn into_value(self) -> String {
        self.value
    }
}

/// Mutable builder for [`CookieValue`].
#[derive(Debug, Clone, Default)]
pub struct CookieValueBuilder {
    name: String,
    value: String,
    timestamp: Option<i64>,
    signature: Option<String>,
    key_version: i32,
}

impl CookieValueBuilder {
    /// Sets the cookie name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the plaintext value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the UNIX timestamp in seconds.
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Sets the hex signature.
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Clears the signature.
    pub fn without_signature(mut self) -> Self {
        self.signature = None;
        self
    }

    /// Sets the signature key slot.
    pub fn with_key_version(mut self, key_version: i32) -> Self {
        self.key_version = key_version;
        self
    }

    /// Builds the record. An unset timestamp becomes [`current_timestamp()`].
    pub fn build(self) -> CookieValue {
        CookieValue {
            name: self.name,
            value: self.value,
            timestamp: self.timestamp.unwrap_or_else(current_timestamp),
            signature: self.signature,
            key_version: self.key_version,
        }
    }
}
