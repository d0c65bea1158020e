// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! V2 codec: HMAC-SHA256 over the serialized record, rotating keys.

use cookie::Cookie;
use crumbseal_format::{
    CookieValue, FormatVersion, V2Deserializer, V2Serializer, ValueDeserializer, ValueSerializer,
};
use crumbseal_hasher::SignatureHasher;

use crate::error::CodecError;
use crate::traits::SigningScheme;

/// Appended to the unsigned record before hashing.
const SIGNING_SUFFIX: &str = "|";

/// Separates wire fields; may not appear in a name.
const FIELD_SEPARATOR: char = '|';

/// V2 signing scheme.
///
/// Keys are ordered: slot `n` is the `n`-th configured secret.
#[derive(Debug)]
pub struct V2Codec {
    hashers: Vec<SignatureHasher>,
    timestamp: Option<i64>,
}

impl V2Codec {
    /// Every hasher must be an initialized HMAC-SHA256 hasher.
    pub(crate) fn new(hashers: Vec<SignatureHasher>, timestamp: Option<i64>) -> Self {
        Self { hashers, timestamp }
    }

    /// Number of configured key slots.
    pub fn key_count(&self) -> usize {
        self.hashers.len()
    }

    fn hasher_for(&self, key_version: i32) -> Result<&SignatureHasher, CodecError> {
        usize::try_from(key_version)
            .ok()
            .and_then(|slot| self.hashers.get(slot))
            .ok_or(CodecError::UnknownKeyVersion(key_version))
    }

    /// `2|kv|ts|name|value` without the signature field.
    fn unsigned_record(value: &CookieValue) -> String {
        V2Serializer.serialize(&value.builder_from().without_signature().build())
    }
}

impl SigningScheme for V2Codec {
    fn version(&self) -> FormatVersion {
        FormatVersion::V2
    }

    fn fixed_timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    fn read_value(&self, source: &Cookie<'_>) -> Result<CookieValue, CodecError> {
        let value = V2Deserializer.deserialize(source.value())?;

        if value.name() != source.name() {
            return Err(CodecError::NameMismatch);
        }

        Ok(value)
    }

    fn write_value(&self, value: &CookieValue) -> String {
        V2Serializer.serialize(value)
    }

    /// Names are written unescaped, so one containing `|` could never be read back.
    fn compute_signature(&self, value: &CookieValue) -> Result<String, CodecError> {
        if value.name().contains(FIELD_SEPARATOR) {
            return Err(CodecError::NameSeparator);
        }

        let hasher = self.hasher_for(value.key_version())?;
        let record = Self::unsigned_record(value);

        Ok(hasher.compute_signature(&[record.as_str(), SIGNING_SUFFIX])?)
    }

    fn verify_signature(&self, value: &CookieValue) -> Result<bool, CodecError> {
        let hasher = self.hasher_for(value.key_version())?;
        let record = Self::unsigned_record(value);

        Ok(hasher.verify_signature(
            &[record.as_str(), SIGNING_SUFFIX],
            value.signature().unwrap_or_default(),
        )?)
    }
}
