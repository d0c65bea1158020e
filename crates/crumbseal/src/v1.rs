// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! V1 codec: HMAC-SHA1 over `name || value || timestamp`, single key.

use cookie::Cookie;
use crumbseal_format::{
    CookieValue, FormatVersion, V1Deserializer, V1Serializer, ValueDeserializer, ValueSerializer,
};
use crumbseal_hasher::SignatureHasher;

use crate::error::CodecError;
use crate::traits::SigningScheme;

/// The only key slot V1 has.
const KEY_VERSION: i32 = 0;

/// V1 signing scheme.
#[derive(Debug)]
pub struct V1Codec {
    hasher: SignatureHasher,
    timestamp: Option<i64>,
}

impl V1Codec {
    /// `hasher` must be an initialized HMAC-SHA1 hasher.
    pub(crate) fn new(hasher: SignatureHasher, timestamp: Option<i64>) -> Self {
        Self { hasher, timestamp }
    }

    fn hasher_for(&self, key_version: i32) -> Result<&SignatureHasher, CodecError> {
        if key_version != KEY_VERSION {
            return Err(CodecError::UnknownKeyVersion(key_version));
        }

        Ok(&self.hasher)
    }
}

impl SigningScheme for V1Codec {
    fn version(&self) -> FormatVersion {
        FormatVersion::V1
    }

    fn fixed_timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    fn read_value(&self, source: &Cookie<'_>) -> Result<CookieValue, CodecError> {
        let value = V1Deserializer.deserialize(source.value())?;

        Ok(value.builder_from().with_name(source.name()).build())
    }

    fn write_value(&self, value: &CookieValue) -> String {
        V1Serializer.serialize(value)
    }

    fn compute_signature(&self, value: &CookieValue) -> Result<String, CodecError> {
        let timestamp = value.timestamp().to_string();
        let hasher = self.hasher_for(value.key_version())?;

        Ok(hasher.compute_signature(&[value.name(), value.value(), timestamp.as_str()])?)
    }

    fn verify_signature(&self, value: &CookieValue) -> Result<bool, CodecError> {
        let timestamp = value.timestamp().to_string();
        let hasher = self.hasher_for(value.key_version())?;

        Ok(hasher.verify_signature(
            &[value.name(), value.value(), timestamp.as_str()],
            value.signature().unwrap_or_default(),
        )?)
    }
}
