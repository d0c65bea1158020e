// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! V2 format: `2|kv(key_version)|kv(timestamp)|kv(name)|kv(base64(value))|signature`.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::trace;

use crate::error::FormatError;
use crate::fields::{
    FIELD_SEPARATOR, parse_decimal, push_kv_field, raw_field_count, read_kv_field, split_fields,
};
use crate::traits::{ValueDeserializer, ValueSerializer};
use crate::value::CookieValue;

const VERSION_TAG: &str = "2";
const FIELD_COUNT: usize = 6;

const KEY_VERSION_POS: usize = 1;
const TIMESTAMP_POS: usize = 2;
const NAME_POS: usize = 3;
const VALUE_POS: usize = 4;
const SIGNATURE_POS: usize = 5;

/// V2 writer.
#[derive(Debug, Default, Clone, Copy)]
pub struct V2Serializer;

impl ValueSerializer for V2Serializer {
    fn serialize(&self, value: &CookieValue) -> String {
        let key_version = value.key_version().to_string();
        let timestamp = value.timestamp().to_string();
        let encoded_value = STANDARD.encode(value.value().as_bytes());
        let mut out = String::with_capacity(value.name().len() + encoded_value.len() + 96);

        out.push_str(VERSION_TAG);
        for content in [
            key_version.as_str(),
            timestamp.as_str(),
            value.name(),
            encoded_value.as_str(),
        ] {
            out.push(FIELD_SEPARATOR);
            push_kv_field(&mut out, content);
        }

        if let Some(signature) = value.signature().filter(|s| !s.is_empty()) {
            out.push(FIELD_SEPARATOR);
            out.push_str(signature);
        }

        out
    }
}

/// V2 reader.
///
/// Does not compare the embedded name with anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct V2Deserializer;

impl ValueDeserializer for V2Deserializer {
    fn deserialize(&self, wire: &str) -> Result<CookieValue, FormatError> {
        let fields = split_fields(wire);

        if fields.len() != FIELD_COUNT {
            trace!(fields = fields.len(), "V2 value has wrong field count");
            return Err(FormatError::FieldCount {
                expected: FIELD_COUNT,
                actual: fields.len(),
            });
        }

        if wire.ends_with(FIELD_SEPARATOR) {
            trace!("V2 value has trailing separators");
            return Err(FormatError::FieldCount {
                expected: FIELD_COUNT,
                actual: raw_field_count(wire),
            });
        }

        if fields[0] != VERSION_TAG {
            return Err(FormatError::Version(fields[0].to_owned()));
        }

        let key_version = read_kv_field(fields[KEY_VERSION_POS])?;
        let key_version: i32 = parse_decimal(key_version)
            .ok_or_else(|| FormatError::KeyVersion(key_version.to_owned()))?;

        let timestamp = read_kv_field(fields[TIMESTAMP_POS])?;
        let timestamp: i64 = parse_decimal(timestamp)
            .ok_or_else(|| FormatError::TimestampField(timestamp.to_owned()))?;

        let name = read_kv_field(fields[NAME_POS])?;
        let value = decode_value(read_kv_field(fields[VALUE_POS])?)?;

        Ok(CookieValue::builder()
            .with_key_version(key_version)
            .with_timestamp(timestamp)
            .with_name(name)
            .with_value(value)
            .with_signature(fields[SIGNATURE_POS])
            .build())
    }
}

fn decode_value(encoded: &str) -> Result<String, FormatError> {
    let bytes = STANDARD.decode(encoded).map_err(|_| {
        trace!("V2 value is not base64");
        FormatError::ValueEncoding
    })?;

    String::from_utf8(bytes).map_err(|_| FormatError::ValueUtf8)
}
