// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! V1 format: `value|timestamp|signature`.
//!
//! The value is written verbatim. Parsing counts from the end: the last
//! field is the signature, the one before it the timestamp, and everything
//! else (rejoined with `|`) is the value.

use tracing::trace;

use crate::error::FormatError;
use crate::fields::{FIELD_SEPARATOR, parse_decimal, raw_field_count, split_fields};
use crate::traits::{ValueDeserializer, ValueSerializer};
use crate::value::CookieValue;

const MIN_FIELD_COUNT: usize = 3;

/// V1 writer.
#[derive(Debug, Default, Clone, Copy)]
pub struct V1Serializer;

impl ValueSerializer for V1Serializer {
    fn serialize(&self, value: &CookieValue) -> String {
        let timestamp = value.timestamp().to_string();
        let mut out = String::with_capacity(value.value().len() + timestamp.len() + 42);

        out.push_str(value.value());
        out.push(FIELD_SEPARATOR);
        out.push_str(&timestamp);

        if let Some(signature) = value.signature().filter(|s| !s.is_empty()) {
            out.push(FIELD_SEPARATOR);
            out.push_str(signature);
        }

        out
    }
}

/// V1 reader.
///
/// The returned record has an empty name: V1 does not carry one.
#[derive(Debug, Default, Clone, Copy)]
pub struct V1Deserializer;

impl ValueDeserializer for V1Deserializer {
    fn deserialize(&self, wire: &str) -> Result<CookieValue, FormatError> {
        let fields = split_fields(wire);

        if fields.len() < MIN_FIELD_COUNT {
            trace!(fields = fields.len(), "V1 value has too few fields");
            return Err(FormatError::FieldQuantity(fields.len()));
        }

        if wire.ends_with(FIELD_SEPARATOR) {
            trace!("V1 value has trailing separators");
            return Err(FormatError::FieldQuantity(raw_field_count(wire)));
        }

        let (value_fields, tail) = fields.split_at(fields.len() - 2);
        let (timestamp, signature) = (tail[0], tail[1]);

        let timestamp: i64 = parse_decimal(timestamp).ok_or_else(|| {
            trace!("V1 timestamp is not numeric");
            FormatError::Timestamp(timestamp.to_owned())
        })?;

        Ok(CookieValue::builder()
            .with_value(value_fields.join("|"))
            .with_timestamp(timestamp)
            .with_signature(signature)
            .build())
    }
}
