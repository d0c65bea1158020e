// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Field splitting and `length:content` framing shared by both formats.

use core::str::FromStr;

use crate::error::FormatError;

pub(crate) const FIELD_SEPARATOR: char = '|';
pub(crate) const LENGTH_SEPARATOR: char = ':';

/// Splits `wire` on `|`.
///
/// Trailing empty fields are dropped, leading and interior ones are kept.
/// A value without any separator is a single field, even when empty.
pub(crate) fn split_fields(wire: &str) -> Vec<&str> {
    if !wire.contains(FIELD_SEPARATOR) {
        return vec![wire];
    }

    let mut fields: Vec<&str> = wire.split(FIELD_SEPARATOR).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    fields
}

/// Number of `|` separated fields, trailing empty ones included.
pub(crate) fn raw_field_count(wire: &str) -> usize {
    wire.split(FIELD_SEPARATOR).count()
}

/// Parses a base-10 integer written as `-?[0-9]+`.
///
/// Rejects the leading `+` and the empty digit run that `str::parse` would
/// otherwise let through, so each number has exactly one wire form.
pub(crate) fn parse_decimal<T: FromStr>(text: &str) -> Option<T> {
    let digits = text.strip_prefix('-').unwrap_or(text);

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    text.parse().ok()
}

/// Appends `content` as `length:content`, `length` being its byte length.
pub(crate) fn push_kv_field(out: &mut String, content: &str) {
    out.push_str(&content.len().to_string());
    out.push(LENGTH_SEPARATOR);
    out.push_str(content);
}

/// Reads a `length:content` field and checks the declared length.
///
/// Only the first `:` separates length from content. A bare `0` (no
/// separator) reads as empty content.
pub(crate) fn read_kv_field(field: &str) -> Result<&str, FormatError> {
    let (length, content) = match field.split_once(LENGTH_SEPARATOR) {
        Some((length, content)) => (length, Some(content)),
        None => (field, None),
    };

    let expected: usize =
        parse_decimal(length).ok_or_else(|| FormatError::FieldLength(field.to_owned()))?;

    let Some(content) = content else {
        if expected == 0 {
            return Ok("");
        }
        return Err(FormatError::Field(field.to_owned()));
    };

    if content.len() != expected {
        return Err(FormatError::FieldLengthMismatch {
            expected,
            actual: content.len(),
        });
    }

    Ok(content)
}
