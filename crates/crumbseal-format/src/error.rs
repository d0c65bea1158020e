// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for crumbseal-format.
use thiserror::Error;

/// Malformed wire value.
///
/// `Display` output is stable: callers and compatibility tests match on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// V1 value has fewer than three fields.
    #[error("Invalid field quantity: {0}")]
    FieldQuantity(usize),

    /// V2 value does not have exactly six fields.
    #[error("Invalid field quantity. Expected {expected}, got {actual}")]
    FieldCount {
        /// Required number of fields.
        expected: usize,
        /// Number of fields found.
        actual: usize,
    },

    /// V1 timestamp is not a base-10 integer.
    #[error("Invalid timestamp format: '{0}'")]
    Timestamp(String),

    /// V2 version field is not `2`.
    #[error("Invalid format version '{0}'")]
    Version(String),

    /// V2 field length prefix is not a base-10 integer.
    #[error("Invalid field length format")]
    FieldLength(String),

    /// V2 field has no `length:content` shape.
    #[error("Invalid field format '{0}'")]
    Field(String),

    /// V2 field content length differs from its declared length.
    #[error("Field length mismatch. Expected {expected} characters, got {actual}")]
    FieldLengthMismatch {
        /// Declared content length in bytes.
        expected: usize,
        /// Actual content length in bytes.
        actual: usize,
    },

    /// V2 key version is not a base-10 integer.
    #[error("Invalid key version field format: {0}")]
    KeyVersion(String),

    /// V2 timestamp is not a base-10 integer.
    #[error("Invalid timestamp field format: {0}")]
    TimestampField(String),

    /// V2 value is not valid base64.
    #[error("Invalid value encoding")]
    ValueEncoding,

    /// V2 value decodes to bytes that are not UTF-8.
    #[error("Invalid value encoding: not UTF-8")]
    ValueUtf8,
}
