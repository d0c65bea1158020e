// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait definitions for cookie value formats.

use crate::error::FormatError;
use crate::value::CookieValue;

/// Writes a [`CookieValue`] in a wire format.
pub trait ValueSerializer {
    /// Serializes `value`.
    ///
    /// The signature field is emitted only when the signature is present and
    /// non-empty, so an unsigned record serializes to its signing input.
    fn serialize(&self, value: &CookieValue) -> String;
}

/// Reads a [`CookieValue`] from a wire format.
pub trait ValueDeserializer {
    /// Parses `wire` into a record carrying the embedded (unverified) signature.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] describing the first malformed field.
    fn deserialize(&self, wire: &str) -> Result<CookieValue, FormatError>;
}
