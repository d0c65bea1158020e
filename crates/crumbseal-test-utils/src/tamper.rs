// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::Range;

/// Byte range of the trailing signature field (everything after the last `|`).
///
/// # Panics
///
/// Panics if `encoded` contains no `|`.
pub fn signature_range(encoded: &str) -> Range<usize> {
    let start = encoded.rfind('|').expect("encoded value has no '|'") + 1;
    start..encoded.len()
}

/// Returns `encoded` with the ASCII hex digit at byte `index` replaced by a different one.
///
/// # Panics
///
/// Panics if the byte at `index` is not ASCII.
pub fn flip_char_at(encoded: &str, index: usize) -> String {
    let mut bytes = encoded.as_bytes().to_vec();
    assert!(bytes[index].is_ascii(), "byte at {index} is not ASCII");

    bytes[index] = if bytes[index] == b'0' { b'1' } else { b'0' };

    String::from_utf8(bytes).expect("Failed to rebuild String")
}
