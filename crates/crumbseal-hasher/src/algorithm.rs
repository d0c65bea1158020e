// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

/// Keyed-hash algorithm backing a [`SignatureHasher`](crate::SignatureHasher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// HMAC-SHA1 (20-byte digest), used by the V1 cookie format.
    HmacSha1,
    /// HMAC-SHA256 (32-byte digest), used by the V2 cookie format.
    HmacSha256,
}

impl HashAlgorithm {
    /// Raw digest length in bytes.
    #[inline]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::HmacSha1 => 20,
            Self::HmacSha256 => 32,
        }
    }

    /// Length of the lowercase hex signature (two characters per byte).
    #[inline]
    pub const fn hex_len(self) -> usize {
        self.digest_len() * 2
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HmacSha1 => f.write_str("HmacSHA1"),
            Self::HmacSha256 => f.write_str("HmacSHA256"),
        }
    }
}
