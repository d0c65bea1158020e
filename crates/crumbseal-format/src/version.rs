// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Signed cookie wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FormatVersion {
    /// `value|timestamp|signature`, HMAC-SHA1, single key.
    V1,
    /// Length-prefixed fields, HMAC-SHA256, rotating keys.
    V2,
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("v1"),
            Self::V2 => f.write_str("v2"),
        }
    }
}

impl FromStr for FormatVersion {
    type Err = FormatError;

    /// Accepts `v1` / `v2` in any case, or the bare wire tags `1` / `2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            _ => Err(FormatError::Version(s.to_owned())),
        }
    }
}
