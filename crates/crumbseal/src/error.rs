// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for crumbseal.
use thiserror::Error;

use crumbseal_format::{FormatError, FormatVersion};
use crumbseal_hasher::HasherError;

/// Rejected cookie value.
///
/// Every variant except [`CodecError::Hasher`] is an "invalid format"
/// condition caused by the cookie itself; its `Display` message is stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The wire value is malformed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The name embedded in a V2 value differs from the cookie name.
    #[error("Cookie name mismatch")]
    NameMismatch,

    /// The cookie name contains the `|` field separator and cannot be framed.
    #[error("Cookie name contains a field separator")]
    NameSeparator,

    /// The embedded signature does not match the recomputed one.
    #[error("Cookie signature mismatch")]
    SignatureMismatch,

    /// No secret is configured for the requested key version.
    #[error("Required signature key does not exist")]
    UnknownKeyVersion(i32),

    /// A hasher was used before initialization.
    #[error(transparent)]
    Hasher(#[from] HasherError),
}

impl CodecError {
    /// Returns `true` for errors caused by the cookie value rather than by misuse.
    pub fn is_invalid_format(&self) -> bool {
        !matches!(self, Self::Hasher(_))
    }
}

/// Codec construction failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No secret key was configured.
    #[error("at least one secret key is required")]
    MissingSecretKey,

    /// The format accepts fewer secret keys than were configured.
    #[error("{version} accepts a single secret key, got {count}")]
    TooManySecretKeys {
        /// Format being built.
        version: FormatVersion,
        /// Number of configured secret keys.
        count: usize,
    },

    /// A secret key was rejected.
    #[error(transparent)]
    Hasher(#[from] HasherError),
}
