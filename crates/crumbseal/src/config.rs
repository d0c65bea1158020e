// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Plain codec configuration.

use core::fmt;

use crumbseal_format::FormatVersion;
use zeroize::Zeroize;

use crate::builder::CookieCodecBuilder;
use crate::codec::CookieCodec;

/// Codec settings as they come out of a configuration file.
///
/// With the `serde` feature enabled it deserializes from e.g.
///
/// ```json
/// { "version": "v2", "secret_keys": ["not-so-secret", "like-a-ninja"] }
/// ```
///
/// Secret keys are zeroized on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct CodecConfig {
    /// Wire format.
    pub version: FormatVersion,
    /// Ordered secret keys; index `n` is key version `n`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub secret_keys: Vec<String>,
    /// Fixed timestamp applied on encode.
    #[cfg_attr(feature = "serde", serde(default))]
    pub timestamp: Option<i64>,
}

impl fmt::Debug for CodecConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecConfig")
            .field("version", &self.version)
            .field("secret_keys", &format_args!("[REDACTED; {}]", self.secret_keys.len()))
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

impl Drop for CodecConfig {
    fn drop(&mut self) {
        self.secret_keys.zeroize();
    }
}

impl CodecConfig {
    /// Empty configuration for `version`.
    pub fn new(version: FormatVersion) -> Self {
        Self {
            version,
            secret_keys: Vec::new(),
            timestamp: None,
        }
    }

    /// Builder seeded with this configuration.
    ///
    /// [`CookieCodec::from_config`] builds it directly.
    pub fn builder(&self) -> CookieCodecBuilder {
        let builder = self
            .secret_keys
            .iter()
            .fold(CookieCodec::builder(self.version), |builder, secret| {
                builder.with_secret_key(secret)
            });

        match self.timestamp {
            Some(timestamp) => builder.with_timestamp(timestamp),
            None => builder,
        }
    }
}
