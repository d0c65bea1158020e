// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Builder for [`CookieCodec`].

use core::fmt;

use crumbseal_format::FormatVersion;
use crumbseal_hasher::SignatureHasher;
use tracing::debug;
use zeroize::Zeroizing;

use crate::codec::CookieCodec;
use crate::error::ConfigError;
use crate::v1::V1Codec;
use crate::v2::V2Codec;

/// Collects secrets and options, then builds an immutable [`CookieCodec`].
///
/// Secrets are kept in [`Zeroizing`] buffers until the builder is consumed.
pub struct CookieCodecBuilder {
    version: FormatVersion,
    secret_keys: Vec<Zeroizing<String>>,
    timestamp: Option<i64>,
}

impl fmt::Debug for CookieCodecBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieCodecBuilder")
            .field("version", &self.version)
            .field("secret_keys", &format_args!("[REDACTED; {}]", self.secret_keys.len()))
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

impl CookieCodecBuilder {
    /// Starts an empty builder for `version`.
    pub fn new(version: FormatVersion) -> Self {
        Self {
            version,
            secret_keys: Vec::new(),
            timestamp: None,
        }
    }

    /// Appends a secret key. The n-th call configures key version `n - 1`.
    pub fn with_secret_key(mut self, secret: &str) -> Self {
        self.secret_keys.push(Zeroizing::new(secret.to_owned()));
        self
    }

    /// Signs every encoded cookie with `timestamp` instead of the current time.
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Creates and initializes one hasher per secret key.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingSecretKey`] if no secret key was given
    /// - [`ConfigError::TooManySecretKeys`] if a V1 codec got more than one
    /// - [`ConfigError::Hasher`] if a secret key is empty
    pub fn build(self) -> Result<CookieCodec, ConfigError> {
        let count = self.secret_keys.len();

        if count == 0 {
            return Err(ConfigError::MissingSecretKey);
        }

        let codec = match self.version {
            FormatVersion::V1 => {
                let [secret] = self.secret_keys.as_slice() else {
                    return Err(ConfigError::TooManySecretKeys {
                        version: self.version,
                        count,
                    });
                };

                let mut hasher = SignatureHasher::sha1(secret)?;
                hasher.init()?;

                CookieCodec::V1(V1Codec::new(hasher, self.timestamp))
            }
            FormatVersion::V2 => {
                let hashers = self
                    .secret_keys
                    .iter()
                    .map(|secret| -> Result<SignatureHasher, ConfigError> {
                        let mut hasher = SignatureHasher::sha256(secret)?;
                        hasher.init()?;
                        Ok(hasher)
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                CookieCodec::V2(V2Codec::new(hashers, self.timestamp))
            }
        };

        debug!(
            version = %self.version,
            key_count = count,
            fixed_timestamp = self.timestamp.is_some(),
            "cookie codec built"
        );

        Ok(codec)
    }
}
