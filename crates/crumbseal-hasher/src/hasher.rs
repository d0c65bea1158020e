// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC signer producing lowercase hex signatures.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::algorithm::HashAlgorithm;
use crate::error::HasherError;

/// Keyed HMAC context, key schedule already applied.
///
/// Never updated in place: signing clones it first.
#[derive(Clone)]
enum KeyedContext {
    Sha1(Hmac<Sha1>),
    Sha256(Hmac<Sha256>),
}

impl KeyedContext {
    fn new(algorithm: HashAlgorithm, key: &[u8]) -> Result<Self, HasherError> {
        let context = match algorithm {
            HashAlgorithm::HmacSha1 => Hmac::<Sha1>::new_from_slice(key).map(Self::Sha1),
            HashAlgorithm::HmacSha256 => Hmac::<Sha256>::new_from_slice(key).map(Self::Sha256),
        };

        context.map_err(|_| HasherError::InvalidKey)
    }

    fn sign(&self, parts: &[&str]) -> String {
        match self {
            Self::Sha1(mac) => finalize_hex(mac.clone(), parts),
            Self::Sha256(mac) => finalize_hex(mac.clone(), parts),
        }
    }
}

fn finalize_hex<M: Mac>(mut mac: M, parts: &[&str]) -> String {
    for part in parts {
        mac.update(part.as_bytes());
    }

    hex::encode(mac.finalize().into_bytes())
}

/// Symmetric secret bound to a keyed-hash algorithm.
///
/// Created from a non-empty secret, then explicitly initialized with
/// [`init()`](SignatureHasher::init) before any signing happens.
///
/// # Design Principles
///
/// - **Fail early**: an empty secret is rejected by the constructor, not on first use
/// - **No shared hashing state**: each signature is computed on a fresh clone of
///   the keyed context, so `&self` signing is safe from many threads at once
/// - **Zeroized secret**: the raw secret bytes are wiped on drop
/// - **Redacted `Debug`**: only the algorithm and init state are printed
///
/// # Example
///
/// ```rust
/// use crumbseal_hasher::{HasherError, SignatureHasher};
///
/// let mut hasher = SignatureHasher::sha1("not-so-secret").expect("Failed to create hasher");
/// assert_eq!(hasher.compute_signature(&["a"]), Err(HasherError::Uninitialized));
///
/// hasher.init().expect("Failed to init()");
/// let signature = hasher
///     .compute_signature(&["name", "value", "1521518443"])
///     .expect("Failed to compute_signature(..)");
/// assert_eq!(signature, "8d2c562f3831063fbc70cd0b35da54aa4e4e730e");
/// ```
pub struct SignatureHasher {
    algorithm: HashAlgorithm,
    secret: Zeroizing<Vec<u8>>,
    context: Option<KeyedContext>,
}

impl fmt::Debug for SignatureHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureHasher")
            .field("algorithm", &self.algorithm)
            .field("secret", &"[REDACTED]")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

impl SignatureHasher {
    /// Creates an uninitialized hasher for `algorithm` keyed with the UTF-8 bytes of `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`HasherError::EmptySecret`] if `secret` is empty.
    pub fn new(algorithm: HashAlgorithm, secret: &str) -> Result<Self, HasherError> {
        if secret.is_empty() {
            return Err(HasherError::EmptySecret);
        }

        Ok(Self {
            algorithm,
            secret: Zeroizing::new(secret.as_bytes().to_vec()),
            context: None,
        })
    }

    /// Creates an uninitialized HMAC-SHA1 hasher.
    ///
    /// # Errors
    ///
    /// Returns [`HasherError::EmptySecret`] if `secret` is empty.
    pub fn sha1(secret: &str) -> Result<Self, HasherError> {
        Self::new(HashAlgorithm::HmacSha1, secret)
    }

    /// Creates an uninitialized HMAC-SHA256 hasher.
    ///
    /// # Errors
    ///
    /// Returns [`HasherError::EmptySecret`] if `secret` is empty.
    pub fn sha256(secret: &str) -> Result<Self, HasherError> {
        Self::new(HashAlgorithm::HmacSha256, secret)
    }

    /// Binds the secret to the keyed-hash algorithm.
    ///
    /// Calling `init()` on an initialized hasher is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`HasherError::InvalidKey`] if the algorithm rejects the secret.
    pub fn init(&mut self) -> Result<(), HasherError> {
        if self.context.is_none() {
            self.context = Some(KeyedContext::new(self.algorithm, &self.secret)?);
        }

        Ok(())
    }

    /// Returns `true` once [`init()`](SignatureHasher::init) succeeded.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.context.is_some()
    }

    /// Returns the keyed-hash algorithm.
    #[inline]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Signs the concatenation of `parts` and returns the digest as lowercase hex.
    ///
    /// No separator is inserted between parts.
    ///
    /// # Errors
    ///
    /// Returns [`HasherError::Uninitialized`] if called before `init()`.
    pub fn compute_signature(&self, parts: &[&str]) -> Result<String, HasherError> {
        let context = self.context.as_ref().ok_or(HasherError::Uninitialized)?;
        let signature = context.sign(parts);

        debug_assert_eq!(signature.len(), self.algorithm.hex_len());

        Ok(signature)
    }

    /// Recomputes the signature of `parts` and compares it with `expected` in constant time.
    ///
    /// # Errors
    ///
    /// Returns [`HasherError::Uninitialized`] if called before `init()`.
    pub fn verify_signature(&self, parts: &[&str], expected: &str) -> Result<bool, HasherError> {
        let computed = self.compute_signature(parts)?;

        Ok(computed.as_bytes().ct_eq(expected.as_bytes()).into())
    }
}
