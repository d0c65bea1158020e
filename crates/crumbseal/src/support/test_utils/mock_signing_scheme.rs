// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicUsize, Ordering};

use cookie::Cookie;
use crumbseal_format::{CookieValue, FormatError, FormatVersion};
use crumbseal_hasher::SignatureHasher;

use crate::error::CodecError;
use crate::traits::SigningScheme;
use crate::v2::V2Codec;

/// Configurable behavior for [`MockSigningScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockSigningSchemeBehaviour {
    /// Normal operation (delegates to a real V2 scheme).
    None,
    /// `read_value` fails with a format error.
    FailAtReadValue,
    /// `compute_signature` fails as if the key slot did not exist.
    FailAtComputeSignature,
    /// `verify_signature` reports a mismatch.
    RejectSignature,
}

/// Mock signing scheme for testing.
///
/// Wraps [`V2Codec`] but allows simulating failures via [`MockSigningSchemeBehaviour`],
/// and counts how many times a signature was computed or verified.
pub struct MockSigningScheme {
    inner: V2Codec,
    behaviour: MockSigningSchemeBehaviour,
    signature_calls: AtomicUsize,
}

impl MockSigningScheme {
    /// Creates a mock keyed with `secret` and a fixed `timestamp`.
    pub fn new(secret: &str, timestamp: i64, behaviour: MockSigningSchemeBehaviour) -> Self {
        let mut hasher = SignatureHasher::sha256(secret).expect("Failed to sha256(..)");
        hasher.init().expect("Failed to init()");

        Self {
            inner: V2Codec::new(vec![hasher], Some(timestamp)),
            behaviour,
            signature_calls: AtomicUsize::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockSigningSchemeBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of `compute_signature` / `verify_signature` calls so far.
    pub fn signature_calls(&self) -> usize {
        self.signature_calls.load(Ordering::Relaxed)
    }
}

impl SigningScheme for MockSigningScheme {
    fn version(&self) -> FormatVersion {
        self.inner.version()
    }

    fn fixed_timestamp(&self) -> Option<i64> {
        self.inner.fixed_timestamp()
    }

    fn read_value(&self, source: &Cookie<'_>) -> Result<CookieValue, CodecError> {
        match self.behaviour {
            MockSigningSchemeBehaviour::FailAtReadValue => {
                Err(FormatError::FieldCount { expected: 6, actual: 1 }.into())
            }
            _ => self.inner.read_value(source),
        }
    }

    fn write_value(&self, value: &CookieValue) -> String {
        self.inner.write_value(value)
    }

    fn compute_signature(&self, value: &CookieValue) -> Result<String, CodecError> {
        self.signature_calls.fetch_add(1, Ordering::Relaxed);

        match self.behaviour {
            MockSigningSchemeBehaviour::FailAtComputeSignature => {
                Err(CodecError::UnknownKeyVersion(value.key_version()))
            }
            _ => self.inner.compute_signature(value),
        }
    }

    fn verify_signature(&self, value: &CookieValue) -> Result<bool, CodecError> {
        self.signature_calls.fetch_add(1, Ordering::Relaxed);

        match self.behaviour {
            MockSigningSchemeBehaviour::RejectSignature => Ok(false),
            _ => self.inner.verify_signature(value),
        }
    }
}
