// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Signature hasher misuse.
///
/// These are configuration errors: they surface when a hasher is created or
/// initialized, never as a consequence of untrusted input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherError {
    /// The secret key is empty.
    #[error("Unallowed null or empty secret key")]
    EmptySecret,

    /// The keyed-hash primitive rejected the secret.
    ///
    /// Mirrors the `KeyInit::new_from_slice` error. HMAC takes keys of any
    /// length, so neither built-in algorithm returns it today.
    #[error("secret key rejected by the keyed-hash algorithm")]
    InvalidKey,

    /// Signing was requested before [`init`](crate::SignatureHasher::init).
    #[error("signature hasher used before init()")]
    Uninitialized,
}
