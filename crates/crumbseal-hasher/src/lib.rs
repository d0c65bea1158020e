// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keyed-hash signer for signed cookie values.
//!
//! Wraps a symmetric secret and an HMAC algorithm (HMAC-SHA1 or HMAC-SHA256)
//! and exposes one-shot multi-part signing with lowercase hex output.
//!
//! The secret is bound to the algorithm once, at [`SignatureHasher::init`].
//! Every signing call then works on its own clone of the keyed context, so a
//! single hasher can be shared between threads without locking.
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//!
//! ## Example
//!
//! ```rust
//! use crumbseal_hasher::SignatureHasher;
//!
//! let mut hasher = SignatureHasher::sha256("not-so-secret").expect("Failed to create hasher");
//! hasher.init().expect("Failed to init()");
//!
//! let signature = hasher
//!     .compute_signature(&["first", "|", "second"])
//!     .expect("Failed to compute_signature(..)");
//! assert_eq!(signature.len(), 64);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod algorithm;
mod error;
mod hasher;

pub use algorithm::HashAlgorithm;
pub use error::HasherError;
pub use hasher::SignatureHasher;
