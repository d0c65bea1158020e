// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for crumbseal crates.
//!
//! Reference vectors produced by Tornado's `create_signed_value` with the
//! secrets below and a frozen timestamp.
//!
//! ## License
//!
//! GPL-3.0-only

mod tamper;
mod vectors;

pub use tamper::{flip_char_at, signature_range};
pub use vectors::{
    FROZEN_TIMESTAMP, ROTATED_SECRET, SECRET, V1_VECTORS, V1Vector, V2_VECTORS, V2Vector,
};
