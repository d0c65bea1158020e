// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::traits::{ValueDeserializer, ValueSerializer};
use crate::v1::{V1Deserializer, V1Serializer};
use crate::v2::{V2Deserializer, V2Serializer};
use crate::value::CookieValue;

proptest! {
    #[test]
    fn v1_value_survives_serialization(
        value in any::<String>(),
        timestamp in any::<i64>(),
        signature in "[0-9a-f]{40}"
    ) {
        let original = CookieValue::builder()
            .with_value(value)
            .with_timestamp(timestamp)
            .with_signature(signature)
            .build();

        let parsed = V1Deserializer
            .deserialize(&V1Serializer.serialize(&original))
            .expect("Failed to deserialize(..)");

        prop_assert_eq!(parsed, original);
    }

    #[test]
    fn v2_value_survives_serialization(
        name in "[^|]*",
        value in any::<String>(),
        timestamp in any::<i64>(),
        key_version in any::<i32>(),
        signature in "[0-9a-f]{64}"
    ) {
        let original = CookieValue::builder()
            .with_name(name)
            .with_value(value)
            .with_timestamp(timestamp)
            .with_key_version(key_version)
            .with_signature(signature)
            .build();

        let parsed = V2Deserializer
            .deserialize(&V2Serializer.serialize(&original))
            .expect("Failed to deserialize(..)");

        prop_assert_eq!(parsed, original);
    }

    #[test]
    fn v2_deserialize_never_panics(wire in any::<String>()) {
        let _ = V2Deserializer.deserialize(&wire);
    }

    #[test]
    fn v1_deserialize_never_panics(wire in any::<String>()) {
        let _ = V1Deserializer.deserialize(&wire);
    }
}
