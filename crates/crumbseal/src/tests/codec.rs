// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::thread;

use cookie::Cookie;
use crumbseal_format::FormatVersion;
use crumbseal_test_utils::{FROZEN_TIMESTAMP, ROTATED_SECRET, SECRET, V1_VECTORS, V2_VECTORS};

use crate::codec::CookieCodec;
use crate::config::CodecConfig;
use crate::error::{CodecError, ConfigError};

fn assert_send_sync<T: Send + Sync>() {}

// =============================================================================
// CookieCodec
// =============================================================================

#[test]
fn test_codec_is_send_sync() {
    assert_send_sync::<CookieCodec>();
    assert_send_sync::<CodecError>();
}

#[test]
fn test_codecs_share_nothing() {
    let first = CookieCodec::builder(FormatVersion::V2)
        .with_secret_key(SECRET)
        .with_timestamp(FROZEN_TIMESTAMP)
        .build()
        .expect("Failed to build()");
    let second = CookieCodec::builder(FormatVersion::V2)
        .with_secret_key(ROTATED_SECRET)
        .with_timestamp(FROZEN_TIMESTAMP)
        .build()
        .expect("Failed to build()");

    let encoded = first
        .encode(&Cookie::new("one", "simple value"))
        .expect("Failed to encode(..)");

    assert!(first.decode(&encoded).is_ok());
    assert_eq!(second.decode(&encoded), Err(CodecError::SignatureMismatch));
}

#[test]
fn test_versions_do_not_read_each_other() {
    let v1 = CookieCodec::builder(FormatVersion::V1)
        .with_secret_key(SECRET)
        .build()
        .expect("Failed to build()");
    let v2 = CookieCodec::builder(FormatVersion::V2)
        .with_secret_key(SECRET)
        .build()
        .expect("Failed to build()");

    let v2_wire = Cookie::new(V2_VECTORS[0].name, V2_VECTORS[0].encoded);
    let v1_wire = Cookie::new(V1_VECTORS[0].name, V1_VECTORS[0].encoded);

    assert!(v1.decode(&v2_wire).is_err());
    assert!(matches!(v2.decode(&v1_wire), Err(CodecError::Format(_))));
}

#[test]
fn test_round_trip_with_clock() {
    for version in [FormatVersion::V1, FormatVersion::V2] {
        let codec = CookieCodec::builder(version)
            .with_secret_key(SECRET)
            .build()
            .expect("Failed to build()");
        let source = Cookie::new("session", "user=42|role=admin");

        let encoded = codec.encode(&source).expect("Failed to encode(..)");
        let value = codec.decode_value(&encoded).expect("Failed to decode_value(..)");

        assert_eq!(value.value(), source.value());
        assert!(value.timestamp() > FROZEN_TIMESTAMP);
    }
}

#[test]
fn test_concurrent_encode_decode() {
    let codec = Arc::new(
        CookieCodec::builder(FormatVersion::V2)
            .with_secret_key(SECRET)
            .with_secret_key(ROTATED_SECRET)
            .with_timestamp(FROZEN_TIMESTAMP)
            .build()
            .expect("Failed to build()"),
    );

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                for vector in V2_VECTORS {
                    let encoded = codec
                        .encode_with_key_version(
                            &Cookie::new(vector.name, vector.value),
                            vector.key_version,
                        )
                        .expect("Failed to encode_with_key_version(..)");
                    assert_eq!(encoded.value(), vector.encoded, "worker {worker}");

                    let decoded = codec.decode(&encoded).expect("Failed to decode(..)");
                    assert_eq!(decoded.value(), vector.value, "worker {worker}");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Failed to join()");
    }
}

// =============================================================================
// from_config()
// =============================================================================

#[test]
fn test_from_config_matches_builder() {
    let config = CodecConfig {
        version: FormatVersion::V2,
        secret_keys: vec![SECRET.to_owned(), ROTATED_SECRET.to_owned()],
        timestamp: Some(FROZEN_TIMESTAMP),
    };

    let codec = CookieCodec::from_config(&config).expect("Failed to from_config(..)");

    assert_eq!(codec.version(), FormatVersion::V2);
    assert_eq!(codec.key_count(), 2);

    for vector in V2_VECTORS {
        let encoded = codec
            .encode_with_key_version(&Cookie::new(vector.name, vector.value), vector.key_version)
            .expect("Failed to encode_with_key_version(..)");

        assert_eq!(encoded.value(), vector.encoded);
    }
}

#[test]
fn test_from_config_without_secret_keys() {
    let config = CodecConfig::new(FormatVersion::V1);

    let result = CookieCodec::from_config(&config);

    assert!(matches!(result, Err(ConfigError::MissingSecretKey)));
}
