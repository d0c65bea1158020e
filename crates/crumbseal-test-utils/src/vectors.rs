// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Primary secret (V1 key, V2 slot 0).
pub const SECRET: &str = "not-so-secret";

/// Second V2 secret (slot 1).
pub const ROTATED_SECRET: &str = "like-a-ninja";

/// Timestamp every vector was signed with.
pub const FROZEN_TIMESTAMP: i64 = 1521518443;

/// V1 vector: `name`/`value` signed with [`SECRET`] at [`FROZEN_TIMESTAMP`].
#[derive(Debug, Clone, Copy)]
pub struct V1Vector {
    pub name: &'static str,
    pub value: &'static str,
    pub encoded: &'static str,
    pub signature: &'static str,
}

/// V2 vector signed at [`FROZEN_TIMESTAMP`] with the key in slot `key_version`
/// of `[SECRET, ROTATED_SECRET]`.
#[derive(Debug, Clone, Copy)]
pub struct V2Vector {
    pub name: &'static str,
    pub value: &'static str,
    pub key_version: i32,
    pub encoded: &'static str,
    pub unsigned: &'static str,
    pub signature: &'static str,
}

pub const V1_VECTORS: &[V1Vector] = &[
    V1Vector {
        name: "name",
        value: "value",
        encoded: "value|1521518443|8d2c562f3831063fbc70cd0b35da54aa4e4e730e",
        signature: "8d2c562f3831063fbc70cd0b35da54aa4e4e730e",
    },
    V1Vector {
        name: "empty",
        value: "",
        encoded: "|1521518443|c5a458437f54c606003f809a401dd44d539eb025",
        signature: "c5a458437f54c606003f809a401dd44d539eb025",
    },
    V1Vector {
        name: "tricky",
        value: "trick4|Str!n€",
        encoded: "trick4|Str!n€|1521518443|4159ecdafe58baf080d68d96eb4efd6d730795d0",
        signature: "4159ecdafe58baf080d68d96eb4efd6d730795d0",
    },
    V1Vector {
        name: "tricky2",
        value: "tricky|String|the|revenge",
        encoded: "tricky|String|the|revenge|1521518443|013403d99c1dfc22a0d7762d924a25147624cc6c",
        signature: "013403d99c1dfc22a0d7762d924a25147624cc6c",
    },
];

pub const V2_VECTORS: &[V2Vector] = &[
    V2Vector {
        name: "one",
        value: "simple value",
        key_version: 0,
        encoded: "2|1:0|10:1521518443|3:one|16:c2ltcGxlIHZhbHVl|94639b39df48c578b6396f7e02cad0cb3c496a7a1440107ef0182c8fb35ecfbb",
        unsigned: "2|1:0|10:1521518443|3:one|16:c2ltcGxlIHZhbHVl",
        signature: "94639b39df48c578b6396f7e02cad0cb3c496a7a1440107ef0182c8fb35ecfbb",
    },
    V2Vector {
        name: "two",
        value: "",
        key_version: 1,
        encoded: "2|1:1|10:1521518443|3:two|0:|4adc7cb305a8c03144e848df0e6fbe73736ff3d0645d7ad5f8b1c530718c50cf",
        unsigned: "2|1:1|10:1521518443|3:two|0:",
        signature: "4adc7cb305a8c03144e848df0e6fbe73736ff3d0645d7ad5f8b1c530718c50cf",
    },
    V2Vector {
        name: "three",
        value: "'|/unw@nt€d ch@r$?",
        key_version: 0,
        encoded: "2|1:0|10:1521518443|5:three|28:J3wvdW53QG504oKsZCBjaEByJD8=|0e768d266d14412bae46aa4212809c754b9dca800e43b95dea264b406731cd6f",
        unsigned: "2|1:0|10:1521518443|5:three|28:J3wvdW53QG504oKsZCBjaEByJD8=",
        signature: "0e768d266d14412bae46aa4212809c754b9dca800e43b95dea264b406731cd6f",
    },
    V2Vector {
        name: "name",
        value: "value",
        key_version: 0,
        encoded: "2|1:0|10:1521518443|4:name|8:dmFsdWU=|80d021ad66d8ff3187d95a9203890d7c7bf7da0b995c54671203729b6f467961",
        unsigned: "2|1:0|10:1521518443|4:name|8:dmFsdWU=",
        signature: "80d021ad66d8ff3187d95a9203890d7c7bf7da0b995c54671203729b6f467961",
    },
];
