// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC known answers (RFC 2202 and RFC 4231 test cases 1 and 2).

use rampart_core::{HashAlg, KeyedHash};
use rampart_util::{bytes_to_hex, hex_to_bytes};

use crate::RustCryptoHmac;

struct KnownAnswer {
    alg: HashAlg,
    key: &'static [u8],
    data: &'static [u8],
    tag: &'static str,
}

const KEY_0B: &[u8] = &[0x0b; 20];

fn known_answers() -> [KnownAnswer; 10] {
    [
        KnownAnswer {
            alg: HashAlg::Sha1,
            key: KEY_0B,
            data: b"Hi There",
            tag: "b617318655057264e28bc0b6fb378c8ef146be00",
        },
        KnownAnswer {
            alg: HashAlg::Sha1,
            key: b"Jefe",
            data: b"what do ya want for nothing?",
            tag: "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79",
        },
        KnownAnswer {
            alg: HashAlg::Sha224,
            key: KEY_0B,
            data: b"Hi There",
            tag: "896fb1128abbdf196832107cd49df33f47b4b1169912ba4f53684b22",
        },
        KnownAnswer {
            alg: HashAlg::Sha224,
            key: b"Jefe",
            data: b"what do ya want for nothing?",
            tag: "a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44",
        },
        KnownAnswer {
            alg: HashAlg::Sha256,
            key: KEY_0B,
            data: b"Hi There",
            tag: "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
        },
        KnownAnswer {
            alg: HashAlg::Sha256,
            key: b"Jefe",
            data: b"what do ya want for nothing?",
            tag: "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
        },
        KnownAnswer {
            alg: HashAlg::Sha384,
            key: KEY_0B,
            data: b"Hi There",
            tag: "afd03944d84895626b0825f4ab46907f15f9dadbe4101ec682aa034c7cebc59c\
                  faea9ea9076ede7f4af152e8b2fa9cb6",
        },
        KnownAnswer {
            alg: HashAlg::Sha384,
            key: b"Jefe",
            data: b"what do ya want for nothing?",
            tag: "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e\
                  8e2240ca5e69e2c78b3239ecfab21649",
        },
        KnownAnswer {
            alg: HashAlg::Sha512,
            key: KEY_0B,
            data: b"Hi There",
            tag: "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
                  daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
        },
        KnownAnswer {
            alg: HashAlg::Sha512,
            key: b"Jefe",
            data: b"what do ya want for nothing?",
            tag: "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
                  9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
        },
    ]
}

#[test]
fn test_hmac_known_answers() {
    let provider = RustCryptoHmac;
    let mut failures = Vec::new();

    for ka in known_answers() {
        let mut tag = vec![0u8; ka.alg.output_len()];
        provider
            .mac(ka.alg, ka.key, &[ka.data], &mut tag)
            .expect("Failed to mac(..)");

        if tag != hex_to_bytes(ka.tag) {
            failures.push(format!(
                "HMAC-{} key={:?}: expected {}, got {}",
                ka.alg,
                ka.key,
                ka.tag,
                bytes_to_hex(&tag)
            ));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

/// HMAC zero-pads keys to the block size, so an empty key and a one-byte
/// zero key produce the same tag. Extract relies on this for absent salts.
#[test]
fn test_empty_key_equals_single_zero_byte() {
    let provider = RustCryptoHmac;

    for alg in HashAlg::ALL {
        let mut empty_key = vec![0u8; alg.output_len()];
        let mut zero_byte = vec![0u8; alg.output_len()];
        let mut hash_len_zeros = vec![0u8; alg.output_len()];

        provider
            .mac(alg, &[], &[b"ikm"], &mut empty_key)
            .expect("Failed to mac(..)");
        provider
            .mac(alg, &[0], &[b"ikm"], &mut zero_byte)
            .expect("Failed to mac(..)");
        provider
            .mac(alg, &vec![0u8; alg.output_len()], &[b"ikm"], &mut hash_len_zeros)
            .expect("Failed to mac(..)");

        assert_eq!(empty_key, zero_byte, "{alg}");
        assert_eq!(zero_byte, hash_len_zeros, "{alg}");
    }
}
