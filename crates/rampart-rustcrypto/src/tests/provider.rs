// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_core::{HashAlg, KeyedHash, ProviderError};

use crate::RustCryptoHmac;

#[test]
fn test_all_algorithms_enabled_in_tests() {
    let provider = RustCryptoHmac;

    for alg in HashAlg::ALL {
        assert!(RustCryptoHmac::is_enabled(alg), "{alg}");
        assert_eq!(provider.output_len(alg), Some(alg.output_len()));
        assert_eq!(provider.min_key_len(alg), 1);
    }
}

#[test]
fn test_tag_buffer_too_short() {
    let mut tag = [0u8; 31];
    let result = RustCryptoHmac.mac(HashAlg::Sha256, b"key", &[b"msg"], &mut tag);

    assert_eq!(
        result,
        Err(ProviderError::OutputLengthMismatch {
            alg: HashAlg::Sha256,
            expected: 32,
            actual: 31,
        })
    );
    assert_eq!(tag, [0u8; 31]);
}

#[test]
fn test_tag_buffer_too_long() {
    let mut tag = [0u8; 65];
    let result = RustCryptoHmac.mac(HashAlg::Sha512, b"key", &[b"msg"], &mut tag);

    assert!(matches!(
        result,
        Err(ProviderError::OutputLengthMismatch { expected: 64, actual: 65, .. })
    ));
}

#[test]
fn test_long_key_is_hashed() {
    let provider = RustCryptoHmac;
    let long_key = [0x42u8; 65];
    let block_key = [0x42u8; 64];

    let mut long_tag = [0u8; 32];
    let mut block_tag = [0u8; 32];
    provider
        .mac(HashAlg::Sha256, &long_key, &[b"info"], &mut long_tag)
        .expect("Failed to mac(..)");
    provider
        .mac(HashAlg::Sha256, &block_key, &[b"info"], &mut block_tag)
        .expect("Failed to mac(..)");

    assert_ne!(long_tag, block_tag);
}

#[test]
fn test_empty_message_parts() {
    let provider = RustCryptoHmac;
    let mut none = [0u8; 20];
    let mut empty_parts = [0u8; 20];

    provider
        .mac(HashAlg::Sha1, b"prk", &[], &mut none)
        .expect("Failed to mac(..)");
    provider
        .mac(HashAlg::Sha1, b"prk", &[&[], &[]], &mut empty_parts)
        .expect("Failed to mac(..)");

    assert_eq!(none, empty_parts);
}
