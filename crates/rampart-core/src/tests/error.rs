// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_zero::AllocError;

use crate::error::{ArgumentError, HkdfError, ProviderError};
use crate::hash_alg::HashAlg;

#[test]
fn test_argument_error_converts() {
    let err: HkdfError = ArgumentError::PrkTooShort {
        actual: 16,
        required: 32,
    }
    .into();

    assert_eq!(
        err,
        HkdfError::InvalidArgument(ArgumentError::PrkTooShort {
            actual: 16,
            required: 32
        })
    );
}

#[test]
fn test_alloc_error_converts_to_out_of_memory() {
    let err: HkdfError = AllocError { requested: 64 }.into();
    assert_eq!(err, HkdfError::OutOfMemory(AllocError { requested: 64 }));
}

#[test]
fn test_provider_error_passes_through() {
    let source = ProviderError::Backend("engine disabled");
    let err: HkdfError = source.into();

    assert_eq!(err, HkdfError::ProviderFailure(source));
}

#[test]
fn test_display_messages() {
    let too_long: HkdfError = ArgumentError::OutputTooLong {
        requested: 8161,
        max: 8160,
    }
    .into();
    assert_eq!(
        too_long.to_string(),
        "invalid argument: requested 8161 output bytes, at most 8160 (255 * HashLen) allowed"
    );

    let unsupported: HkdfError = ArgumentError::UnsupportedHash(HashAlg::Sha1).into();
    assert_eq!(
        unsupported.to_string(),
        "invalid argument: hash algorithm SHA-1 is not supported by the keyed-hash provider"
    );

    let key: HkdfError = ProviderError::InvalidKeyLength {
        alg: HashAlg::Sha256,
        len: 0,
    }
    .into();
    assert_eq!(
        key.to_string(),
        "keyed-hash provider failure: HMAC-SHA-256 rejected a 0-byte key"
    );
}

#[test]
fn test_error_source_chain() {
    use core::error::Error;

    let err: HkdfError = ProviderError::Unavailable(HashAlg::Sha384).into();
    let source = err.source().expect("ProviderFailure should expose its source");

    assert_eq!(source.to_string(), "HMAC-SHA-384 is disabled in this build");
}
