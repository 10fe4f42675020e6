// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::str::FromStr;

use crate::consts::MAX_EXPAND_BLOCKS;
use crate::error::{ArgumentError, HkdfError};
use crate::hash_alg::HashAlg;

macro_rules! hash_alg_size_tests {
    ($($alg:ident => ($output:expr, $block:expr, $name:expr)),* $(,)?) => {
        $(
            pastey::paste! {
                #[test]
                fn [<test_ $alg:lower _sizes>]() {
                    let alg = HashAlg::$alg;

                    assert_eq!(alg.output_len(), $output);
                    assert_eq!(alg.block_len(), $block);
                    assert_eq!(alg.max_output_len(), 255 * $output);
                    assert!(alg.block_len() >= alg.output_len());
                }

                #[test]
                fn [<test_ $alg:lower _name_roundtrip>]() {
                    let alg = HashAlg::$alg;

                    assert_eq!(alg.name(), $name);
                    assert_eq!(alg.to_string(), $name);
                    assert_eq!(HashAlg::from_str($name), Ok(alg));
                }
            }
        )*
    };
}

hash_alg_size_tests! {
    Sha1 => (20, 64, "SHA-1"),
    Sha224 => (28, 64, "SHA-224"),
    Sha256 => (32, 64, "SHA-256"),
    Sha384 => (48, 128, "SHA-384"),
    Sha512 => (64, 128, "SHA-512"),
}

#[test]
fn test_rfc5869_max_output_sha256() {
    assert_eq!(HashAlg::Sha256.max_output_len(), 8160);
    assert_eq!(MAX_EXPAND_BLOCKS, 255);
}

#[test]
fn test_from_str_accepts_spellings() {
    for name in ["sha256", "SHA256", "Sha-256", "sha_256", "SHA-256"] {
        assert_eq!(name.parse::<HashAlg>(), Ok(HashAlg::Sha256), "{name}");
    }
    assert_eq!("sha1".parse::<HashAlg>(), Ok(HashAlg::Sha1));
    assert_eq!("SHA-512".parse::<HashAlg>(), Ok(HashAlg::Sha512));
}

#[test]
fn test_from_str_rejects_unknown() {
    let expected = Err(HkdfError::InvalidArgument(ArgumentError::UnknownHashName));

    for name in ["", "md5", "sha3-256", "sha2560", "sha-25", "blake3", "sha", "sha-"] {
        assert_eq!(name.parse::<HashAlg>(), expected, "{name}");
    }
}

#[test]
fn test_from_str_rejects_stray_separators() {
    let expected = Err(HkdfError::InvalidArgument(ArgumentError::UnknownHashName));

    for name in ["s-h-a-2-5-6", "__sha256__", "sha--256", "sha-_256", "sha256-", "-sha256"] {
        assert_eq!(name.parse::<HashAlg>(), expected, "{name}");
    }
}

#[test]
fn test_from_str_rejects_non_ascii_prefix() {
    let expected = Err(HkdfError::InvalidArgument(ArgumentError::UnknownHashName));

    assert_eq!("šha256".parse::<HashAlg>(), expected);
    assert_eq!("sh".parse::<HashAlg>(), expected);
}

#[test]
fn test_all_is_ascending() {
    assert!(
        HashAlg::ALL
            .windows(2)
            .all(|w| w[0].output_len() < w[1].output_len())
    );
}
