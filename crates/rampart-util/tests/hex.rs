// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod hex_tests {
    use rampart_util::{bytes_to_hex, hex_to_bytes};

    #[test]
    fn test_hex_to_bytes_rfc_salt() {
        assert_eq!(hex_to_bytes("000102030405060708090a0b0c"), (0..13).collect::<Vec<u8>>());
    }

    #[test]
    fn test_hex_to_bytes_mixed_case() {
        assert_eq!(hex_to_bytes("F0f1F2"), vec![0xf0, 0xf1, 0xf2]);
    }

    #[test]
    fn test_hex_to_bytes_empty() {
        assert!(hex_to_bytes("").is_empty());
    }

    #[test]
    #[should_panic]
    fn test_hex_to_bytes_odd_length() {
        hex_to_bytes("0b0");
    }

    #[test]
    #[should_panic(expected = "invalid hex digits at offset 0")]
    fn test_hex_to_bytes_invalid_digit() {
        hex_to_bytes("zz");
    }

    #[test]
    #[should_panic(expected = "invalid hex digits at offset 2")]
    fn test_hex_to_bytes_non_ascii() {
        // "é" is two bytes, so the string has even byte length.
        hex_to_bytes("0bé");
    }

    #[test]
    #[should_panic(expected = "invalid hex digits")]
    fn test_hex_to_bytes_sign_prefix() {
        hex_to_bytes("+f");
    }

    #[test]
    fn test_bytes_to_hex_lowercase() {
        assert_eq!(bytes_to_hex(&[0x3c, 0xb2, 0x5f, 0xAB]), "3cb25fab");
    }

    #[test]
    fn test_hex_roundtrip_prk() {
        let prk = "077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5";
        assert_eq!(bytes_to_hex(&hex_to_bytes(prk)), prk);
    }
}
