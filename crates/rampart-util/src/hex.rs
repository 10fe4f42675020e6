// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hex conversion for test vectors and failure messages.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

/// Parses a hexadecimal string into bytes.
///
/// Accepts upper and lower case digits. An empty string yields an empty vector.
///
/// # Panics
///
/// Panics on odd length or non-hex characters. Intended for hardcoded test
/// vectors only.
///
/// # Example
///
/// ```
/// use rampart_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("f0f1f2"), vec![0xf0, 0xf1, 0xf2]);
/// ```
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let digits = hex.as_bytes();
    assert!(digits.len() % 2 == 0, "odd-length hex string: {} bytes", digits.len());

    digits
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| match (nibble(pair[0]), nibble(pair[1])) {
            (Some(hi), Some(lo)) => (hi << 4) | lo,
            _ => panic!("invalid hex digits at offset {}", 2 * i),
        })
        .collect()
}

fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Encodes bytes as lowercase hex.
///
/// # Example
///
/// ```
/// use rampart_util::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0x0b, 0xad]), "0bad");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // Writing into a String cannot fail.
        let _ = write!(out, "{b:02x}");
    }
    out
}
