// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;

use crate::consts::MAX_EXPAND_BLOCKS;
use crate::error::{ArgumentError, HkdfError};

/// Hash function underlying HMAC.
///
/// Sizes are the FIPS 180-4 values. A provider may still decline an
/// algorithm (see [`KeyedHash::output_len`](crate::KeyedHash::output_len)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlg {
    /// SHA-1 (20-byte output). Only for interoperability with RFC 5869 A.4-A.7.
    Sha1,
    /// SHA-224 (28-byte output).
    Sha224,
    /// SHA-256 (32-byte output).
    Sha256,
    /// SHA-384 (48-byte output).
    Sha384,
    /// SHA-512 (64-byte output).
    Sha512,
}

impl HashAlg {
    /// Every algorithm, in ascending output size.
    pub const ALL: [HashAlg; 5] = [
        HashAlg::Sha1,
        HashAlg::Sha224,
        HashAlg::Sha256,
        HashAlg::Sha384,
        HashAlg::Sha512,
    ];

    /// Digest size in bytes (HashLen).
    pub const fn output_len(self) -> usize {
        match self {
            HashAlg::Sha1 => 20,
            HashAlg::Sha224 => 28,
            HashAlg::Sha256 => 32,
            HashAlg::Sha384 => 48,
            HashAlg::Sha512 => 64,
        }
    }

    /// Internal block size in bytes; HMAC zero-pads shorter keys to this.
    pub const fn block_len(self) -> usize {
        match self {
            HashAlg::Sha1 | HashAlg::Sha224 | HashAlg::Sha256 => 64,
            HashAlg::Sha384 | HashAlg::Sha512 => 128,
        }
    }

    /// Largest OKM HKDF can produce with this hash: `255 * HashLen`.
    pub const fn max_output_len(self) -> usize {
        MAX_EXPAND_BLOCKS * self.output_len()
    }

    /// Canonical name, e.g. `"SHA-256"`.
    pub const fn name(self) -> &'static str {
        match self {
            HashAlg::Sha1 => "SHA-1",
            HashAlg::Sha224 => "SHA-224",
            HashAlg::Sha256 => "SHA-256",
            HashAlg::Sha384 => "SHA-384",
            HashAlg::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for HashAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlg {
    type Err = HkdfError;

    /// Accepts `SHA-256`, `sha256` and `Sha_256`: a case-insensitive `sha`
    /// prefix, at most one `-` or `_`, then the digest size.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .get(..3)
            .filter(|prefix| prefix.eq_ignore_ascii_case("sha"))
            .map(|_| &s[3..])
            .map(|rest| rest.strip_prefix(['-', '_']).unwrap_or(rest));

        HashAlg::ALL
            .into_iter()
            .find(|alg| alg.name().strip_prefix("SHA-") == digits)
            .ok_or(HkdfError::InvalidArgument(ArgumentError::UnknownHashName))
    }
}
