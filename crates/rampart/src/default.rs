// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF over [`RustCryptoHmac`].
//!
//! Same contracts as the crate-level functions, minus the provider argument.
//!
//! ```rust
//! use rampart::HashAlg;
//!
//! let prk = rampart::default::extract(HashAlg::Sha256, None, b"ikm").unwrap();
//! let mut okm = [0u8; 64];
//! rampart::default::expand(HashAlg::Sha256, &prk, Some(b"v1".as_slice()), &mut okm).unwrap();
//! ```

use rampart_core::{HashAlg, HkdfError};
use rampart_rustcrypto::RustCryptoHmac;
use rampart_zero::SecretBuf;

use crate::Prk;

/// [`crate::extract`] with [`RustCryptoHmac`].
pub fn extract(alg: HashAlg, salt: Option<&[u8]>, ikm: &[u8]) -> Result<Prk, HkdfError> {
    crate::extract(&RustCryptoHmac, alg, salt, ikm)
}

/// [`crate::expand`] with [`RustCryptoHmac`].
pub fn expand(
    alg: HashAlg,
    prk: &[u8],
    info: Option<&[u8]>,
    okm: &mut [u8],
) -> Result<(), HkdfError> {
    crate::expand(&RustCryptoHmac, alg, prk, info, okm)
}

/// [`crate::derive`] with [`RustCryptoHmac`].
pub fn derive(
    alg: HashAlg,
    salt: Option<&[u8]>,
    ikm: &[u8],
    info: Option<&[u8]>,
    okm: &mut [u8],
) -> Result<(), HkdfError> {
    crate::derive(&RustCryptoHmac, alg, salt, ikm, info, okm)
}

/// [`crate::derive_secret`] with [`RustCryptoHmac`].
pub fn derive_secret(
    alg: HashAlg,
    salt: Option<&[u8]>,
    ikm: &[u8],
    info: Option<&[u8]>,
    output_len: usize,
) -> Result<SecretBuf, HkdfError> {
    crate::derive_secret(&RustCryptoHmac, alg, salt, ikm, info, output_len)
}
