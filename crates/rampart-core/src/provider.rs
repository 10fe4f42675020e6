// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keyed-hash provider seam.

use crate::error::{ArgumentError, HkdfError, ProviderError};
use crate::hash_alg::HashAlg;

/// HMAC over named hash algorithms.
///
/// Implementations must be deterministic and hold no per-call state; the
/// HKDF functions take providers by shared reference and may call
/// [`mac`](KeyedHash::mac) up to 256 times per derivation.
pub trait KeyedHash {
    /// Native tag size of `alg`, or `None` if this provider cannot compute it.
    fn output_len(&self, alg: HashAlg) -> Option<usize>;

    /// Shortest key HMAC-`alg` accepts.
    ///
    /// Extract zero-pads any salt shorter than this, the single zero byte
    /// standing in for an absent salt included. Padding stops at the block
    /// size of `alg`, so the tag is unchanged.
    fn min_key_len(&self, _alg: HashAlg) -> usize {
        1
    }

    /// Computes `HMAC-alg(key, message[0] || message[1] || ...)` into `out`.
    ///
    /// `out.len()` equals `output_len(alg)`.
    ///
    /// # Errors
    ///
    /// Any [`ProviderError`]; the HKDF layer passes it through unchanged.
    fn mac(
        &self,
        alg: HashAlg,
        key: &[u8],
        message: &[&[u8]],
        out: &mut [u8],
    ) -> Result<(), ProviderError>;
}

impl<P: KeyedHash + ?Sized> KeyedHash for &P {
    fn output_len(&self, alg: HashAlg) -> Option<usize> {
        (**self).output_len(alg)
    }

    fn min_key_len(&self, alg: HashAlg) -> usize {
        (**self).min_key_len(alg)
    }

    fn mac(
        &self,
        alg: HashAlg,
        key: &[u8],
        message: &[&[u8]],
        out: &mut [u8],
    ) -> Result<(), ProviderError> {
        (**self).mac(alg, key, message, out)
    }
}

/// Resolves HashLen for `alg` through `provider`.
///
/// # Errors
///
/// [`ArgumentError::UnsupportedHash`] if the provider declines `alg` or
/// reports a zero-length tag.
pub fn hash_len<P: KeyedHash + ?Sized>(provider: &P, alg: HashAlg) -> Result<usize, HkdfError> {
    match provider.output_len(alg) {
        Some(len) if len > 0 => Ok(len),
        _ => Err(ArgumentError::UnsupportedHash(alg).into()),
    }
}
