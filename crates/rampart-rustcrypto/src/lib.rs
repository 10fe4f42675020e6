// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! [`KeyedHash`] provider backed by the RustCrypto `hmac`, `sha1` and `sha2`
//! crates.
//!
//! Which hashes are available is a build-time choice:
//!
//! | feature | algorithms |
//! |---|---|
//! | `sha2` (default) | SHA-224, SHA-256, SHA-384, SHA-512 |
//! | `sha1` | SHA-1 |
//!
//! A disabled algorithm reports `output_len() == None`, so HKDF rejects it
//! up front as an unsupported hash.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use rampart_core::{HashAlg, KeyedHash, ProviderError};
use rampart_util::zeroize_slice;

/// Stateless HMAC provider over RustCrypto hashes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RustCryptoHmac;

impl RustCryptoHmac {
    /// Returns `true` if `alg` was compiled in.
    pub const fn is_enabled(alg: HashAlg) -> bool {
        match alg {
            HashAlg::Sha1 => cfg!(feature = "sha1"),
            HashAlg::Sha224 | HashAlg::Sha256 | HashAlg::Sha384 | HashAlg::Sha512 => {
                cfg!(feature = "sha2")
            }
        }
    }
}

impl KeyedHash for RustCryptoHmac {
    fn output_len(&self, alg: HashAlg) -> Option<usize> {
        Self::is_enabled(alg).then_some(alg.output_len())
    }

    fn mac(
        &self,
        alg: HashAlg,
        key: &[u8],
        message: &[&[u8]],
        out: &mut [u8],
    ) -> Result<(), ProviderError> {
        if out.len() != alg.output_len() {
            return Err(ProviderError::OutputLengthMismatch {
                alg,
                expected: alg.output_len(),
                actual: out.len(),
            });
        }

        match alg {
            #[cfg(feature = "sha1")]
            HashAlg::Sha1 => mac_into::<Hmac<sha1::Sha1>>(alg, key, message, out),
            #[cfg(feature = "sha2")]
            HashAlg::Sha224 => mac_into::<Hmac<sha2::Sha224>>(alg, key, message, out),
            #[cfg(feature = "sha2")]
            HashAlg::Sha256 => mac_into::<Hmac<sha2::Sha256>>(alg, key, message, out),
            #[cfg(feature = "sha2")]
            HashAlg::Sha384 => mac_into::<Hmac<sha2::Sha384>>(alg, key, message, out),
            #[cfg(feature = "sha2")]
            HashAlg::Sha512 => mac_into::<Hmac<sha2::Sha512>>(alg, key, message, out),
            #[allow(unreachable_patterns)]
            _ => Err(ProviderError::Unavailable(alg)),
        }
    }
}

/// Streams `message` through `M` keyed with `key` and writes the tag to `out`.
///
/// `out.len()` must equal the tag size of `M`.
fn mac_into<M>(
    alg: HashAlg,
    key: &[u8],
    message: &[&[u8]],
    out: &mut [u8],
) -> Result<(), ProviderError>
where
    M: Mac + KeyInit,
{
    let mut mac = <M as Mac>::new_from_slice(key)
        .map_err(|_| ProviderError::InvalidKeyLength { alg, len: key.len() })?;

    for part in message {
        mac.update(part);
    }

    let mut tag = mac.finalize().into_bytes();
    out.copy_from_slice(&tag);
    zeroize_slice(&mut tag);

    Ok(())
}
