// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Full HKDF: Extract-then-Expand

use log::trace;
use rampart_core::{HashAlg, HkdfError, KeyedHash, hash_len};
use rampart_zero::{SecretBuf, WipingMutGuard};

use crate::expand::{check_output_len, expand_unchecked};
use crate::extract::extract_unchecked;

/// `OKM = Expand(Extract(salt, ikm), info, okm.len())`.
///
/// The PRK lives in a HashLen scratch buffer that is wiped on every exit
/// path. The output bound is checked before anything is allocated or
/// hashed.
///
/// # Errors
///
/// - [`ArgumentError::UnsupportedHash`](crate::ArgumentError::UnsupportedHash)
///   if the provider declines `alg`.
/// - [`ArgumentError::OutputTooLong`](crate::ArgumentError::OutputTooLong)
///   if `okm` exceeds `255 * HashLen`.
/// - [`HkdfError::OutOfMemory`] if scratch storage cannot be allocated.
/// - [`HkdfError::ProviderFailure`] if the provider fails.
///
/// `okm` never holds partial output after an error.
///
/// ```rust
/// # #[cfg(feature = "rustcrypto")]
/// # {
/// use rampart::{HashAlg, RustCryptoHmac, derive};
///
/// let mut aead_key = [0u8; 32];
/// derive(&RustCryptoHmac, HashAlg::Sha256, None, b"shared secret", None, &mut aead_key)
///     .unwrap();
/// # }
/// ```
pub fn derive<P>(
    provider: &P,
    alg: HashAlg,
    salt: Option<&[u8]>,
    ikm: &[u8],
    info: Option<&[u8]>,
    okm: &mut [u8],
) -> Result<(), HkdfError>
where
    P: KeyedHash + ?Sized,
{
    let hash_len = hash_len(provider, alg)?;
    check_output_len(hash_len, okm.len())?;

    trace!(
        "hkdf derive: alg={alg} salt_len={} ikm_len={} info_len={} okm_len={}",
        salt.map_or(0, <[u8]>::len),
        ikm.len(),
        info.map_or(0, <[u8]>::len),
        okm.len()
    );

    if okm.is_empty() {
        return Ok(());
    }

    let mut scratch = SecretBuf::try_zeroed(hash_len)?;
    derive_with_scratch(provider, alg, salt, ikm, info, okm, &mut scratch)
}

/// [`derive`] into a freshly allocated [`SecretBuf`] of `output_len` bytes.
///
/// # Errors
///
/// As [`derive`]. Nothing is allocated when the arguments are invalid.
pub fn derive_secret<P>(
    provider: &P,
    alg: HashAlg,
    salt: Option<&[u8]>,
    ikm: &[u8],
    info: Option<&[u8]>,
    output_len: usize,
) -> Result<SecretBuf, HkdfError>
where
    P: KeyedHash + ?Sized,
{
    check_output_len(hash_len(provider, alg)?, output_len)?;

    let mut okm = SecretBuf::try_zeroed(output_len)?;
    derive(provider, alg, salt, ikm, info, &mut okm)?;

    Ok(okm)
}

/// Extract into `scratch`, then Expand from it.
///
/// `scratch` is HashLen bytes and is all zeros when this returns, whichever
/// step failed.
pub(crate) fn derive_with_scratch<P>(
    provider: &P,
    alg: HashAlg,
    salt: Option<&[u8]>,
    ikm: &[u8],
    info: Option<&[u8]>,
    okm: &mut [u8],
    scratch: &mut [u8],
) -> Result<(), HkdfError>
where
    P: KeyedHash + ?Sized,
{
    let mut prk = WipingMutGuard::from(scratch);

    extract_unchecked(provider, alg, salt, ikm, &mut prk)?;
    expand_unchecked(provider, alg, prk.len(), &prk, info, okm)
}
