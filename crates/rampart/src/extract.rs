// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF-Extract per RFC 5869 Section 2.2

use log::trace;
use rampart_core::{ArgumentError, HashAlg, HkdfError, KeyedHash, hash_len};
use rampart_util::zeroize_slice;
use rampart_zero::SecretBuf;

use crate::Prk;

/// `PRK = HMAC-Hash(salt, IKM)`.
///
/// An absent or empty `salt` stands for HashLen zero bytes. HMAC zero-pads
/// keys to the block size, so a single `0x00` key byte gives the same PRK
/// and is what the provider receives. A salt shorter than the provider's
/// [`min_key_len`](KeyedHash::min_key_len) is zero-padded up to it.
///
/// # Errors
///
/// - [`ArgumentError::UnsupportedHash`] if the provider declines `alg`.
/// - [`HkdfError::OutOfMemory`] if the PRK cannot be allocated.
/// - [`HkdfError::ProviderFailure`] if the provider fails.
pub fn extract<P>(
    provider: &P,
    alg: HashAlg,
    salt: Option<&[u8]>,
    ikm: &[u8],
) -> Result<Prk, HkdfError>
where
    P: KeyedHash + ?Sized,
{
    let hash_len = hash_len(provider, alg)?;
    trace!(
        "hkdf extract: alg={alg} salt_len={} ikm_len={}",
        salt.map_or(0, <[u8]>::len),
        ikm.len()
    );

    let mut prk = SecretBuf::try_zeroed(hash_len)?;
    extract_unchecked(provider, alg, salt, ikm, &mut prk)?;

    Ok(prk)
}

/// [`extract`] into caller storage.
///
/// Writes HashLen bytes to the front of `prk_out` and returns HashLen. Bytes
/// past HashLen are left untouched. On a provider failure the written region
/// is zeroed before the error returns.
///
/// # Errors
///
/// As [`extract`], plus [`ArgumentError::BufferTooShort`] if `prk_out` is
/// shorter than HashLen.
pub fn extract_into<P>(
    provider: &P,
    alg: HashAlg,
    salt: Option<&[u8]>,
    ikm: &[u8],
    prk_out: &mut [u8],
) -> Result<usize, HkdfError>
where
    P: KeyedHash + ?Sized,
{
    let hash_len = hash_len(provider, alg)?;

    if prk_out.len() < hash_len {
        return Err(ArgumentError::BufferTooShort {
            actual: prk_out.len(),
            required: hash_len,
        }
        .into());
    }

    trace!(
        "hkdf extract_into: alg={alg} salt_len={} ikm_len={}",
        salt.map_or(0, <[u8]>::len),
        ikm.len()
    );

    let prk = &mut prk_out[..hash_len];
    if let Err(e) = extract_unchecked(provider, alg, salt, ikm, prk) {
        zeroize_slice(prk);
        return Err(e);
    }

    Ok(hash_len)
}

/// Runs Extract into `prk`, which must be exactly HashLen bytes.
///
/// Keys shorter than the provider's `min_key_len` are zero-padded up to it,
/// capped at the block size so the padded key gives the same tag.
pub(crate) fn extract_unchecked<P>(
    provider: &P,
    alg: HashAlg,
    salt: Option<&[u8]>,
    ikm: &[u8],
    prk: &mut [u8],
) -> Result<(), HkdfError>
where
    P: KeyedHash + ?Sized,
{
    let key = match salt {
        Some(salt) if !salt.is_empty() => salt,
        _ => &[0u8][..],
    };
    let min_key_len = provider.min_key_len(alg).min(alg.block_len());

    if key.len() < min_key_len {
        let mut padded = SecretBuf::try_zeroed(min_key_len)?;
        padded[..key.len()].copy_from_slice(key);
        provider.mac(alg, &padded, &[ikm], prk)?;
    } else {
        provider.mac(alg, key, &[ikm], prk)?;
    }

    Ok(())
}
