// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF-Expand per RFC 5869 Section 2.3

use core::sync::atomic::{Ordering, compiler_fence};

use log::trace;
use rampart_core::{ArgumentError, HashAlg, HkdfError, KeyedHash, MAX_EXPAND_BLOCKS, hash_len};
use rampart_util::zeroize_slice;
use rampart_zero::{
    AssertWipeOnDrop, SecretBuf, Wipe, WipeProbe, WipeSentinel, WipingMutGuard,
    assert_wipe_on_drop,
};

/// Fills `okm` with `T(1) || T(2) || ...` truncated to `okm.len()`, where
///
/// ```text
/// T(1) = HMAC-Hash(PRK, info || 0x01)
/// T(N) = HMAC-Hash(PRK, T(N-1) || info || N)
/// ```
///
/// `prk` may be longer than HashLen; the whole value keys every block. An
/// empty `okm` succeeds without hashing once the arguments are validated.
///
/// # Errors
///
/// Argument errors are reported before anything is hashed or written:
///
/// - [`ArgumentError::UnsupportedHash`] if the provider declines `alg`.
/// - [`ArgumentError::PrkTooShort`] if `prk` is shorter than HashLen.
/// - [`ArgumentError::OutputTooLong`] if `okm` exceeds `255 * HashLen`.
///
/// [`HkdfError::OutOfMemory`] and [`HkdfError::ProviderFailure`] can occur
/// mid-loop. The chaining state and `okm` are zeroed before they return.
pub fn expand<P>(
    provider: &P,
    alg: HashAlg,
    prk: &[u8],
    info: Option<&[u8]>,
    okm: &mut [u8],
) -> Result<(), HkdfError>
where
    P: KeyedHash + ?Sized,
{
    let hash_len = hash_len(provider, alg)?;

    if prk.len() < hash_len {
        return Err(ArgumentError::PrkTooShort {
            actual: prk.len(),
            required: hash_len,
        }
        .into());
    }
    check_output_len(hash_len, okm.len())?;

    trace!(
        "hkdf expand: alg={alg} prk_len={} info_len={} okm_len={}",
        prk.len(),
        info.map_or(0, <[u8]>::len),
        okm.len()
    );

    if okm.is_empty() {
        return Ok(());
    }

    expand_unchecked(provider, alg, hash_len, prk, info, okm)
}

/// Rejects OKM lengths above `255 * hash_len`.
pub(crate) fn check_output_len(hash_len: usize, okm_len: usize) -> Result<(), HkdfError> {
    let max = MAX_EXPAND_BLOCKS.saturating_mul(hash_len);

    if okm_len > max {
        return Err(ArgumentError::OutputTooLong {
            requested: okm_len,
            max,
        }
        .into());
    }

    Ok(())
}

/// Runs Expand with validated arguments and a non-empty `okm`.
pub(crate) fn expand_unchecked<P>(
    provider: &P,
    alg: HashAlg,
    hash_len: usize,
    prk: &[u8],
    info: Option<&[u8]>,
    okm: &mut [u8],
) -> Result<(), HkdfError>
where
    P: KeyedHash + ?Sized,
{
    let mut state = ExpandState::try_new(hash_len)?;
    expand_with_state(provider, alg, prk, info.unwrap_or_default(), okm, &mut state)
}

/// Runs the block loop on `state` and leaves `state` wiped on return.
pub(crate) fn expand_with_state<P>(
    provider: &P,
    alg: HashAlg,
    prk: &[u8],
    info: &[u8],
    okm: &mut [u8],
    state: &mut ExpandState,
) -> Result<(), HkdfError>
where
    P: KeyedHash + ?Sized,
{
    let mut state = WipingMutGuard::from(state);
    let result = state.fill(provider, alg, prk, info, okm);

    if result.is_err() {
        zeroize_slice(okm);
    }

    result
}

/// Chaining state of the Expand loop.
///
/// `previous` is `None` while computing block 1. Blocks are hashed into
/// `block`, copied out, then swapped into `previous`, so the value in `block`
/// after a swap is stale key material that the next block overwrites.
pub(crate) struct ExpandState {
    /// `T(N)`, HashLen bytes.
    block: SecretBuf,
    /// `T(N-1)`, allocated when block 2 is reached.
    previous: Option<SecretBuf>,
    /// Counter octet of the last block computed; 0 before block 1.
    counter: u8,
    __sentinel: WipeSentinel,
}

impl ExpandState {
    pub(crate) fn try_new(hash_len: usize) -> Result<Self, HkdfError> {
        Ok(Self {
            block: SecretBuf::try_zeroed(hash_len)?,
            previous: None,
            counter: 0,
            __sentinel: WipeSentinel::default(),
        })
    }

    pub(crate) fn fill<P>(
        &mut self,
        provider: &P,
        alg: HashAlg,
        prk: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<(), HkdfError>
    where
        P: KeyedHash + ?Sized,
    {
        let hash_len = self.block.len();
        let n = okm.len().div_ceil(hash_len);

        for (i, chunk) in okm.chunks_mut(hash_len).enumerate() {
            self.counter = self.counter.wrapping_add(1);
            let counter = [self.counter];

            match &self.previous {
                None => provider.mac(alg, prk, &[info, &counter[..]], &mut self.block)?,
                Some(previous) => provider.mac(
                    alg,
                    prk,
                    &[previous.as_slice(), info, &counter[..]],
                    &mut self.block,
                )?,
            }

            chunk.copy_from_slice(&self.block[..chunk.len()]);

            if i + 1 == n {
                break;
            }

            match &mut self.previous {
                Some(previous) => core::mem::swap(previous, &mut self.block),
                None => {
                    let next = SecretBuf::try_zeroed(hash_len)?;
                    self.previous = Some(core::mem::replace(&mut self.block, next));
                }
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn counter(&self) -> u8 {
        self.counter
    }
}

impl Wipe for ExpandState {
    fn wipe(&mut self) {
        self.block.wipe();
        self.previous.wipe();
        self.counter.wipe();
        compiler_fence(Ordering::SeqCst);

        self.__sentinel.wipe();
        compiler_fence(Ordering::SeqCst);
    }
}

impl WipeProbe for ExpandState {
    fn is_wiped(&self) -> bool {
        self.block.is_wiped() && self.previous.is_wiped() && self.counter.is_wiped()
    }
}

impl AssertWipeOnDrop for ExpandState {
    fn clone_sentinel(&self) -> WipeSentinel {
        self.__sentinel.clone()
    }

    fn assert_wipe_on_drop(self) {
        assert_wipe_on_drop(self);
    }
}

impl Drop for ExpandState {
    fn drop(&mut self) {
        self.wipe();
    }
}
