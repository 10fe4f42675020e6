// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owned, fallibly allocated secret byte buffer.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{Ordering, compiler_fence};

use rampart_util::{constant_time_eq, is_vec_fully_zeroized, zeroize_vec};
use thiserror::Error;

use super::assert::assert_wipe_on_drop;
use super::sentinel::WipeSentinel;
use super::traits::{AssertWipeOnDrop, Wipe, WipeProbe};

/// The allocator could not provide a secret buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("failed to allocate {requested} bytes of secret storage")]
pub struct AllocError {
    /// Number of bytes that were requested.
    pub requested: usize,
}

/// Heap buffer for key material that wipes its whole allocation on drop.
///
/// - Allocation goes through [`Vec::try_reserve_exact`], so running out of
///   memory is an [`AllocError`] instead of an abort.
/// - The length is fixed at construction; there is no way to grow the buffer
///   and leave a stale copy behind in a freed allocation.
/// - No `Clone`. `Debug` is redacted. `PartialEq` is constant-time.
///
/// ```rust
/// use rampart_zero::{SecretBuf, WipeProbe};
///
/// let mut okm = SecretBuf::try_zeroed(42).unwrap();
/// assert_eq!(okm.len(), 42);
/// assert!(okm.is_wiped());
///
/// okm[0] = 0x3c;
/// assert!(!okm.is_wiped());
/// assert_eq!(format!("{okm:?}"), "[REDACTED SecretBuf]");
/// ```
pub struct SecretBuf {
    bytes: Vec<u8>,
    __sentinel: WipeSentinel,
}

impl SecretBuf {
    /// Allocates `len` zero bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the allocation fails or `len` exceeds
    /// `isize::MAX`.
    pub fn try_zeroed(len: usize) -> Result<Self, AllocError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| AllocError { requested: len })?;
        bytes.resize(len, 0);
        // Spare capacity must be initialized before `is_wiped` reads it.
        zeroize_vec(&mut bytes);

        Ok(Self {
            bytes,
            __sentinel: WipeSentinel::default(),
        })
    }

    /// Allocates a buffer holding a copy of `src`.
    ///
    /// The caller remains responsible for wiping `src`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the allocation fails.
    pub fn try_from_slice(src: &[u8]) -> Result<Self, AllocError> {
        let mut buf = Self::try_zeroed(src.len())?;
        buf.bytes.copy_from_slice(src);
        Ok(buf)
    }

    /// Number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrows the contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutably borrows the contents.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl fmt::Debug for SecretBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED SecretBuf]")
    }
}

impl Deref for SecretBuf {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl DerefMut for SecretBuf {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.bytes
    }
}

impl AsRef<[u8]> for SecretBuf {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsMut<[u8]> for SecretBuf {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl PartialEq for SecretBuf {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.bytes, &other.bytes)
    }
}

impl Eq for SecretBuf {}

impl Wipe for SecretBuf {
    fn wipe(&mut self) {
        zeroize_vec(&mut self.bytes);
        compiler_fence(Ordering::SeqCst);

        self.__sentinel.wipe();
        compiler_fence(Ordering::SeqCst);
    }
}

impl WipeProbe for SecretBuf {
    fn is_wiped(&self) -> bool {
        is_vec_fully_zeroized(&self.bytes)
    }
}

impl AssertWipeOnDrop for SecretBuf {
    fn clone_sentinel(&self) -> WipeSentinel {
        self.__sentinel.clone()
    }

    fn assert_wipe_on_drop(self) {
        assert_wipe_on_drop(self);
    }
}

impl Drop for SecretBuf {
    fn drop(&mut self) {
        self.wipe();
    }
}
