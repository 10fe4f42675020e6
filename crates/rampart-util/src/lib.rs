// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared by the rampart crates.
//!
//! Everything here operates on plain bytes: bulk wiping that the optimizer
//! cannot elide, zero checks used by the wipe probes, and a constant-time
//! comparison. Hex helpers for test vectors live behind `test-utils`.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

#[cfg(feature = "test-utils")]
mod hex;

#[cfg(feature = "test-utils")]
pub use hex::{bytes_to_hex, hex_to_bytes};

/// Overwrites every byte of `bytes` with zero.
///
/// Lowers to a memset followed by a volatile read of the first byte, so the
/// store is observable and cannot be dropped as a dead write.
///
/// # Example
///
/// ```
/// use rampart_util::zeroize_slice;
///
/// let mut prk = [0x5au8; 32];
/// zeroize_slice(&mut prk);
/// assert!(prk.iter().all(|&b| b == 0));
/// ```
#[inline(always)]
pub fn zeroize_slice(bytes: &mut [u8]) {
    if bytes.is_empty() {
        return;
    }

    // SAFETY: the pointer and length come from a live `&mut [u8]`.
    unsafe {
        core::ptr::write_bytes(bytes.as_mut_ptr(), 0, bytes.len());
        core::ptr::read_volatile(bytes.as_ptr());
    }
    compiler_fence(Ordering::SeqCst);
}

/// Overwrites the whole allocation of `vec` with zero, spare capacity included.
///
/// Bytes between `len()` and `capacity()` may still hold data from before a
/// `truncate` or `clear`; those are wiped too. Length and capacity are left
/// unchanged.
///
/// # Example
///
/// ```
/// use rampart_util::{is_vec_fully_zeroized, zeroize_vec};
///
/// let mut okm = vec![0xffu8; 64];
/// okm.truncate(16);
///
/// zeroize_vec(&mut okm);
/// assert!(is_vec_fully_zeroized(&okm));
/// assert_eq!(okm.len(), 16);
/// ```
#[inline(always)]
pub fn zeroize_vec(vec: &mut Vec<u8>) {
    let cap = vec.capacity();
    if cap == 0 {
        return;
    }

    // SAFETY: `Vec` guarantees its buffer is valid for `capacity` bytes.
    unsafe {
        core::ptr::write_bytes(vec.as_mut_ptr(), 0, cap);
        core::ptr::read_volatile(vec.as_ptr());
    }
    compiler_fence(Ordering::SeqCst);
}

/// Returns `true` if every byte of `bytes` is zero.
#[inline(always)]
pub fn is_slice_zeroized(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}

/// Returns `true` if the whole allocation of `vec` is zero, spare capacity included.
///
/// Every byte up to `capacity()` must have been written at least once, for
/// example by [`zeroize_vec`] or by a `truncate` from a longer length.
/// Reading spare capacity that was never initialized is undefined behavior;
/// use [`is_slice_zeroized`] on vectors that do not meet this.
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    let cap = vec.capacity();
    let base = vec.as_ptr();

    (0..cap).all(|i| {
        // SAFETY: `i < capacity`, and we only read bytes.
        unsafe { core::ptr::read_volatile(base.add(i)) == 0 }
    })
}

/// Compares two byte slices without an early exit on the first mismatch.
///
/// Slices of different lengths compare unequal; the length itself is not
/// treated as secret.
///
/// # Example
///
/// ```
/// use rampart_util::constant_time_eq;
///
/// assert!(constant_time_eq(b"okm", b"okm"));
/// assert!(!constant_time_eq(b"okm", b"prk"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let diff = a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    // SAFETY: reading a live local.
    unsafe { core::ptr::read_volatile(&diff) == 0 }
}
