// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! [`Wipe`] and [`WipeProbe`] for the byte containers and scalars used in
//! derivation state.

use alloc::vec::Vec;

use rampart_util::{is_slice_zeroized, zeroize_slice, zeroize_vec};

use crate::traits::{Wipe, WipeProbe};

impl Wipe for [u8] {
    fn wipe(&mut self) {
        zeroize_slice(self);
    }
}

impl WipeProbe for [u8] {
    fn is_wiped(&self) -> bool {
        is_slice_zeroized(self)
    }
}

impl<const N: usize> Wipe for [u8; N] {
    fn wipe(&mut self) {
        zeroize_slice(self);
    }
}

impl<const N: usize> WipeProbe for [u8; N] {
    fn is_wiped(&self) -> bool {
        is_slice_zeroized(self)
    }
}

impl Wipe for Vec<u8> {
    fn wipe(&mut self) {
        zeroize_vec(self);
    }
}

impl WipeProbe for Vec<u8> {
    fn is_wiped(&self) -> bool {
        is_slice_zeroized(self)
    }
}

impl<T: Wipe> Wipe for Option<T> {
    fn wipe(&mut self) {
        if let Some(inner) = self {
            inner.wipe();
        }
    }
}

impl<T: WipeProbe> WipeProbe for Option<T> {
    fn is_wiped(&self) -> bool {
        self.as_ref().is_none_or(WipeProbe::is_wiped)
    }
}

macro_rules! impl_wipe_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Wipe for $ty {
                #[inline(always)]
                fn wipe(&mut self) {
                    // SAFETY: `self` is a valid, aligned, exclusive reference.
                    unsafe { core::ptr::write_volatile(self, <$ty>::default()) };
                }
            }

            impl WipeProbe for $ty {
                #[inline(always)]
                fn is_wiped(&self) -> bool {
                    *self == <$ty>::default()
                }
            }
        )*
    };
}

impl_wipe_scalar!(u8, u16, u32, u64, usize, bool);
