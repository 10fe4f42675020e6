// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Wiping traits.

use super::sentinel::WipeSentinel;

/// Types whose secret contents can be overwritten with zeros in place.
///
/// Dyn-compatible, so heterogeneous state can be wiped through
/// `&mut dyn Wipe`.
pub trait Wipe {
    /// Overwrites every secret byte of `self` with zero.
    fn wipe(&mut self);
}

/// Runtime check that a value holds no secret bytes.
///
/// ```rust
/// use rampart_zero::{Wipe, WipeProbe};
///
/// let mut counter: u8 = 3;
/// assert!(!counter.is_wiped());
///
/// counter.wipe();
/// assert!(counter.is_wiped());
/// ```
pub trait WipeProbe {
    /// Returns `true` if every byte of `self` is zero.
    fn is_wiped(&self) -> bool;
}

/// Types that carry a [`WipeSentinel`] and can prove they wipe on drop.
pub trait AssertWipeOnDrop {
    /// Returns a clone of the internal sentinel sharing its state.
    fn clone_sentinel(&self) -> WipeSentinel;

    /// Drops `self` and asserts the sentinel observed a wipe.
    ///
    /// # Panics
    ///
    /// Panics if dropping `self` did not call [`Wipe::wipe`].
    fn assert_wipe_on_drop(self);
}
