// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Borrowing guard that wipes its target on drop.

use core::fmt;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{Ordering, compiler_fence};

use super::assert::assert_wipe_on_drop;
use super::sentinel::WipeSentinel;
use super::traits::{AssertWipeOnDrop, Wipe, WipeProbe};

/// Wraps `&mut T` and wipes `*T` when dropped.
///
/// Use it for storage the caller owns but that holds secrets only for the
/// duration of one call, such as the PRK scratch region inside `derive`.
/// The borrow ends with the guard, so the owner sees a wiped value afterwards
/// regardless of which path left the scope.
///
/// ```rust
/// use rampart_zero::{WipeProbe, WipingMutGuard};
///
/// let mut prk = [0u8; 32];
/// {
///     let mut guard = WipingMutGuard::from(&mut prk);
///     guard.fill(0x77);
/// }
/// assert!(prk.is_wiped());
/// ```
pub struct WipingMutGuard<'a, T>
where
    T: Wipe + WipeProbe + ?Sized,
{
    inner: &'a mut T,
    __sentinel: WipeSentinel,
}

impl<'a, T> WipingMutGuard<'a, T>
where
    T: Wipe + WipeProbe + ?Sized,
{
    /// Takes the mutable borrow for the lifetime of the guard.
    pub fn from(inner: &'a mut T) -> Self {
        Self {
            inner,
            __sentinel: WipeSentinel::default(),
        }
    }
}

impl<T> fmt::Debug for WipingMutGuard<'_, T>
where
    T: Wipe + WipeProbe + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED WipingMutGuard]")
    }
}

impl<T> Deref for WipingMutGuard<'_, T>
where
    T: Wipe + WipeProbe + ?Sized,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.inner
    }
}

impl<T> DerefMut for WipingMutGuard<'_, T>
where
    T: Wipe + WipeProbe + ?Sized,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner
    }
}

impl<T> Wipe for WipingMutGuard<'_, T>
where
    T: Wipe + WipeProbe + ?Sized,
{
    fn wipe(&mut self) {
        self.inner.wipe();
        compiler_fence(Ordering::SeqCst);

        self.__sentinel.wipe();
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T> WipeProbe for WipingMutGuard<'_, T>
where
    T: Wipe + WipeProbe + ?Sized,
{
    fn is_wiped(&self) -> bool {
        self.inner.is_wiped()
    }
}

impl<T> AssertWipeOnDrop for WipingMutGuard<'_, T>
where
    T: Wipe + WipeProbe + ?Sized,
{
    fn clone_sentinel(&self) -> WipeSentinel {
        self.__sentinel.clone()
    }

    fn assert_wipe_on_drop(self) {
        assert_wipe_on_drop(self);
    }
}

impl<T> Drop for WipingMutGuard<'_, T>
where
    T: Wipe + WipeProbe + ?Sized,
{
    fn drop(&mut self) {
        self.wipe();
    }
}
