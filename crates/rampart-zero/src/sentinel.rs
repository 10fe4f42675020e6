// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::traits::Wipe;

/// Shared flag recording whether its owner has been wiped.
///
/// Starts out pristine. [`Wipe::wipe`] clears the flag, and every clone sees
/// the change, which is what lets a test keep a clone, drop the owner, and
/// then inspect the clone.
///
/// ```rust
/// use rampart_zero::{Wipe, WipeSentinel};
///
/// let mut sentinel = WipeSentinel::default();
/// let observer = sentinel.clone();
///
/// assert!(!observer.is_wiped());
/// sentinel.wipe();
/// assert!(observer.is_wiped());
/// ```
#[derive(Clone, Debug)]
pub struct WipeSentinel(Arc<AtomicBool>);

impl WipeSentinel {
    /// Puts the sentinel back into the pristine state.
    pub fn reset(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once [`Wipe::wipe`] has been called on any clone.
    pub fn is_wiped(&self) -> bool {
        !self.0.load(Ordering::SeqCst)
    }
}

impl Default for WipeSentinel {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl PartialEq for WipeSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.is_wiped() == other.is_wiped()
    }
}

impl Eq for WipeSentinel {}

impl Wipe for WipeSentinel {
    fn wipe(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
