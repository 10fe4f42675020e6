// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test helper for wipe-on-drop verification.

use super::traits::AssertWipeOnDrop;

/// Drops `value` and asserts that its sentinel recorded a wipe.
///
/// The sentinel is cloned and reset first, so a value that was already wiped
/// by hand still has to wipe again on drop to pass.
///
/// # Panics
///
/// Panics if `value`'s `Drop` does not wipe it.
pub fn assert_wipe_on_drop<T: AssertWipeOnDrop>(value: T) {
    let mut sentinel = value.clone_sentinel();
    sentinel.reset();

    assert!(!sentinel.is_wiped());
    drop(value);
    assert!(sentinel.is_wiped(), "value was dropped without being wiped");
}
