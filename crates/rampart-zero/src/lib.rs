// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart-zero
//!
//! Scoped ownership of secret bytes.
//!
//! Every buffer that holds key material during a derivation is one of two
//! things: an owned [`SecretBuf`], which wipes its whole allocation when it is
//! dropped, or a borrowed region wrapped in a [`WipingMutGuard`], which wipes
//! the borrowed value when the guard goes out of scope. Either way an early
//! `?` return cannot skip the wipe.
//!
//! Both types carry a [`WipeSentinel`] so tests can prove the wipe ran:
//!
//! ```rust
//! use rampart_zero::{AssertWipeOnDrop, SecretBuf};
//!
//! let prk = SecretBuf::try_from_slice(&[0x07, 0x77, 0x09]).unwrap();
//! prk.assert_wipe_on_drop();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod assert;
mod guard;
mod primitives;
mod secret_buf;
mod sentinel;
mod traits;

pub use assert::assert_wipe_on_drop;
pub use guard::WipingMutGuard;
pub use secret_buf::{AllocError, SecretBuf};
pub use sentinel::WipeSentinel;
pub use traits::{AssertWipeOnDrop, Wipe, WipeProbe};
