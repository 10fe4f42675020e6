// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared vocabulary for the rampart HKDF crates.
//!
//! - [`HashAlg`]: the hash functions HKDF can be instantiated with.
//! - [`KeyedHash`]: the HMAC provider seam. The HKDF core never hashes on
//!   its own; every tag is computed by a provider.
//! - [`HkdfError`]: the error taxonomy shared by extract, expand and derive.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod hash_alg;
mod provider;

pub use consts::MAX_EXPAND_BLOCKS;
pub use error::{ArgumentError, HkdfError, ProviderError};
pub use hash_alg::HashAlg;
pub use provider::{KeyedHash, hash_len};
