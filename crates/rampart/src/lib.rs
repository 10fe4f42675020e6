// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart
//!
//! HKDF, the HMAC-based Extract-and-Expand Key Derivation Function
//! (RFC 5869), over any [`KeyedHash`] provider.
//!
//! - [`extract`] / [`extract_into`]: `PRK = HMAC(salt, IKM)`.
//! - [`expand`]: stretches a PRK and optional info into `okm.len()` bytes.
//! - [`derive`] / [`derive_secret`]: extract then expand, with the
//!   intermediate PRK held in wipe-on-drop scratch storage.
//!
//! Every buffer that carries key material inside this crate is a
//! [`SecretBuf`] or is borrowed through a [`WipingMutGuard`], so it is
//! overwritten with zeros on every exit path, including early `?` returns.
//!
//! References:
//! - RFC 5869: HMAC-based Extract-and-Expand Key Derivation Function (HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc5869>
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "rustcrypto")]
//! # {
//! use rampart::{HashAlg, RustCryptoHmac, derive};
//!
//! let mut okm = [0u8; 42];
//! derive(
//!     &RustCryptoHmac,
//!     HashAlg::Sha256,
//!     Some(b"salt".as_slice()),
//!     b"input key material",
//!     Some(b"context".as_slice()),
//!     &mut okm,
//! )
//! .unwrap();
//! # }
//! ```
//!
//! [`WipingMutGuard`]: rampart_zero::WipingMutGuard

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod derive;
mod expand;
mod extract;

#[cfg(feature = "rustcrypto")]
pub mod default;

pub use rampart_core::{
    ArgumentError, HashAlg, HkdfError, KeyedHash, MAX_EXPAND_BLOCKS, ProviderError, hash_len,
};
#[cfg(feature = "rustcrypto")]
pub use rampart_rustcrypto::RustCryptoHmac;
pub use rampart_zero::{AllocError, SecretBuf};

pub use derive::{derive, derive_secret};
pub use expand::expand;
pub use extract::{extract, extract_into};

/// Pseudorandom key produced by [`extract`]; exactly HashLen bytes.
pub type Prk = SecretBuf;
