// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer vectors for HKDF backends.
//!
//! - RFC 5869 Appendix A, test cases 1 to 7 (SHA-256 and SHA-1).
//! - Extra SHA-224, SHA-384 and SHA-512 cases, cross-checked against an
//!   independent HKDF.
//! - Requests one byte past `255 * HashLen`, which must be rejected.
//!
//! Backends plug in through [`HkdfUnderTest`]; [`run_test_case`] checks
//! Extract, Expand and the composed Derive against each vector.

mod runner;
mod vectors;

pub use runner::{HkdfUnderTest, run_all, run_test_case};
pub use vectors::{Expected, TestCase, test_vectors};
