// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_core::{HashAlg, HkdfError, KeyedHash};
use rampart_rfc5869::{HkdfUnderTest, run_all, test_vectors};
use rampart_rustcrypto::RustCryptoHmac;

use crate::{derive, expand, extract_into};

use super::providers::StrictKeyHmac;

/// The crate-level functions bound to one provider.
struct Facade<P>(P);

impl<P: KeyedHash> HkdfUnderTest for Facade<P> {
    fn extract(
        &self,
        alg: HashAlg,
        salt: Option<&[u8]>,
        ikm: &[u8],
        prk_out: &mut [u8],
    ) -> Result<usize, HkdfError> {
        extract_into(&self.0, alg, salt, ikm, prk_out)
    }

    fn expand(
        &self,
        alg: HashAlg,
        prk: &[u8],
        info: Option<&[u8]>,
        okm: &mut [u8],
    ) -> Result<(), HkdfError> {
        expand(&self.0, alg, prk, info, okm)
    }

    fn derive(
        &self,
        alg: HashAlg,
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: Option<&[u8]>,
        okm: &mut [u8],
    ) -> Result<(), HkdfError> {
        derive(&self.0, alg, salt, ikm, info, okm)
    }
}

#[test]
fn test_rfc5869_appendix_a_is_complete() {
    let rfc_cases = test_vectors()
        .iter()
        .filter(|tc| tc.name.starts_with("RFC 5869 A."))
        .count();

    assert_eq!(rfc_cases, 7);
}

#[test]
fn test_all_vectors_rustcrypto() {
    let failures = run_all(&Facade(RustCryptoHmac), |_| true);
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn test_all_vectors_strict_key_provider() {
    let failures = run_all(&Facade(StrictKeyHmac::default()), |_| true);
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn test_all_vectors_dyn_provider() {
    let provider: &dyn KeyedHash = &RustCryptoHmac;
    let failures = run_all(&Facade(provider), |_| true);
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
