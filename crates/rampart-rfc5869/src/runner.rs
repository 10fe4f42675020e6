// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_core::{HashAlg, HkdfError};
use rampart_util::{bytes_to_hex, hex_to_bytes};

use crate::vectors::{Expected, TestCase, test_vectors};

/// HKDF backend exercised by the runner.
pub trait HkdfUnderTest {
    /// Extract into `prk_out`, returning the number of bytes written.
    fn extract(
        &self,
        alg: HashAlg,
        salt: Option<&[u8]>,
        ikm: &[u8],
        prk_out: &mut [u8],
    ) -> Result<usize, HkdfError>;

    /// Expand `prk` into `okm`.
    fn expand(
        &self,
        alg: HashAlg,
        prk: &[u8],
        info: Option<&[u8]>,
        okm: &mut [u8],
    ) -> Result<(), HkdfError>;

    /// Extract-then-Expand into `okm`.
    fn derive(
        &self,
        alg: HashAlg,
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: Option<&[u8]>,
        okm: &mut [u8],
    ) -> Result<(), HkdfError>;
}

/// Runs one vector, returning a description of the first mismatch.
pub fn run_test_case<H: HkdfUnderTest + ?Sized>(hkdf: &H, tc: &TestCase) -> Result<(), String> {
    let ikm = hex_to_bytes(tc.ikm);
    let salt = tc.salt.map(hex_to_bytes);
    let info = hex_to_bytes(tc.info);
    let info = (!info.is_empty()).then_some(info.as_slice());

    let mut okm = vec![0u8; tc.length];
    let derived = hkdf.derive(tc.alg, salt.as_deref(), &ikm, info, &mut okm);

    let (prk_hex, okm_hex) = match (&tc.expected, derived) {
        (Expected::Valid { prk, okm }, Ok(())) => (*prk, *okm),
        (Expected::Valid { .. }, Err(e)) => {
            return Err(format!("{}: expected valid, derive failed: {e}", tc.name));
        }
        (Expected::Invalid, Ok(())) => {
            return Err(format!("{}: expected invalid, derive succeeded", tc.name));
        }
        (Expected::Invalid, Err(HkdfError::InvalidArgument(_))) => return Ok(()),
        (Expected::Invalid, Err(e)) => {
            return Err(format!("{}: expected invalid argument, got {e}", tc.name));
        }
    };

    if bytes_to_hex(&okm) != okm_hex {
        return Err(format!(
            "{}: derive output mismatch\n  expected: {}\n  got:      {}",
            tc.name,
            okm_hex,
            bytes_to_hex(&okm)
        ));
    }

    let mut prk = vec![0u8; tc.alg.output_len()];
    let written = hkdf
        .extract(tc.alg, salt.as_deref(), &ikm, &mut prk)
        .map_err(|e| format!("{}: extract failed: {e}", tc.name))?;

    if written != prk.len() || bytes_to_hex(&prk) != prk_hex {
        return Err(format!(
            "{}: PRK mismatch\n  expected: {}\n  got:      {}",
            tc.name,
            prk_hex,
            bytes_to_hex(&prk[..written.min(prk.len())])
        ));
    }

    let mut expanded = vec![0u8; tc.length];
    hkdf.expand(tc.alg, &prk, info, &mut expanded)
        .map_err(|e| format!("{}: expand failed: {e}", tc.name))?;

    if expanded != okm {
        return Err(format!("{}: expand(extract(..)) differs from derive(..)", tc.name));
    }

    Ok(())
}

/// Runs every vector whose algorithm `is_supported` accepts.
///
/// Returns one message per failing vector.
pub fn run_all<H, F>(hkdf: &H, is_supported: F) -> Vec<String>
where
    H: HkdfUnderTest + ?Sized,
    F: Fn(HashAlg) -> bool,
{
    test_vectors()
        .iter()
        .filter(|tc| is_supported(tc.alg))
        .filter_map(|tc| run_test_case(hkdf, tc).err())
        .collect()
}
