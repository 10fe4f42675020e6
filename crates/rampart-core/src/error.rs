// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_zero::AllocError;
use thiserror::Error;

use crate::hash_alg::HashAlg;

/// Malformed request, detected before any hashing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    /// The provider cannot compute HMAC with this hash.
    #[error("hash algorithm {0} is not supported by the keyed-hash provider")]
    UnsupportedHash(HashAlg),

    /// A hash name did not match any [`HashAlg`].
    #[error("unknown hash algorithm name")]
    UnknownHashName,

    /// PRK passed to Expand is shorter than HashLen.
    #[error("pseudorandom key is {actual} bytes, at least {required} required")]
    PrkTooShort {
        /// Length of the PRK that was passed.
        actual: usize,
        /// HashLen of the selected algorithm.
        required: usize,
    },

    /// Requested OKM length exceeds `255 * HashLen`.
    #[error("requested {requested} output bytes, at most {max} (255 * HashLen) allowed")]
    OutputTooLong {
        /// Requested OKM length.
        requested: usize,
        /// `255 * HashLen` for the selected algorithm.
        max: usize,
    },

    /// Caller storage for the PRK is shorter than HashLen.
    #[error("output buffer is {actual} bytes, at least {required} required")]
    BufferTooShort {
        /// Length of the caller's buffer.
        actual: usize,
        /// HashLen of the selected algorithm.
        required: usize,
    },
}

/// Failure reported by a [`KeyedHash`](crate::KeyedHash) provider.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderError {
    /// The HMAC backend refused the key.
    #[error("HMAC-{alg} rejected a {len}-byte key")]
    InvalidKeyLength {
        /// Algorithm in use.
        alg: HashAlg,
        /// Length of the rejected key.
        len: usize,
    },

    /// The tag buffer does not match the digest size.
    #[error("HMAC-{alg} writes {expected} bytes, tag buffer is {actual}")]
    OutputLengthMismatch {
        /// Algorithm in use.
        alg: HashAlg,
        /// Digest size of `alg`.
        expected: usize,
        /// Length of the buffer that was passed.
        actual: usize,
    },

    /// The algorithm is known to the provider but disabled at build time.
    #[error("HMAC-{0} is disabled in this build")]
    Unavailable(HashAlg),

    /// Backend-specific fault.
    #[error("keyed-hash backend fault: {0}")]
    Backend(&'static str),
}

/// HKDF error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HkdfError {
    /// Malformed request; nothing was hashed or written.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// Secret scratch storage could not be allocated.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] AllocError),

    /// The keyed-hash provider failed; passed through unchanged.
    #[error("keyed-hash provider failure: {0}")]
    ProviderFailure(#[from] ProviderError),
}
