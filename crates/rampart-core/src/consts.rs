// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Maximum number of Expand blocks (RFC 5869 Section 2.3).
///
/// The block counter is a single octet starting at 1, so OKM is capped at
/// `255 * HashLen` bytes.
pub const MAX_EXPAND_BLOCKS: usize = 255;
