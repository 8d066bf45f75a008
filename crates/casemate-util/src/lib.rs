// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared across the workspace.
//!
//! The little-endian conversion functions zeroize their source after
//! reading so no secret word or byte lingers behind the conversion.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;

/// Constant-time equality comparison for byte slices.
///
/// Accumulates the OR of XOR-differences across every byte and tests the
/// accumulator once at the end. The comparison touches all bytes regardless
/// of where a mismatch occurs, so execution time does not depend on the
/// compared values. Slice lengths are public and may be compared directly.
///
/// # Example
///
/// ```
/// use casemate_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[0xaa, 0xbb], &[0xaa, 0xbb]));
/// assert!(!constant_time_eq(&[0xaa, 0xbb], &[0xaa, 0xbc]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Verifies that a slice contains only zero bytes.
///
/// # Example
///
/// ```
/// use casemate_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 16]));
/// assert!(!is_slice_zeroized(&[0u8, 0, 7, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Parses a hexadecimal string into bytes. Test-vector helper.
///
/// # Panics
///
/// Panics on odd length or non-hex characters.
///
/// # Example
///
/// ```
/// use casemate_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("c0ffee"), vec![0xc0, 0xff, 0xee]);
/// ```
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}

/// Generates `{type}_from_le` / `{type}_to_le` conversion pairs.
macro_rules! impl_le_conversions {
    ($ty:ty, $size:expr, $from:ident, $to:ident) => {
        #[doc = concat!("Decodes ", stringify!($size), " little-endian bytes into a `", stringify!($ty), "`, zeroizing the source bytes.")]
        ///
        /// Builds the integer with bit shifts instead of a temporary byte
        /// array, and clears each source byte as soon as it has been read.
        #[inline(always)]
        pub fn $from(dst: &mut $ty, bytes: &mut [u8; $size]) {
            *dst = 0;
            for (i, byte) in bytes.iter_mut().enumerate() {
                *dst |= (*byte as $ty) << (8 * i);
                *byte = 0;
            }
        }

        #[doc = concat!("Encodes a `", stringify!($ty), "` as ", stringify!($size), " little-endian bytes, zeroizing the source integer.")]
        ///
        /// Extracts bytes with bit shifts and clears the source once every
        /// byte has been written.
        #[inline(always)]
        pub fn $to(src: &mut $ty, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * i)) as u8;
            }
            *src = 0;
        }
    };
}

impl_le_conversions!(u32, 4, u32_from_le, u32_to_le);
impl_le_conversions!(u64, 8, u64_from_le, u64_to_le);
