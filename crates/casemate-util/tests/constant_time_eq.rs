// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod constant_time_eq_tests {
    use casemate_util::constant_time_eq;

    #[test]
    fn test_equal_slices() {
        assert!(constant_time_eq(&[9, 8, 7, 6], &[9, 8, 7, 6]));
    }

    #[test]
    fn test_different_slices() {
        assert!(!constant_time_eq(&[9, 8, 7, 6], &[9, 8, 7, 5]));
    }

    #[test]
    fn test_different_lengths() {
        assert!(!constant_time_eq(&[9, 8, 7, 6], &[9, 8, 7]));
    }

    #[test]
    fn test_empty_slices() {
        let empty: [u8; 0] = [];
        assert!(constant_time_eq(&empty, &empty));
    }

    #[test]
    fn test_first_byte_difference() {
        assert!(!constant_time_eq(&[1, 0, 0, 0], &[0, 0, 0, 0]));
    }

    #[test]
    fn test_last_byte_difference() {
        assert!(!constant_time_eq(&[0, 0, 0, 0], &[0, 0, 0, 1]));
    }

    #[test]
    fn test_sixteen_byte_tags() {
        let a = [0x5au8; 16];
        let mut b = a;
        assert!(constant_time_eq(&a, &b));

        b[15] ^= 0x80;
        assert!(!constant_time_eq(&a, &b));
    }
}
