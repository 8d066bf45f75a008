// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod hex_to_bytes_tests {
    use casemate_util::hex_to_bytes;

    #[test]
    fn test_basic_decoding() {
        assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(hex_to_bytes(""), Vec::<u8>::new());
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(hex_to_bytes("C0FFEE"), vec![0xc0, 0xff, 0xee]);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(hex_to_bytes("0001"), vec![0x00, 0x01]);
    }

    #[test]
    #[should_panic]
    fn test_invalid_characters_panic() {
        hex_to_bytes("zz");
    }
}
