// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod le_conversions_tests {
    use casemate_util::{u32_from_le, u32_to_le, u64_from_le, u64_to_le};

    #[test]
    fn test_u32_from_le_decodes_and_zeroizes_source() {
        let mut bytes = [0x78, 0x56, 0x34, 0x12];
        let mut value = 0u32;

        u32_from_le(&mut value, &mut bytes);

        assert_eq!(value, 0x1234_5678);
        assert_eq!(bytes, [0; 4]);
    }

    #[test]
    fn test_u32_to_le_encodes_and_zeroizes_source() {
        let mut value = 0xdead_beefu32;
        let mut bytes = [0u8; 4];

        u32_to_le(&mut value, &mut bytes);

        assert_eq!(bytes, [0xef, 0xbe, 0xad, 0xde]);
        assert_eq!(value, 0);
    }

    #[test]
    fn test_u32_roundtrip() {
        let original = 0x0102_0304u32;
        let mut value = original;
        let mut bytes = [0u8; 4];

        u32_to_le(&mut value, &mut bytes);

        let mut recovered = 0u32;
        u32_from_le(&mut recovered, &mut bytes);

        assert_eq!(recovered, original);
    }

    #[test]
    fn test_u64_from_le_decodes_and_zeroizes_source() {
        let mut bytes = [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80];
        let mut value = 0u64;

        u64_from_le(&mut value, &mut bytes);

        assert_eq!(value, 0x8000_0000_0000_0001);
        assert_eq!(bytes, [0; 8]);
    }

    #[test]
    fn test_u64_to_le_encodes_and_zeroizes_source() {
        let mut value = 0x1122_3344_5566_7788u64;
        let mut bytes = [0u8; 8];

        u64_to_le(&mut value, &mut bytes);

        assert_eq!(bytes, [0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
        assert_eq!(value, 0);
    }

    #[test]
    fn test_zero_values() {
        let mut value = 0u32;
        let mut bytes = [0u8; 4];

        u32_to_le(&mut value, &mut bytes);
        assert_eq!(bytes, [0; 4]);

        u32_from_le(&mut value, &mut bytes);
        assert_eq!(value, 0);
    }
}
