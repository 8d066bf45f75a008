// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Poly1305 one-time authenticator tests (RFC 8439 Section 2.5.2).

use casemate_util::hex_to_bytes;

use crate::chacha20poly1305::consts::{KEY_SIZE, TAG_SIZE};
use crate::chacha20poly1305::poly1305::Poly1305;

fn rfc_key() -> [u8; KEY_SIZE] {
    hex_to_bytes("85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b")
        .try_into()
        .expect("key vector is exactly 32 bytes")
}

/// RFC 8439 Section 2.5.2 - MAC test vector
#[test]
fn test_mac_rfc8439_2_5_2() {
    let key = rfc_key();
    let message = b"Cryptographic Forum Research Group";
    let expected: [u8; TAG_SIZE] = hex_to_bytes("a8061dc1305136c6c22b8baf0c0127a9")
        .try_into()
        .expect("tag vector is exactly 16 bytes");

    let mut tag = [0u8; TAG_SIZE];
    Poly1305::compute(&key, message, &mut tag);

    assert_eq!(tag, expected);
}

/// The empty message authenticates to s alone: the accumulator never
/// absorbs a block, so the tag is the pad half of the key.
#[test]
fn test_empty_message_tag_is_pad() {
    let key = rfc_key();

    let mut tag = [0u8; TAG_SIZE];
    Poly1305::compute(&key, &[], &mut tag);

    assert_eq!(&tag[..], &key[16..32]);
}

/// Split updates must produce the same tag as a one-shot update,
/// regardless of where the splits fall relative to block boundaries.
#[test]
fn test_incremental_updates_match_one_shot() {
    let key = rfc_key();
    let message: Vec<u8> = (0u8..=200).collect();

    let mut one_shot = [0u8; TAG_SIZE];
    Poly1305::compute(&key, &message, &mut one_shot);

    for split_len in [1, 3, 15, 16, 17, 31, 33, 64] {
        let mut mac = Poly1305::default();
        mac.init(&key);
        for chunk in message.chunks(split_len) {
            mac.update(chunk);
        }
        let mut tag = [0u8; TAG_SIZE];
        mac.finalize(&mut tag);

        assert_eq!(tag, one_shot, "split_len = {}", split_len);
    }
}

/// update_padded over a partial block equals update over the same data
/// followed by explicit zero padding to the 16-byte boundary.
#[test]
fn test_update_padded_matches_manual_padding() {
    let key = rfc_key();
    let data = [0xabu8; 21];

    let mut padded = Poly1305::default();
    padded.init(&key);
    padded.update_padded(&data);
    let mut padded_tag = [0u8; TAG_SIZE];
    padded.finalize(&mut padded_tag);

    let mut manual = Poly1305::default();
    manual.init(&key);
    manual.update(&data);
    manual.update(&[0u8; 11]);
    let mut manual_tag = [0u8; TAG_SIZE];
    manual.finalize(&mut manual_tag);

    assert_eq!(padded_tag, manual_tag);
}

/// Exactly one full block must not pick up any padding.
#[test]
fn test_update_padded_full_block_adds_nothing() {
    let key = rfc_key();
    let data = [0x5au8; 32];

    let mut padded = Poly1305::default();
    padded.init(&key);
    padded.update_padded(&data);
    let mut padded_tag = [0u8; TAG_SIZE];
    padded.finalize(&mut padded_tag);

    let mut plain_tag = [0u8; TAG_SIZE];
    Poly1305::compute(&key, &data, &mut plain_tag);

    assert_eq!(padded_tag, plain_tag);
}

/// Distinct r halves must yield distinct tags for the same message.
#[test]
fn test_different_keys_different_tags() {
    let message = b"same message, different one-time keys";

    let mut key_a = [0u8; KEY_SIZE];
    let mut key_b = [0u8; KEY_SIZE];
    key_a[0] = 0x01;
    key_b[0] = 0x02;

    let mut tag_a = [0u8; TAG_SIZE];
    let mut tag_b = [0u8; TAG_SIZE];
    Poly1305::compute(&key_a, message, &mut tag_a);
    Poly1305::compute(&key_b, message, &mut tag_b);

    assert_ne!(tag_a, tag_b);
}

#[test]
fn test_debug_redacts_state() {
    let mut mac = Poly1305::default();
    mac.init(&rfc_key());

    let rendered = format!("{:?}", mac);

    assert_eq!(rendered, "Poly1305 { [protected] }");
}
