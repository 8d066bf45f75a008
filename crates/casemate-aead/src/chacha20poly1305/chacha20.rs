// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 keystream generator (RFC 8439).
//!
//! All sensitive state is zeroized on drop.

use casemate_util::{u32_from_le, u32_to_le};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::consts::{CHACHA20_BLOCK_SIZE, KEY_SIZE, NONCE_SIZE};
use super::types::{AeadKey, Nonce};

/// ChaCha20 cipher state with guaranteed zeroization.
///
/// The quarter-round scratch words live in the struct rather than on the
/// stack so they are cleared together with the rest of the state.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct ChaCha20 {
    initial: [u32; 16],
    working: [u32; 16],
    keystream: [u8; CHACHA20_BLOCK_SIZE],
    le_bytes_tmp: [u8; 4],
    qr: [u32; 4],
}

impl Default for ChaCha20 {
    fn default() -> Self {
        Self {
            initial: [0; 16],
            working: [0; 16],
            keystream: [0; CHACHA20_BLOCK_SIZE],
            le_bytes_tmp: [0; 4],
            qr: [0; 4],
        }
    }
}

impl ChaCha20 {
    #[inline(always)]
    fn quarter_round(&mut self, a: usize, b: usize, c: usize, d: usize) {
        self.qr[0] = self.working[a];
        self.qr[1] = self.working[b];
        self.qr[2] = self.working[c];
        self.qr[3] = self.working[d];

        self.qr[0] = self.qr[0].wrapping_add(self.qr[1]);
        self.qr[3] ^= self.qr[0];
        self.qr[3] = self.qr[3].rotate_left(16);

        self.qr[2] = self.qr[2].wrapping_add(self.qr[3]);
        self.qr[1] ^= self.qr[2];
        self.qr[1] = self.qr[1].rotate_left(12);

        self.qr[0] = self.qr[0].wrapping_add(self.qr[1]);
        self.qr[3] ^= self.qr[0];
        self.qr[3] = self.qr[3].rotate_left(8);

        self.qr[2] = self.qr[2].wrapping_add(self.qr[3]);
        self.qr[1] ^= self.qr[2];
        self.qr[1] = self.qr[1].rotate_left(7);

        self.working[a] = self.qr[0];
        self.working[b] = self.qr[1];
        self.working[c] = self.qr[2];
        self.working[d] = self.qr[3];
    }

    /// Matrix layout: 4 constants, 8 key words, counter, 3 nonce words,
    /// all little-endian (RFC 8439 Section 2.3).
    #[inline(always)]
    fn init_state(&mut self, key: &AeadKey, nonce: &Nonce, counter: u32) {
        self.initial[0] = 0x61707865;
        self.initial[1] = 0x3320646e;
        self.initial[2] = 0x79622d32;
        self.initial[3] = 0x6b206574;

        debug_assert_eq!(key.len(), KEY_SIZE);
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            self.le_bytes_tmp.copy_from_slice(chunk);
            u32_from_le(&mut self.initial[4 + i], &mut self.le_bytes_tmp);
        }

        self.initial[12] = counter;

        debug_assert_eq!(nonce.len(), NONCE_SIZE);
        for (i, chunk) in nonce.chunks_exact(4).enumerate() {
            self.le_bytes_tmp.copy_from_slice(chunk);
            u32_from_le(&mut self.initial[13 + i], &mut self.le_bytes_tmp);
        }
    }

    /// 10 double rounds: column quarter-rounds, then diagonal quarter-rounds.
    #[inline(always)]
    fn do_rounds(&mut self) {
        for _ in 0..10 {
            self.quarter_round(0, 4, 8, 12);
            self.quarter_round(1, 5, 9, 13);
            self.quarter_round(2, 6, 10, 14);
            self.quarter_round(3, 7, 11, 15);

            self.quarter_round(0, 5, 10, 15);
            self.quarter_round(1, 6, 11, 12);
            self.quarter_round(2, 7, 8, 13);
            self.quarter_round(3, 4, 9, 14);
        }
    }

    /// Generate one keystream block into self.keystream
    #[inline(always)]
    fn generate_block(&mut self, key: &AeadKey, nonce: &Nonce, counter: u32) {
        self.init_state(key, nonce, counter);
        self.working.copy_from_slice(&self.initial);

        self.do_rounds();

        // Feed-forward add of the pre-round matrix, then serialize LE.
        // u32_to_le zeroizes each working word as it is written out.
        for i in 0..16 {
            self.working[i] = self.working[i].wrapping_add(self.initial[i]);
            u32_to_le(
                &mut self.working[i],
                (&mut self.keystream[i * 4..i * 4 + 4])
                    .try_into()
                    .expect("infallible: keystream slice is exactly 4 bytes"),
            );
        }

        self.initial.zeroize();
    }

    /// Single-block output, used for one-time MAC key derivation (counter 0)
    /// and known-answer tests.
    pub(crate) fn block(
        &mut self,
        key: &AeadKey,
        nonce: &Nonce,
        counter: u32,
        output: &mut [u8; CHACHA20_BLOCK_SIZE],
    ) {
        self.generate_block(key, nonce, counter);
        output.copy_from_slice(&self.keystream);
        self.keystream.zeroize();
    }

    /// Encrypt/decrypt data in-place, one 64-byte block per counter value.
    pub(crate) fn crypt(&mut self, key: &AeadKey, nonce: &Nonce, counter: u32, data: &mut [u8]) {
        for (i, chunk) in data.chunks_mut(CHACHA20_BLOCK_SIZE).enumerate() {
            self.generate_block(key, nonce, counter.wrapping_add(i as u32));

            for (byte, ks_byte) in chunk.iter_mut().zip(self.keystream.iter()) {
                *byte ^= ks_byte;
            }
        }

        self.keystream.zeroize();
    }
}

impl core::fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20 {{ [protected] }}")
    }
}
