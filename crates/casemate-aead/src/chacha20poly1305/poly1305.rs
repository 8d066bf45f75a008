// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Poly1305 one-time authenticator (RFC 8439).
//!
//! The accumulator works in 26-bit radix over the prime 2^130 - 5. All
//! limb operations are fixed-width with no data-dependent branches, and
//! every scratch word is zeroized after use.

use casemate_util::{u32_from_le, u32_to_le};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::consts::{BLOCK_SIZE, KEY_SIZE, TAG_SIZE};

/// Scratch words for block absorption, zeroized after every block.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
struct BlockScratch {
    tmp: [u8; BLOCK_SIZE],
    le_bytes_tmp: [u8; 4],
    w: u32,
    c: [u32; 5],
    r5: [u64; 4],
    m: [u64; 5],
}

/// Scratch words for finalization, zeroized after the tag is written.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
struct FinalScratch {
    h: [u32; 5],
    g: [u32; 5],
    mask: u32,
    words: [u64; 4],
    out_word: u32,
    le_bytes_tmp: [u8; 4],
}

/// Poly1305 accumulator state.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Poly1305 {
    r: [u32; 5],
    pad: [u32; 4],
    acc: [u32; 5],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    finalized: bool,
    block: BlockScratch,
    fin: FinalScratch,
}

impl Poly1305 {
    pub fn init(&mut self, one_time_key: &[u8; KEY_SIZE]) {
        self.acc = [0; 5];
        self.buffer_len = 0;
        self.finalized = false;

        self.clamp_r(&one_time_key[0..16]);

        // s is stored as four unclamped LE words.
        for (i, chunk) in one_time_key[16..32].chunks_exact(4).enumerate() {
            self.block.le_bytes_tmp.copy_from_slice(chunk);
            u32_from_le(&mut self.pad[i], &mut self.block.le_bytes_tmp);
        }
    }

    /// Decode r into 5 26-bit limbs via overlapping LE loads at byte
    /// offsets 0, 3, 6, 9, 12 and apply the RFC 8439 clamping masks.
    fn clamp_r(&mut self, r_bytes: &[u8]) {
        self.block.le_bytes_tmp.copy_from_slice(&r_bytes[0..4]);
        u32_from_le(&mut self.block.w, &mut self.block.le_bytes_tmp);
        self.r[0] = self.block.w & 0x3ffffff;

        self.block.le_bytes_tmp.copy_from_slice(&r_bytes[3..7]);
        u32_from_le(&mut self.block.w, &mut self.block.le_bytes_tmp);
        self.r[1] = (self.block.w >> 2) & 0x3ffff03;

        self.block.le_bytes_tmp.copy_from_slice(&r_bytes[6..10]);
        u32_from_le(&mut self.block.w, &mut self.block.le_bytes_tmp);
        self.r[2] = (self.block.w >> 4) & 0x3ffc0ff;

        self.block.le_bytes_tmp.copy_from_slice(&r_bytes[9..13]);
        u32_from_le(&mut self.block.w, &mut self.block.le_bytes_tmp);
        self.r[3] = (self.block.w >> 6) & 0x3f03fff;

        self.block.le_bytes_tmp.copy_from_slice(&r_bytes[12..16]);
        u32_from_le(&mut self.block.w, &mut self.block.le_bytes_tmp);
        self.r[4] = (self.block.w >> 8) & 0x00fffff;

        self.block.zeroize();
    }

    /// Absorb the 16 bytes in self.block.tmp: decode into 26-bit limbs,
    /// add to the accumulator, multiply by r mod 2^130 - 5.
    ///
    /// `hibit` is 1 for a full 16-byte block (bit 24 of the top limb set)
    /// and 0 for the padded final partial block.
    fn absorb_block(&mut self, hibit: u32) {
        self.block.le_bytes_tmp.copy_from_slice(&self.block.tmp[0..4]);
        u32_from_le(&mut self.block.w, &mut self.block.le_bytes_tmp);
        self.block.c[0] = self.block.w & 0x3ffffff;

        self.block.le_bytes_tmp.copy_from_slice(&self.block.tmp[3..7]);
        u32_from_le(&mut self.block.w, &mut self.block.le_bytes_tmp);
        self.block.c[1] = (self.block.w >> 2) & 0x3ffffff;

        self.block.le_bytes_tmp.copy_from_slice(&self.block.tmp[6..10]);
        u32_from_le(&mut self.block.w, &mut self.block.le_bytes_tmp);
        self.block.c[2] = (self.block.w >> 4) & 0x3ffffff;

        self.block.le_bytes_tmp.copy_from_slice(&self.block.tmp[9..13]);
        u32_from_le(&mut self.block.w, &mut self.block.le_bytes_tmp);
        self.block.c[3] = (self.block.w >> 6) & 0x3ffffff;

        self.block.le_bytes_tmp.copy_from_slice(&self.block.tmp[12..16]);
        u32_from_le(&mut self.block.w, &mut self.block.le_bytes_tmp);
        self.block.c[4] = (self.block.w >> 8) | (hibit << 24);

        // acc += c; carries are absorbed by the 64-bit products below.
        self.acc[0] += self.block.c[0];
        self.acc[1] += self.block.c[1];
        self.acc[2] += self.block.c[2];
        self.acc[3] += self.block.c[3];
        self.acc[4] += self.block.c[4];

        // Schoolbook multiply by r. Limbs above the prime wrap back via
        // the x5 fold: 2^130 = 5 (mod 2^130 - 5).
        self.block.r5[0] = (self.r[1] as u64) * 5;
        self.block.r5[1] = (self.r[2] as u64) * 5;
        self.block.r5[2] = (self.r[3] as u64) * 5;
        self.block.r5[3] = (self.r[4] as u64) * 5;

        self.block.m[0] = (self.acc[0] as u64) * (self.r[0] as u64)
            + (self.acc[1] as u64) * self.block.r5[3]
            + (self.acc[2] as u64) * self.block.r5[2]
            + (self.acc[3] as u64) * self.block.r5[1]
            + (self.acc[4] as u64) * self.block.r5[0];
        self.block.m[1] = (self.acc[0] as u64) * (self.r[1] as u64)
            + (self.acc[1] as u64) * (self.r[0] as u64)
            + (self.acc[2] as u64) * self.block.r5[3]
            + (self.acc[3] as u64) * self.block.r5[2]
            + (self.acc[4] as u64) * self.block.r5[1];
        self.block.m[2] = (self.acc[0] as u64) * (self.r[2] as u64)
            + (self.acc[1] as u64) * (self.r[1] as u64)
            + (self.acc[2] as u64) * (self.r[0] as u64)
            + (self.acc[3] as u64) * self.block.r5[3]
            + (self.acc[4] as u64) * self.block.r5[2];
        self.block.m[3] = (self.acc[0] as u64) * (self.r[3] as u64)
            + (self.acc[1] as u64) * (self.r[2] as u64)
            + (self.acc[2] as u64) * (self.r[1] as u64)
            + (self.acc[3] as u64) * (self.r[0] as u64)
            + (self.acc[4] as u64) * self.block.r5[3];
        self.block.m[4] = (self.acc[0] as u64) * (self.r[4] as u64)
            + (self.acc[1] as u64) * (self.r[3] as u64)
            + (self.acc[2] as u64) * (self.r[2] as u64)
            + (self.acc[3] as u64) * (self.r[1] as u64)
            + (self.acc[4] as u64) * (self.r[0] as u64);

        // Carry propagation back into 26-bit limbs.
        self.block.m[1] += self.block.m[0] >> 26;
        self.block.m[0] &= 0x3ffffff;
        self.block.m[2] += self.block.m[1] >> 26;
        self.block.m[1] &= 0x3ffffff;
        self.block.m[3] += self.block.m[2] >> 26;
        self.block.m[2] &= 0x3ffffff;
        self.block.m[4] += self.block.m[3] >> 26;
        self.block.m[3] &= 0x3ffffff;
        self.block.m[0] += (self.block.m[4] >> 26) * 5;
        self.block.m[4] &= 0x3ffffff;
        self.block.m[1] += self.block.m[0] >> 26;
        self.block.m[0] &= 0x3ffffff;

        self.acc[0] = self.block.m[0] as u32;
        self.acc[1] = self.block.m[1] as u32;
        self.acc[2] = self.block.m[2] as u32;
        self.acc[3] = self.block.m[3] as u32;
        self.acc[4] = self.block.m[4] as u32;

        self.block.zeroize();
    }

    pub fn update(&mut self, data: &[u8]) {
        debug_assert!(!self.finalized, "update after finalize");

        let mut pos = 0;

        if self.buffer_len > 0 {
            let want = core::cmp::min(BLOCK_SIZE - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + want].copy_from_slice(&data[..want]);
            self.buffer_len += want;
            pos = want;

            if self.buffer_len < BLOCK_SIZE {
                return;
            }

            self.block.tmp.copy_from_slice(&self.buffer);
            self.buffer.zeroize();
            self.buffer_len = 0;
            self.absorb_block(1);
        }

        while pos + BLOCK_SIZE <= data.len() {
            self.block.tmp.copy_from_slice(&data[pos..pos + BLOCK_SIZE]);
            self.absorb_block(1);
            pos += BLOCK_SIZE;
        }

        if pos < data.len() {
            let remaining = data.len() - pos;
            self.buffer[..remaining].copy_from_slice(&data[pos..]);
            self.buffer_len = remaining;
        }
    }

    /// Update with data, then zero-pad to the next 16-byte boundary
    /// (RFC 8439 Section 2.8 transcript rule).
    pub fn update_padded(&mut self, data: &[u8]) {
        self.update(data);

        let pad_len = (BLOCK_SIZE - (data.len() % BLOCK_SIZE)) % BLOCK_SIZE;
        if pad_len > 0 {
            self.update(&[0u8; BLOCK_SIZE][..pad_len]);
        }
    }

    pub fn finalize(&mut self, output: &mut [u8; TAG_SIZE]) {
        debug_assert!(!self.finalized, "finalize called twice");

        // A trailing partial block is padded with a single 0x01 then
        // zeros, and absorbed with the high bit clear.
        if self.buffer_len > 0 {
            self.buffer[self.buffer_len] = 0x01;
            for byte in self.buffer[self.buffer_len + 1..].iter_mut() {
                *byte = 0;
            }
            self.block.tmp.copy_from_slice(&self.buffer);
            self.buffer.zeroize();
            self.buffer_len = 0;
            self.absorb_block(0);
        }

        // Full carry propagation.
        self.fin.h = self.acc;
        self.fin.h[1] += self.fin.h[0] >> 26;
        self.fin.h[0] &= 0x3ffffff;
        self.fin.h[2] += self.fin.h[1] >> 26;
        self.fin.h[1] &= 0x3ffffff;
        self.fin.h[3] += self.fin.h[2] >> 26;
        self.fin.h[2] &= 0x3ffffff;
        self.fin.h[4] += self.fin.h[3] >> 26;
        self.fin.h[3] &= 0x3ffffff;
        self.fin.h[0] += (self.fin.h[4] >> 26) * 5;
        self.fin.h[4] &= 0x3ffffff;
        self.fin.h[1] += self.fin.h[0] >> 26;
        self.fin.h[0] &= 0x3ffffff;

        // g = h + 5. The overflow bit of the top limb decides whether h
        // was >= 2^130 - 5, selected below with a full-width mask.
        self.fin.g[0] = self.fin.h[0] + 5;
        self.fin.g[1] = self.fin.h[1] + (self.fin.g[0] >> 26);
        self.fin.g[0] &= 0x3ffffff;
        self.fin.g[2] = self.fin.h[2] + (self.fin.g[1] >> 26);
        self.fin.g[1] &= 0x3ffffff;
        self.fin.g[3] = self.fin.h[3] + (self.fin.g[2] >> 26);
        self.fin.g[2] &= 0x3ffffff;
        self.fin.g[4] = self.fin.h[4] + (self.fin.g[3] >> 26);
        self.fin.g[3] &= 0x3ffffff;

        // All ones when h < 2^130 - 5 (keep h), all zeros otherwise (take g).
        self.fin.mask = (self.fin.g[4] >> 26).wrapping_sub(1);

        self.fin.h[0] = (self.fin.h[0] & self.fin.mask) | (self.fin.g[0] & !self.fin.mask);
        self.fin.h[1] = (self.fin.h[1] & self.fin.mask) | (self.fin.g[1] & !self.fin.mask);
        self.fin.h[2] = (self.fin.h[2] & self.fin.mask) | (self.fin.g[2] & !self.fin.mask);
        self.fin.h[3] = (self.fin.h[3] & self.fin.mask) | (self.fin.g[3] & !self.fin.mask);
        // h - (2^130 - 5) fits in the low limbs; the top limb vanishes.
        self.fin.h[4] &= self.fin.mask;

        // Convert 26-bit radix to four 32-bit words.
        self.fin.words[0] =
            ((self.fin.h[0] as u64) | ((self.fin.h[1] as u64) << 26)) & 0xffffffff;
        self.fin.words[1] =
            (((self.fin.h[1] as u64) >> 6) | ((self.fin.h[2] as u64) << 20)) & 0xffffffff;
        self.fin.words[2] =
            (((self.fin.h[2] as u64) >> 12) | ((self.fin.h[3] as u64) << 14)) & 0xffffffff;
        self.fin.words[3] =
            (((self.fin.h[3] as u64) >> 18) | ((self.fin.h[4] as u64) << 8)) & 0xffffffff;

        // Add s with 32-bit carry propagation; the tag is the low 128 bits.
        self.fin.words[0] += self.pad[0] as u64;
        self.fin.words[1] += self.pad[1] as u64 + (self.fin.words[0] >> 32);
        self.fin.words[0] &= 0xffffffff;
        self.fin.words[2] += self.pad[2] as u64 + (self.fin.words[1] >> 32);
        self.fin.words[1] &= 0xffffffff;
        self.fin.words[3] += self.pad[3] as u64 + (self.fin.words[2] >> 32);
        self.fin.words[2] &= 0xffffffff;
        self.fin.words[3] &= 0xffffffff;

        for i in 0..4 {
            self.fin.out_word = self.fin.words[i] as u32;
            u32_to_le(
                &mut self.fin.out_word,
                (&mut output[i * 4..i * 4 + 4])
                    .try_into()
                    .expect("infallible: output slice is exactly 4 bytes"),
            );
        }

        self.fin.zeroize();
        self.finalized = true;
    }

    #[cfg(test)]
    pub fn compute(key: &[u8; KEY_SIZE], data: &[u8], output: &mut [u8; TAG_SIZE]) {
        let mut mac = Self::default();
        mac.init(key);
        mac.update(data);
        mac.finalize(output);
        mac.zeroize();
    }
}

impl core::fmt::Debug for Poly1305 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Poly1305 {{ [protected] }}")
    }
}
