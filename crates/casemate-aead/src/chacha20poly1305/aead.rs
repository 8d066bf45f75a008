// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20-Poly1305 AEAD (RFC 8439 Section 2.8).
//!
//! Decryption authenticates the full transcript before a single plaintext
//! byte is produced. All derived key material is zeroized on every exit
//! path, including authentication failure.

use casemate_util::{constant_time_eq, u64_to_le};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::AeadError;

use super::chacha20::ChaCha20;
use super::consts::{BLOCK_SIZE, CHACHA20_BLOCK_SIZE, KEY_SIZE, MAX_DATA_SIZE, TAG_SIZE};
use super::poly1305::Poly1305;
use super::types::{AeadKey, Nonce, Tag};

/// ChaCha20-Poly1305 AEAD with guaranteed zeroization.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20Poly1305 {
    chacha: ChaCha20,
    poly: Poly1305,
    key_block: [u8; CHACHA20_BLOCK_SIZE],
    poly_key: [u8; KEY_SIZE],
    expected_tag: [u8; TAG_SIZE],
    len_block: [u8; BLOCK_SIZE],
}

impl Default for ChaCha20Poly1305 {
    fn default() -> Self {
        Self {
            chacha: ChaCha20::default(),
            poly: Poly1305::default(),
            key_block: [0; CHACHA20_BLOCK_SIZE],
            poly_key: [0; KEY_SIZE],
            expected_tag: [0; TAG_SIZE],
            len_block: [0; BLOCK_SIZE],
        }
    }
}

impl ChaCha20Poly1305 {
    /// One-time MAC key = first 32 bytes of the keystream block at
    /// counter 0. Counters >= 1 are reserved for data.
    fn derive_poly_key(&mut self, key: &AeadKey, nonce: &Nonce) {
        self.chacha.block(key, nonce, 0, &mut self.key_block);
        self.poly_key.copy_from_slice(&self.key_block[0..KEY_SIZE]);
        self.key_block.zeroize();
    }

    /// Authenticated transcript: aad || pad16 || ciphertext || pad16 ||
    /// len(aad) LE u64 || len(ciphertext) LE u64.
    fn compute_tag(&mut self, aad: &[u8], ciphertext: &[u8]) {
        self.poly.init(&self.poly_key);
        self.poly.update_padded(aad);
        self.poly.update_padded(ciphertext);

        let mut aad_len = aad.len() as u64;
        let mut ct_len = ciphertext.len() as u64;
        u64_to_le(
            &mut aad_len,
            (&mut self.len_block[0..8])
                .try_into()
                .expect("infallible: len_block[0..8] is exactly 8 bytes"),
        );
        u64_to_le(
            &mut ct_len,
            (&mut self.len_block[8..16])
                .try_into()
                .expect("infallible: len_block[8..16] is exactly 8 bytes"),
        );
        self.poly.update(&self.len_block);

        self.poly.finalize(&mut self.expected_tag);

        self.len_block.zeroize();
        self.poly.zeroize();
    }

    /// Encrypt `data` in place and write the authentication tag.
    ///
    /// The caller must guarantee the nonce is unique under this key;
    /// reuse exposes the keystream and the one-time MAC key.
    pub fn encrypt(
        &mut self,
        key: &AeadKey,
        nonce: &Nonce,
        aad: &[u8],
        data: &mut [u8],
        tag: &mut Tag,
    ) -> Result<(), AeadError> {
        if data.len() as u64 > MAX_DATA_SIZE {
            return Err(AeadError::DataTooLong);
        }

        self.derive_poly_key(key, nonce);
        self.chacha.crypt(key, nonce, 1, data);
        self.compute_tag(aad, data);

        tag.copy_from_slice(&self.expected_tag);

        self.expected_tag.zeroize();
        self.poly_key.zeroize();

        Ok(())
    }

    /// Verify the tag over `data` (ciphertext), then decrypt in place.
    ///
    /// On tag mismatch the ciphertext buffer and all ephemeral state are
    /// zeroized and no plaintext is ever produced.
    pub fn decrypt(
        &mut self,
        key: &AeadKey,
        nonce: &Nonce,
        aad: &[u8],
        data: &mut [u8],
        tag: &Tag,
    ) -> Result<(), AeadError> {
        if data.len() as u64 > MAX_DATA_SIZE {
            return Err(AeadError::DataTooLong);
        }

        self.derive_poly_key(key, nonce);
        self.compute_tag(aad, data);

        if !constant_time_eq(&self.expected_tag, tag) {
            data.zeroize();
            self.expected_tag.zeroize();
            self.poly_key.zeroize();
            return Err(AeadError::AuthenticationFailed);
        }

        self.chacha.crypt(key, nonce, 1, data);

        self.expected_tag.zeroize();
        self.poly_key.zeroize();

        Ok(())
    }
}

impl core::fmt::Debug for ChaCha20Poly1305 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20Poly1305 {{ [protected] }}")
    }
}
