// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared constants for ChaCha20-Poly1305.

/// Key size in bytes
pub const KEY_SIZE: usize = 32;

/// Nonce size in bytes (IETF ChaCha20)
pub const NONCE_SIZE: usize = 12;

/// Authentication tag size in bytes
pub const TAG_SIZE: usize = 16;

/// Poly1305 block size in bytes (also the AEAD padding boundary)
pub const BLOCK_SIZE: usize = 16;

/// ChaCha20 keystream block size in bytes
pub const CHACHA20_BLOCK_SIZE: usize = 64;

/// Hard limit on plaintext/ciphertext length under one (key, nonce) pair.
///
/// Block counter 0 is reserved for the one-time MAC key, leaving 2^32 - 1
/// keystream blocks for data. Longer inputs are rejected before any
/// processing begins.
pub const MAX_DATA_SIZE: u64 = (u32::MAX as u64) * CHACHA20_BLOCK_SIZE as u64;
