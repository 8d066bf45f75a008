// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEAD error types.

use crate::chacha20poly1305::MAX_DATA_SIZE;

/// Errors that can occur during AEAD operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AeadError {
    /// Authentication tag verification failed (ciphertext or AAD was modified)
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,

    /// Input length would exhaust the 32-bit block counter under one nonce
    #[error("data too long: at most {MAX_DATA_SIZE} bytes per (key, nonce)")]
    DataTooLong,
}
