// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod chacha20poly1305;
mod error;

pub use chacha20poly1305::{AeadKey, ChaCha20Poly1305, Nonce, Tag};
pub use chacha20poly1305::{KEY_SIZE, MAX_DATA_SIZE, NONCE_SIZE, TAG_SIZE};
pub use error::AeadError;
