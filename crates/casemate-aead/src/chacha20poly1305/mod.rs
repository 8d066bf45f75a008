// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod tests;

mod aead;
mod chacha20;
mod consts;
mod poly1305;
mod types;

pub use aead::ChaCha20Poly1305;
pub use consts::{KEY_SIZE, MAX_DATA_SIZE, NONCE_SIZE, TAG_SIZE};
pub use types::{AeadKey, Nonce, Tag};
