// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # User Key Value Object
//!
//! Secure container for a user's 256-bit symmetric key. The raw bytes are
//! wiped from memory when the value is dropped, and the `Debug`
//! representation never prints key material.

use zeroize::Zeroize;

use crate::EfsError;

/// Symmetric key length in bytes (AES-256).
pub const KEY_SIZE: usize = 32;

/// A 32-byte symmetric key with automatic zeroization on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct UserKey([u8; KEY_SIZE]);

impl Drop for UserKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl UserKey {
    /// Wraps raw key bytes, enforcing the length invariant.
    ///
    /// # Errors
    ///
    /// Returns `EfsError::CryptoInit` when the slice is not exactly 32
    /// bytes. A short `common/<U>_key` file means the installation is
    /// damaged, not that the caller mistyped something.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EfsError> {
        let raw: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| EfsError::CryptoInit(format!("key must be {KEY_SIZE} bytes, got {}", bytes.len())))?;
        Ok(Self(raw))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for UserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("UserKey(..)")
    }
}
