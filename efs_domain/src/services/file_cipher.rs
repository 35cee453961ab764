// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # File Cipher Port
//!
//! Authenticated encryption of whole file bodies. The on-disk blob layout
//! is fixed:
//!
//! ```text
//! IV[16] || TAG[16] || CIPHERTEXT[*]
//! ```
//!
//! AES-256-GCM with a 16-byte IV and 16-byte authentication tag;
//! ciphertext length equals plaintext length. The domain depends on this
//! trait; the AES-GCM implementation lives in the infrastructure layer.

use crate::value_objects::UserKey;
use crate::EfsError;

/// IV length in bytes. The cipher is configured for this explicitly.
pub const IV_SIZE: usize = 16;

/// Authentication tag length in bytes.
pub const TAG_SIZE: usize = 16;

/// Fixed bytes a sealed blob adds on top of the plaintext length.
pub const BLOB_OVERHEAD: usize = IV_SIZE + TAG_SIZE;

/// Authenticated file-body encryption.
pub trait FileCipherService: Send + Sync {
    /// Encrypts `plaintext` under `key` with a fresh random IV and returns
    /// the self-contained blob.
    ///
    /// # Errors
    ///
    /// Returns `EfsError::CryptoInit` when the cipher or random source
    /// cannot be set up.
    fn seal(&self, plaintext: &[u8], key: &UserKey) -> Result<Vec<u8>, EfsError>;

    /// Verifies and decrypts a blob produced by [`FileCipherService::seal`].
    ///
    /// # Errors
    ///
    /// Returns `EfsError::IntegrityFailure` when the blob is truncated or
    /// the authentication tag does not verify.
    fn open(&self, blob: &[u8], key: &UserKey) -> Result<Vec<u8>, EfsError>;
}
