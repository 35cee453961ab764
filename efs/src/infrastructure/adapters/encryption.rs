// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # AES-256-GCM File Cipher
//!
//! Infrastructure implementation of the domain's [`FileCipherService`]
//! port. Seals file bodies as `IV[16] || TAG[16] || CT` under a 256-bit
//! key.
//!
//! ## Notes on the format
//!
//! - The IV is 16 bytes rather than GCM's native 12; the cipher is
//!   instantiated with an explicit 16-byte nonce size, which derives the
//!   initial counter block through GHASH exactly as an OpenSSL context
//!   with `EVP_CTRL_GCM_SET_IVLEN = 16` does.
//! - The authentication tag is kept detached and stored between the IV
//!   and the ciphertext, so ciphertext length always equals plaintext
//!   length.
//! - A fresh IV is drawn from the system's secure random source for every
//!   seal; IVs are never reused across writes of the same file.
//!
//! Tag verification happens before any plaintext is released; a truncated
//! blob or a single flipped bit anywhere in IV, tag, or ciphertext yields
//! an integrity error, never wrong plaintext.

use aes_gcm::aead::generic_array::{typenum::U16, GenericArray};
use aes_gcm::aes::Aes256;
use aes_gcm::{AeadInPlace, AesGcm, KeyInit};
use ring::rand::{SecureRandom, SystemRandom};

use efs_domain::{EfsError, FileCipherService, UserKey, IV_SIZE, TAG_SIZE};

/// AES-256-GCM with a 16-byte IV.
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Concrete cipher backed by the system random source.
pub struct AesGcmFileCipher {
    rng: SystemRandom,
}

impl Default for AesGcmFileCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl AesGcmFileCipher {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    fn fresh_iv(&self) -> Result<[u8; IV_SIZE], EfsError> {
        let mut iv = [0u8; IV_SIZE];
        self.rng
            .fill(&mut iv)
            .map_err(|e| EfsError::CryptoInit(format!("failed to draw IV: {e:?}")))?;
        Ok(iv)
    }
}

impl FileCipherService for AesGcmFileCipher {
    fn seal(&self, plaintext: &[u8], key: &UserKey) -> Result<Vec<u8>, EfsError> {
        let cipher = Aes256Gcm16::new(GenericArray::from_slice(key.as_bytes()));
        let iv = self.fresh_iv()?;

        let mut body = plaintext.to_vec();
        let tag = cipher
            .encrypt_in_place_detached(GenericArray::from_slice(&iv), b"", &mut body)
            .map_err(|_| EfsError::CryptoInit("AES-256-GCM encryption failed".to_string()))?;

        let mut blob = Vec::with_capacity(IV_SIZE + TAG_SIZE + body.len());
        blob.extend_from_slice(&iv);
        blob.extend_from_slice(tag.as_slice());
        blob.extend_from_slice(&body);
        Ok(blob)
    }

    fn open(&self, blob: &[u8], key: &UserKey) -> Result<Vec<u8>, EfsError> {
        if blob.len() < IV_SIZE + TAG_SIZE {
            return Err(EfsError::IntegrityFailure(format!(
                "blob too short: {} bytes",
                blob.len()
            )));
        }

        let (iv, rest) = blob.split_at(IV_SIZE);
        let (tag, ciphertext) = rest.split_at(TAG_SIZE);

        let cipher = Aes256Gcm16::new(GenericArray::from_slice(key.as_bytes()));
        let mut body = ciphertext.to_vec();
        cipher
            .decrypt_in_place_detached(
                GenericArray::from_slice(iv),
                b"",
                &mut body,
                GenericArray::from_slice(tag),
            )
            .map_err(|_| EfsError::IntegrityFailure("authentication tag mismatch".to_string()))?;

        Ok(body)
    }
}
