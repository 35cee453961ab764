// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # User Account Store
//!
//! Key material persistence for accounts. Each account owns three files:
//!
//! - `common/<U>_key` - 32 raw bytes, the AES-256 key every file of `U`
//!   is sealed under;
//! - `key/private_keys/<U>.priv` - an Ed25519 keypair in PKCS#8 form,
//!   handed to the user as their login keyfile;
//! - `key/public_keys/<U>.pub` - the raw public key. Its existence is how
//!   the rest of the system tests whether an account exists.
//!
//! The keypair is consumed by tooling outside this process; in here only
//! the symmetric key and the existence marker are ever read back.

use std::fs;

use ring::rand::{SecureRandom, SystemRandom};
use ring::signature::{Ed25519KeyPair, KeyPair};
use tracing::debug;

use efs_domain::{EfsError, UserKey, Username, KEY_SIZE};

use crate::infrastructure::config::InstallLayout;

/// Account key material rooted at one installation.
pub struct UserAccounts {
    layout: InstallLayout,
    rng: SystemRandom,
}

impl UserAccounts {
    pub fn new(layout: InstallLayout) -> Self {
        Self {
            layout,
            rng: SystemRandom::new(),
        }
    }

    /// Account existence test via the public key marker.
    pub fn exists(&self, username: &Username) -> bool {
        self.layout.public_key_file(username.as_str()).is_file()
    }

    /// Reads the user's 32-byte symmetric key from `common/<U>_key`.
    ///
    /// # Errors
    ///
    /// `EfsError::NotFound` when the key file is absent;
    /// `EfsError::CryptoInit` when it is not exactly 32 bytes.
    pub fn load_key(&self, username: &Username) -> Result<UserKey, EfsError> {
        let path = self.layout.user_key_file(username.as_str());
        let bytes = fs::read(&path)
            .map_err(|_| EfsError::NotFound(format!("Failed to read key from metadata for {username}")))?;
        UserKey::from_bytes(&bytes)
    }

    /// Generates and persists all key material for a new account.
    ///
    /// # Errors
    ///
    /// `EfsError::Duplicate` when the account already exists;
    /// `EfsError::CryptoInit` when the random source fails; `EfsError::Io`
    /// on write failures.
    pub fn create_key_material(&self, username: &Username) -> Result<(), EfsError> {
        if self.exists(username) {
            return Err(EfsError::Duplicate(format!("User {username} already exists")));
        }

        let mut key = [0u8; KEY_SIZE];
        self.rng
            .fill(&mut key)
            .map_err(|e| EfsError::CryptoInit(format!("failed to generate key for {username}: {e:?}")))?;
        fs::write(self.layout.user_key_file(username.as_str()), key)
            .map_err(|e| EfsError::Io(format!("cannot write symmetric key for {username}: {e}")))?;

        let pkcs8 = Ed25519KeyPair::generate_pkcs8(&self.rng)
            .map_err(|e| EfsError::CryptoInit(format!("failed to generate keypair for {username}: {e:?}")))?;
        let keypair = Ed25519KeyPair::from_pkcs8(pkcs8.as_ref())
            .map_err(|e| EfsError::CryptoInit(format!("generated keypair is unusable: {e:?}")))?;

        fs::write(self.layout.private_key_file(username.as_str()), pkcs8.as_ref())
            .map_err(|e| EfsError::Io(format!("cannot write private key for {username}: {e}")))?;
        fs::write(
            self.layout.public_key_file(username.as_str()),
            keypair.public_key().as_ref(),
        )
        .map_err(|e| EfsError::Io(format!("cannot write public key for {username}: {e}")))?;

        debug!(user = %username, "account key material created");
        Ok(())
    }
}
