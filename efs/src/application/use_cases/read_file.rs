// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Read File Use Case
//!
//! `cat` for an encrypted file in the current directory. A standard user
//! decrypts with their own key. The administrator decrypts with the key
//! of the user whose tree the current directory lies in, taken from the
//! second component of the plaintext working path, so the admin can
//! inspect any user's files without holding their keyfile.

use std::sync::Arc;

use efs_domain::services::path_translation;
use efs_domain::{EfsError, FileCipherService, NameMapRepository, Session, UserKey, Username};

use crate::infrastructure::repositories::UserAccounts;
use crate::infrastructure::services::FileStore;

pub struct ReadFile {
    name_map: Arc<dyn NameMapRepository>,
    store: Arc<FileStore>,
    cipher: Arc<dyn FileCipherService>,
    accounts: Arc<UserAccounts>,
}

impl ReadFile {
    pub fn new(
        name_map: Arc<dyn NameMapRepository>,
        store: Arc<FileStore>,
        cipher: Arc<dyn FileCipherService>,
        accounts: Arc<UserAccounts>,
    ) -> Self {
        Self {
            name_map,
            store,
            cipher,
            accounts,
        }
    }

    /// Decrypts and returns the file's contents.
    pub fn execute(&self, session: &Session, name: &str) -> Result<String, EfsError> {
        if name.is_empty() {
            return Err(EfsError::BadInput("File name not provided".to_string()));
        }
        if name.contains('/') {
            return Err(EfsError::BadInput("File name cannot contain '/'".to_string()));
        }

        let token = self
            .name_map
            .token_for(&session.cwd().join(name))?
            .ok_or_else(|| EfsError::NotFound("File does not exist".to_string()))?;
        let file_path = session.cwd().join(token.as_str());
        if !self.store.is_file(&file_path) {
            return Err(EfsError::NotFound("File does not exist".to_string()));
        }

        let key = self.decryption_key(session)?;
        let blob = self.store.read_blob(&file_path)?;
        let plaintext = self.cipher.open(&blob, &key)?;
        Ok(String::from_utf8_lossy(&plaintext).into_owned())
    }

    /// The session's own key, or for the administrator the key of the
    /// user owning the current subtree.
    fn decryption_key(&self, session: &Session) -> Result<UserKey, EfsError> {
        if !session.is_admin() {
            return Ok(session.key().clone());
        }

        let plaintext_pwd = path_translation::plaintext_of(self.name_map.as_ref(), session.cwd())?;
        let owner = plaintext_pwd
            .split('/')
            .nth(2)
            .filter(|component| !component.is_empty())
            .ok_or_else(|| EfsError::NotFound("Failed to read key from metadata".to_string()))?;
        self.accounts.load_key(&Username::parse(owner)?)
    }
}
