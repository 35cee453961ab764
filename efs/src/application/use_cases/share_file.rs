// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Share File Use Case
//!
//! Shares a file from the caller's `personal/` subtree with another user.
//! The source is decrypted under the caller's key, re-encrypted under the
//! recipient's key, and written into the recipient's `shared/` directory
//! as `<caller>-<name>` (a fresh token names the mirror on disk). The
//! link is recorded in the share registry so later rewrites of the source
//! refresh the mirror.
//!
//! Sharing the same source with the same recipient twice is refused with
//! the duplicate diagnostic.

use std::sync::Arc;

use tracing::debug;

use efs_domain::services::authorization;
use efs_domain::{EfsError, FileCipherService, NameMapRepository, Session, Username, VirtualPath};

use crate::infrastructure::repositories::{ShareRegistry, UserAccounts};
use crate::infrastructure::services::FileStore;

pub struct ShareFile {
    name_map: Arc<dyn NameMapRepository>,
    store: Arc<FileStore>,
    cipher: Arc<dyn FileCipherService>,
    accounts: Arc<UserAccounts>,
    shares: Arc<ShareRegistry>,
}

impl ShareFile {
    pub fn new(
        name_map: Arc<dyn NameMapRepository>,
        store: Arc<FileStore>,
        cipher: Arc<dyn FileCipherService>,
        accounts: Arc<UserAccounts>,
        shares: Arc<ShareRegistry>,
    ) -> Self {
        Self {
            name_map,
            store,
            cipher,
            accounts,
            shares,
        }
    }

    pub fn execute(&self, session: &Session, name: &str, recipient: &str) -> Result<(), EfsError> {
        if !authorization::can_write_here(self.name_map.as_ref(), session)? {
            return Err(EfsError::Forbidden("Forbidden".to_string()));
        }
        if name.is_empty() {
            return Err(EfsError::BadInput("File name not provided".to_string()));
        }
        if name.contains('/') {
            return Err(EfsError::BadInput("File name cannot contain '/'".to_string()));
        }
        let recipient = Username::parse(recipient)?;

        // The source must be an existing regular file here.
        let source_token = self
            .name_map
            .token_for(&session.cwd().join(name))?
            .ok_or_else(|| EfsError::NotFound("File does not exist".to_string()))?;
        let source_path = session.cwd().join(source_token.as_str());
        if !self.store.is_file(&source_path) {
            return Err(EfsError::NotFound("File does not exist".to_string()));
        }

        if !self.accounts.exists(&recipient) {
            return Err(EfsError::NotFound(format!("User {recipient} does not exist!")));
        }

        let mirror_dir = self.shared_dir_of(&recipient)?;
        let mirror_path = mirror_dir.join(&format!("{}-{}", session.username(), name));
        if self.shares.is_shared(recipient.as_str(), &mirror_path)? {
            return Err(EfsError::Duplicate(format!(
                "A file with name {name} has already been shared with {recipient}"
            )));
        }

        let plaintext = self.cipher.open(&self.store.read_blob(&source_path)?, session.key())?;
        let recipient_key = self.accounts.load_key(&recipient)?;

        let mirror_token = self.name_map.allocate(&mirror_path)?;
        self.store.write_blob(
            &mirror_dir.join(mirror_token.as_str()),
            &self.cipher.seal(&plaintext, &recipient_key)?,
        )?;

        self.shares.record(source_token.as_str(), recipient.as_str(), &mirror_path)?;
        debug!(file = name, recipient = %recipient, "file shared");
        Ok(())
    }

    /// Randomized path of the recipient's `shared/` directory. Mirror
    /// copies land here as `<caller>-<name>`.
    fn shared_dir_of(&self, recipient: &Username) -> Result<VirtualPath, EfsError> {
        let home_token = self
            .name_map
            .token_for(&VirtualPath::filesystem_root().join(recipient.as_str()))?
            .ok_or_else(|| EfsError::NotFound(format!("User {recipient} does not exist!")))?;
        let home = VirtualPath::filesystem_root().join(home_token.as_str());

        let shared_token = self
            .name_map
            .token_for(&home.join("shared"))?
            .ok_or_else(|| EfsError::Metadata(format!("user {recipient} has no shared directory")))?;

        Ok(home.join(shared_token.as_str()))
    }
}
