// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Make File Use Case
//!
//! `mkfile` seals the given contents under the caller's key and stores
//! the blob under a randomized name in the current directory. Writing
//! over an existing file of the same plaintext name reuses its token;
//! colliding with a directory is refused.
//!
//! After every successful write the share registry is consulted: each
//! recorded recipient's mirror copy is re-encrypted under that
//! recipient's key, so mirrors always carry the latest contents. The
//! fan-out is sequential and best-effort; one failing recipient does not
//! undo the source write or the other mirrors.

use std::sync::Arc;

use tracing::{debug, warn};

use efs_domain::services::authorization;
use efs_domain::{EfsError, FileCipherService, FileName, NameMapRepository, Session, Username};

use crate::infrastructure::repositories::{ShareRegistry, UserAccounts};
use crate::infrastructure::services::FileStore;

pub struct MakeFile {
    name_map: Arc<dyn NameMapRepository>,
    store: Arc<FileStore>,
    cipher: Arc<dyn FileCipherService>,
    accounts: Arc<UserAccounts>,
    shares: Arc<ShareRegistry>,
}

impl MakeFile {
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

    pub fn execute(&self, session: &Session, name: &str, contents: &str) -> Result<(), EfsError> {
        if name.contains('/') {
            return Err(EfsError::BadInput("File name cannot contain '/'".to_string()));
        }
        if !authorization::can_write_here(self.name_map.as_ref(), session)? {
            return Err(EfsError::Forbidden("Forbidden".to_string()));
        }
        let name = FileName::parse(name)?;

        let logical = session.cwd().join(name.as_str());
        let token = match self.name_map.token_for(&logical)? {
            Some(existing) => {
                if self.store.is_dir(&session.cwd().join(existing.as_str())) {
                    return Err(EfsError::Duplicate(
                        "A directory with the same name already exists in the current path. Please choose a \
                         different name."
                            .to_string(),
                    ));
                }
                // Existing file: overwrite in place under the same token.
                existing
            }
            None => self.name_map.allocate(&logical)?,
        };

        let blob = self.cipher.seal(contents.as_bytes(), session.key())?;
        self.store.write_blob(&session.cwd().join(token.as_str()), &blob)?;
        debug!(name = %name, token = %token, "file written");

        self.propagate_to_mirrors(token.as_str(), contents);
        Ok(())
    }

    /// Re-encrypts the new contents for every recorded recipient.
    /// Failures are logged and skipped; mirrors written before a failure
    /// stay updated.
    fn propagate_to_mirrors(&self, source_token: &str, contents: &str) {
        let records = match self.shares.recipients(source_token) {
            Ok(records) => records,
            Err(error) => {
                warn!(%error, source_token, "cannot read share records, skipping propagation");
                return;
            }
        };

        for record in records {
            if let Err(error) = self.update_mirror(&record.recipient, &record.mirror_path, contents) {
                warn!(%error, recipient = %record.recipient, "mirror update failed");
            }
        }
    }

    fn update_mirror(
        &self,
        recipient: &str,
        mirror_path: &efs_domain::VirtualPath,
        contents: &str,
    ) -> Result<(), EfsError> {
        let mirror_token = self
            .name_map
            .token_for(mirror_path)?
            .ok_or_else(|| EfsError::Metadata(format!("no token for mirror path {mirror_path}")))?;
        let mirror_dir = mirror_path
            .parent()
            .ok_or_else(|| EfsError::Metadata(format!("mirror path has no parent: {mirror_path}")))?;

        let recipient_key = self.accounts.load_key(&Username::parse(recipient)?)?;
        let blob = self.cipher.seal(contents.as_bytes(), &recipient_key)?;
        self.store.write_blob(&mirror_dir.join(mirror_token.as_str()), &blob)?;
        debug!(recipient, mirror = %mirror_path, "mirror copy refreshed");
        Ok(())
    }
}
