// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # User Provisioning Service
//!
//! Creates everything a new account needs: key material through the
//! account store, then the randomized home tree
//! `/filesystem/<rand(U)>/{personal,shared}` through the name map and the
//! file store. Used by the `adduser` command and by first-run bootstrap,
//! which provisions `admin` the same way so the administrator owns a
//! personal subtree like everyone else.

use std::sync::Arc;

use tracing::debug;

use efs_domain::{EfsError, NameMapRepository, Username, VirtualPath};

use crate::infrastructure::repositories::UserAccounts;
use crate::infrastructure::services::FileStore;

/// Orchestrates account creation across key material, name map, and disk.
pub struct UserProvisioning {
    accounts: Arc<UserAccounts>,
    name_map: Arc<dyn NameMapRepository>,
    store: Arc<FileStore>,
}

impl UserProvisioning {
    pub fn new(accounts: Arc<UserAccounts>, name_map: Arc<dyn NameMapRepository>, store: Arc<FileStore>) -> Self {
        Self {
            accounts,
            name_map,
            store,
        }
    }

    /// Provisions a new account.
    ///
    /// # Errors
    ///
    /// `EfsError::Duplicate` when the account already exists; otherwise
    /// whatever the key store, name map, or disk reports.
    pub fn provision(&self, username: &Username) -> Result<(), EfsError> {
        self.accounts.create_key_material(username)?;

        let home_token = self
            .name_map
            .allocate(&VirtualPath::filesystem_root().join(username.as_str()))?;
        let home = VirtualPath::filesystem_root().join(home_token.as_str());
        self.store.create_dir(&home)?;

        for subdirectory in ["personal", "shared"] {
            let token = self.name_map.allocate(&home.join(subdirectory))?;
            self.store.create_dir(&home.join(token.as_str()))?;
        }

        debug!(user = %username, home = %home, "user provisioned");
        Ok(())
    }
}
