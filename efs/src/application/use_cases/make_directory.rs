// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Make Directory Use Case
//!
//! Creates a directory in the current location under a freshly allocated
//! randomized name. Writes are only permitted inside the caller's
//! `personal/` subtree, the name must be a single component, and the
//! reserved names `filesystem`, `.` and `..` are refused. A plaintext
//! name collision with an existing entry of either kind is a duplicate.

use std::sync::Arc;

use tracing::debug;

use efs_domain::services::authorization;
use efs_domain::{EfsError, NameMapRepository, Session};

use crate::infrastructure::services::FileStore;

pub struct MakeDirectory {
    name_map: Arc<dyn NameMapRepository>,
    store: Arc<FileStore>,
}

impl MakeDirectory {
    pub fn new(name_map: Arc<dyn NameMapRepository>, store: Arc<FileStore>) -> Self {
        Self { name_map, store }
    }

    pub fn execute(&self, session: &Session, name: &str) -> Result<(), EfsError> {
        if name.contains('/') {
            return Err(EfsError::BadInput("Directory name cannot contain '/'".to_string()));
        }
        if !authorization::can_write_here(self.name_map.as_ref(), session)? {
            return Err(EfsError::Forbidden("Forbidden".to_string()));
        }
        if name.is_empty() || name == "filesystem" || name == "." || name == ".." {
            return Err(EfsError::BadInput("Invalid directory name provided.".to_string()));
        }

        let logical = session.cwd().join(name);
        let token = match self.name_map.token_for(&logical)? {
            Some(existing) => {
                let existing_path = session.cwd().join(existing.as_str());
                if self.store.is_dir(&existing_path) {
                    return Err(EfsError::Duplicate(
                        "A directory with the same name already exists in the current path. Please choose a \
                         different name."
                            .to_string(),
                    ));
                }
                if self.store.is_file(&existing_path) {
                    return Err(EfsError::Duplicate(
                        "A file with the same name already exists in the current path. Please choose a different \
                         name."
                            .to_string(),
                    ));
                }
                // Mapped but absent on disk: reuse the token.
                existing
            }
            None => self.name_map.allocate(&logical)?,
        };

        debug!(dir = name, token = %token, "creating directory");
        self.store.create_dir(&session.cwd().join(token.as_str()))
    }
}
