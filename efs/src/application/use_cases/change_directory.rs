// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Change Directory Use Case
//!
//! Resolution policy for `cd`:
//!
//! - empty operand, `/`, or `~` jump to the session root;
//! - absolute paths other than `/` are refused, navigation is relative;
//! - anything else is normalized, translated component-wise through the
//!   name map, verified to be an existing directory on disk, and finally
//!   jail-checked by the session. On any refusal the current directory is
//!   unchanged.

use std::sync::Arc;

use tracing::debug;

use efs_domain::services::path_translation;
use efs_domain::{EfsError, NameMapRepository, Session};

use crate::infrastructure::services::FileStore;

pub struct ChangeDirectory {
    name_map: Arc<dyn NameMapRepository>,
    store: Arc<FileStore>,
}

impl ChangeDirectory {
    pub fn new(name_map: Arc<dyn NameMapRepository>, store: Arc<FileStore>) -> Self {
        Self { name_map, store }
    }

    /// Moves the session to `target`, or returns the diagnostic explaining
    /// why it stayed put.
    pub fn execute(&self, session: &mut Session, target: &str) -> Result<(), EfsError> {
        let target = target.trim();
        if target.is_empty() || target == "/" || target == "~" {
            session.go_to_root();
            return Ok(());
        }
        if target.starts_with('/') {
            return Err(EfsError::BadInput("Give a relative path.".to_string()));
        }

        let resolved = path_translation::randomize_relative(self.name_map.as_ref(), session.cwd(), target)?;
        if !self.store.is_dir(&resolved) {
            return Err(EfsError::NotFound(
                "ERROR: Path is either not a directory or doesn't exist!".to_string(),
            ));
        }

        debug!(requested = target, resolved = %resolved, "changing directory");
        session.set_cwd(resolved)
    }
}
