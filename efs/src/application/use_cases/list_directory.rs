// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # List Directory Use Case
//!
//! Produces the `ls` lines: `d -> .`, `d -> ..` when the session is below
//! its root, then one line per visible entry with its plaintext leaf name
//! looked up from the name map. Entries are sorted by plaintext name so
//! output does not depend on platform directory order; on-disk tokens
//! whose name-map entry is missing are skipped with a warning rather than
//! leaking the token.

use std::sync::Arc;

use tracing::warn;

use efs_domain::{EfsError, NameMapRepository, Session};

use crate::infrastructure::services::{EntryKind, FileStore};

pub struct ListDirectory {
    name_map: Arc<dyn NameMapRepository>,
    store: Arc<FileStore>,
}

impl ListDirectory {
    pub fn new(name_map: Arc<dyn NameMapRepository>, store: Arc<FileStore>) -> Self {
        Self { name_map, store }
    }

    /// Lines to print, in final order.
    pub fn execute(&self, session: &Session) -> Result<Vec<String>, EfsError> {
        let mut lines = vec!["d -> .".to_string()];
        if !session.at_root() {
            lines.push("d -> ..".to_string());
        }

        let mut named: Vec<(String, EntryKind)> = Vec::new();
        for entry in self.store.entries(session.cwd())? {
            match self.name_map.leaf_name(&entry.token)? {
                Some(leaf) => named.push((leaf, entry.kind)),
                None => {
                    warn!(token = %entry.token, "directory entry has no name-map entry");
                }
            }
        }
        named.sort_by(|a, b| a.0.cmp(&b.0));

        for (leaf, kind) in named {
            let marker = match kind {
                EntryKind::Directory => 'd',
                EntryKind::File => 'f',
            };
            lines.push(format!("{marker} -> {leaf}"));
        }
        Ok(lines)
    }
}
