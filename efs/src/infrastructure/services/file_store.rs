// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # File Store
//!
//! The only component that touches the encrypted tree on disk. All
//! operations take virtual paths; the store anchors them at the
//! installation root, so nothing above it ever uses a host path or the
//! process working directory.
//!
//! The store moves opaque bytes. Sealing and opening blobs is the
//! cipher's job; deciding what may be written where is the application
//! layer's.

use std::fs;
use std::path::PathBuf;

use efs_domain::{EfsError, VirtualPath};

use crate::infrastructure::config::InstallLayout;

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One on-disk entry: the randomized token naming it, and its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    pub token: String,
    pub kind: EntryKind,
}

/// Disk access for one installation's encrypted tree.
pub struct FileStore {
    layout: InstallLayout,
}

impl FileStore {
    pub fn new(layout: InstallLayout) -> Self {
        Self { layout }
    }

    pub fn exists(&self, path: &VirtualPath) -> bool {
        self.layout.disk_path(path).exists()
    }

    pub fn is_dir(&self, path: &VirtualPath) -> bool {
        self.layout.disk_path(path).is_dir()
    }

    pub fn is_file(&self, path: &VirtualPath) -> bool {
        self.layout.disk_path(path).is_file()
    }

    /// Creates a directory (parents included) at a virtual location.
    pub fn create_dir(&self, path: &VirtualPath) -> Result<(), EfsError> {
        fs::create_dir_all(self.layout.disk_path(path))
            .map_err(|e| EfsError::Io(format!("cannot create directory {path}: {e}")))
    }

    /// Writes a sealed blob at a virtual location, replacing any previous
    /// content.
    pub fn write_blob(&self, path: &VirtualPath, blob: &[u8]) -> Result<(), EfsError> {
        fs::write(self.layout.disk_path(path), blob).map_err(|e| EfsError::Io(format!("cannot write {path}: {e}")))
    }

    /// Reads a sealed blob back.
    pub fn read_blob(&self, path: &VirtualPath) -> Result<Vec<u8>, EfsError> {
        fs::read(self.layout.disk_path(path)).map_err(|e| EfsError::Io(format!("cannot read {path}: {e}")))
    }

    /// Entries of a virtual directory, hidden names excluded. Order is
    /// whatever the platform returns; callers sort by plaintext name.
    pub fn entries(&self, path: &VirtualPath) -> Result<Vec<StoreEntry>, EfsError> {
        let disk_dir: PathBuf = self.layout.disk_path(path);
        let reader =
            fs::read_dir(&disk_dir).map_err(|e| EfsError::Io(format!("cannot list directory {path}: {e}")))?;

        let mut entries = Vec::new();
        for entry in reader {
            let entry = entry.map_err(|e| EfsError::Io(format!("cannot list directory {path}: {e}")))?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            let file_type = entry
                .file_type()
                .map_err(|e| EfsError::Io(format!("cannot stat {name}: {e}")))?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                continue;
            };
            entries.push(StoreEntry { token: name, kind });
        }
        Ok(entries)
    }
}
