// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Installation Layout
//!
//! Fixed directory layout of an installation, relative to the directory
//! the binary is started in:
//!
//! ```text
//! filesystem/                    encrypted user trees (names randomized)
//! key/public_keys/<U>.pub        account existence markers
//! key/private_keys/<U>.priv      account keypairs (PKCS#8)
//! common/structure.json          the name map document
//! common/<U>_key                 32 raw bytes: U's symmetric key
//! shared/<token>                 share registry entries
//! ```
//!
//! Every component that touches the disk goes through this type, so the
//! installation root appears in exactly one place.

use std::path::{Path, PathBuf};

use efs_domain::VirtualPath;

/// Paths of one installation rooted at a host directory.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// An installation exists once its `filesystem/` directory does.
    pub fn is_installed(root: &Path) -> bool {
        root.join("filesystem").is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn filesystem_dir(&self) -> PathBuf {
        self.root.join("filesystem")
    }

    pub fn key_dir(&self) -> PathBuf {
        self.root.join("key")
    }

    pub fn public_keys_dir(&self) -> PathBuf {
        self.root.join("key").join("public_keys")
    }

    pub fn private_keys_dir(&self) -> PathBuf {
        self.root.join("key").join("private_keys")
    }

    pub fn common_dir(&self) -> PathBuf {
        self.root.join("common")
    }

    pub fn shared_dir(&self) -> PathBuf {
        self.root.join("shared")
    }

    pub fn structure_json(&self) -> PathBuf {
        self.common_dir().join("structure.json")
    }

    pub fn user_key_file(&self, username: &str) -> PathBuf {
        self.common_dir().join(format!("{username}_key"))
    }

    pub fn public_key_file(&self, username: &str) -> PathBuf {
        self.public_keys_dir().join(format!("{username}.pub"))
    }

    pub fn private_key_file(&self, username: &str) -> PathBuf {
        self.private_keys_dir().join(format!("{username}.priv"))
    }

    /// Host path of a virtual location. `/filesystem/a/b` maps to
    /// `<root>/filesystem/a/b`.
    pub fn disk_path(&self, path: &VirtualPath) -> PathBuf {
        self.root.join(&path.as_str()[1..])
    }

    /// Creates the installation skeleton on first run: every top-level
    /// directory plus the seeded name-map document.
    ///
    /// # Errors
    ///
    /// Returns `EfsError::Io` when a directory or the seed document cannot
    /// be created.
    pub fn bootstrap_skeleton(&self) -> Result<(), efs_domain::EfsError> {
        use efs_domain::EfsError;

        for dir in [
            self.key_dir(),
            self.public_keys_dir(),
            self.private_keys_dir(),
            self.common_dir(),
            self.shared_dir(),
            self.filesystem_dir(),
        ] {
            std::fs::create_dir_all(&dir)
                .map_err(|e| EfsError::Io(format!("cannot create {}: {e}", dir.display())))?;
        }

        std::fs::write(self.structure_json(), "{\"test\":\"123\"}")
            .map_err(|e| EfsError::Io(format!("Error creating structure.json: {e}")))?;
        Ok(())
    }
}
