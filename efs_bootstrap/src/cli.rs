// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Keyfile Argument Validation
//!
//! The binary is invoked as `efs <keyfile>` once an installation exists.
//! The keyfile's stem names the account to log in as; `admin` grants
//! administrator rights. Validation happens here, before any enterprise
//! layer runs, so a malformed argument can never reach path construction:
//!
//! - the keyfile must exist and be a regular file;
//! - the stem must be non-empty and restricted to `[A-Za-z0-9._-]`, which
//!   rules out separators and traversal sequences in derived paths.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Keyfile argument rejection reasons.
#[derive(Error, Debug)]
pub enum KeyfileArgError {
    #[error("Invalid keyfile")]
    Missing,

    #[error("keyfile does not exist or is not a regular file: {0}")]
    NotAFile(String),

    #[error("keyfile name does not identify a user: {0}")]
    BadStem(String),
}

/// A validated login request derived from the keyfile argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account name taken from the keyfile stem.
    pub username: String,
    /// The keyfile as given on the command line.
    pub keyfile: PathBuf,
}

impl LoginRequest {
    pub fn is_admin(&self) -> bool {
        self.username == "admin"
    }
}

/// Validates the keyfile argument and derives the account name.
///
/// # Errors
///
/// Returns a [`KeyfileArgError`] when the path is not a regular file or
/// its stem cannot name an account.
pub fn parse_keyfile_arg(keyfile: &Path) -> Result<LoginRequest, KeyfileArgError> {
    if !keyfile.is_file() {
        return Err(KeyfileArgError::NotAFile(keyfile.display().to_string()));
    }

    let stem = keyfile
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-')) {
        return Err(KeyfileArgError::BadStem(keyfile.display().to_string()));
    }

    Ok(LoginRequest {
        username: stem.to_string(),
        keyfile: keyfile.to_path_buf(),
    })
}
