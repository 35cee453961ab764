// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # File Name Value Object
//!
//! Grammar for plaintext names accepted by `mkfile`. A name is a single
//! token that starts and ends with `[A-Za-z0-9]`, may contain interior
//! spaces, dots, underscores, and dashes, and may carry one or more
//! `.ext` segments. Path separators are never legal; names are capped at
//! 255 bytes like most native filesystems.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::EfsError;

/// Longest accepted plaintext file name.
pub const MAX_FILE_NAME_LEN: usize = 255;

/// Either `stem(.ext)+` or a bare stem. The stem must begin and end with
/// an alphanumeric character; extensions are `[A-Za-z0-9_-]+`.
static FILE_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9](?:[a-zA-Z0-9 ._-]*[a-zA-Z0-9])?(\.[a-zA-Z0-9_-]+)+$|^[a-zA-Z0-9](?:[a-zA-Z0-9 ._-]*[a-zA-Z0-9])?$",
    )
    .expect("file name pattern is a valid regex")
});

/// A validated plaintext file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    /// Validates a candidate name against the grammar.
    ///
    /// # Errors
    ///
    /// Returns `EfsError::BadInput` with the shell's wording when the name
    /// contains `/` or fails the grammar.
    pub fn parse(value: &str) -> Result<Self, EfsError> {
        if value.is_empty() {
            return Err(EfsError::BadInput("File name not provided".to_string()));
        }
        if value.contains('/') {
            return Err(EfsError::BadInput("File name cannot contain '/'".to_string()));
        }
        if !Self::is_valid(value) {
            return Err(EfsError::BadInput("Not a valid filename, try again.".to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Grammar test without construction.
    pub fn is_valid(value: &str) -> bool {
        value.len() <= MAX_FILE_NAME_LEN && FILE_NAME_PATTERN.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
