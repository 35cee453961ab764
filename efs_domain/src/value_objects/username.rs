// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Username Value Object
//!
//! Usernames name key files (`common/<U>_key`, `key/public_keys/<U>.pub`)
//! and the plaintext leaf of the user's home directory, so the grammar is
//! restricted to characters that are safe in both places: a leading
//! alphanumeric followed by up to 31 of `[A-Za-z0-9._-]`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::EfsError;

/// Reserved name of the administrator account.
pub const ADMIN_USERNAME: &str = "admin";

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9._-]{0,31}$").expect("username pattern is a valid regex"));

/// A validated account name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validates a candidate username.
    ///
    /// # Errors
    ///
    /// Returns `EfsError::BadInput` when the name is empty or fails the
    /// grammar.
    pub fn parse(value: &str) -> Result<Self, EfsError> {
        if value.is_empty() {
            return Err(EfsError::BadInput("Please enter a username".to_string()));
        }
        if !USERNAME_PATTERN.is_match(value) {
            return Err(EfsError::BadInput(format!("Invalid username: {value}")));
        }
        Ok(Self(value.to_string()))
    }

    pub fn is_admin(&self) -> bool {
        self.0 == ADMIN_USERNAME
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
