// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Randomized Name Value Object
//!
//! Every file and directory stored under `filesystem/` is named by a
//! 10-character token drawn uniformly from `[A-Za-z]`, so the on-disk tree
//! leaks no plaintext names. This module owns the token alphabet, length,
//! generation, and validation.
//!
//! Tokens are minted by [`RandomizedName::generate`]; global uniqueness is
//! the name map's responsibility (it retries generation on the rare
//! collision before persisting an entry).

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::EfsError;

/// Length of every on-disk name token.
pub const RANDOMIZED_NAME_LEN: usize = 10;

/// Alphabet the tokens are drawn from. Alphabetic only, so a token is
/// always a valid path component on any platform.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// A 10-character `[A-Za-z]` token used as an on-disk file or directory
/// name.
///
/// Immutable value object with equality semantics. Construction goes
/// through [`RandomizedName::generate`] or [`RandomizedName::parse`]; both
/// guarantee the shape invariant, so holders never re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RandomizedName(String);

impl RandomizedName {
    /// Mints a fresh token from the process RNG.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let token: String = (0..RANDOMIZED_NAME_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        Self(token)
    }

    /// Validates an existing string as a token.
    ///
    /// # Errors
    ///
    /// Returns `EfsError::BadInput` when the length or alphabet is wrong.
    pub fn parse(value: &str) -> Result<Self, EfsError> {
        if Self::is_token(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(EfsError::BadInput(format!(
                "not a randomized name token: {value}"
            )))
        }
    }

    /// Shape test without construction. Used when scanning directory
    /// entries that may contain foreign files.
    pub fn is_token(value: &str) -> bool {
        value.len() == RANDOMIZED_NAME_LEN && value.bytes().all(|b| b.is_ascii_alphabetic())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RandomizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RandomizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
