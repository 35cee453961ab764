// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Name Map Repository Port
//!
//! The name map is the bidirectional dictionary between randomized on-disk
//! tokens and logical paths. A stored logical path is the randomized path
//! of the parent directory joined with the plaintext leaf, so translating
//! a user-typed path is a walk that looks up one component at a time while
//! extending the randomized key path.
//!
//! This is a port in the DDD sense: the domain depends on the trait, the
//! infrastructure layer provides the persisted JSON implementation.
//!
//! ## Contract
//!
//! - `allocate` never returns a token that is already mapped; the
//!   implementation retries generation on collision before persisting.
//! - After `allocate(p) → t`, `logical_path(t) == Some(p)` for the rest of
//!   the process lifetime. Entries are never removed.
//! - `token_for` is the exact inverse over the stored values.

use crate::value_objects::{RandomizedName, VirtualPath};
use crate::EfsError;

/// Persistent token ↔ logical path dictionary.
pub trait NameMapRepository: Send + Sync {
    /// Mints a fresh unique token for `logical_path`, persists the entry,
    /// and returns the token.
    fn allocate(&self, logical_path: &VirtualPath) -> Result<RandomizedName, EfsError>;

    /// Full logical path stored for `token`, if any.
    fn logical_path(&self, token: &str) -> Result<Option<VirtualPath>, EfsError>;

    /// Token whose stored value equals `logical_path`, if any.
    fn token_for(&self, logical_path: &VirtualPath) -> Result<Option<RandomizedName>, EfsError>;

    /// Plaintext leaf of the path stored for `token`, if any.
    fn leaf_name(&self, token: &str) -> Result<Option<String>, EfsError> {
        Ok(self.logical_path(token)?.map(|path| path.leaf().to_string()))
    }
}
