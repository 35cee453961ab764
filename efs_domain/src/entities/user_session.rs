// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # User Session Entity
//!
//! A session is the authenticated state threaded through every command:
//! who is logged in, their symmetric key, the jail root, and the current
//! virtual directory. Holding the current directory here, as a string of
//! randomized components, is what decouples navigation from the host
//! process working directory and turns the jail into a pure string test.
//!
//! ## Invariants
//!
//! - `cwd` always lies within `root` (enforced by [`Session::set_cwd`]).
//! - For a standard user, `root` is the randomized home directory
//!   `/filesystem/<rand(U)>`; for the administrator it is `/filesystem`
//!   itself, so navigation is unrestricted below the tree root.

use crate::value_objects::{UserKey, Username, VirtualPath};
use crate::EfsError;

/// Privilege level attached to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    /// May administer accounts and navigate the whole tree.
    Admin,
    /// Confined to the home directory jail.
    Standard,
}

/// Authenticated shell session.
#[derive(Debug, Clone)]
pub struct Session {
    username: Username,
    role: UserRole,
    key: UserKey,
    root: VirtualPath,
    cwd: VirtualPath,
}

impl Session {
    /// Opens a session jailed at `root`. The current directory starts at
    /// the jail root.
    pub fn new(username: Username, role: UserRole, key: UserKey, root: VirtualPath) -> Self {
        let cwd = root.clone();
        Self {
            username,
            role,
            key,
            root,
            cwd,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn key(&self) -> &UserKey {
        &self.key
    }

    /// Jail root: the deepest ancestor every reachable path shares.
    pub fn root(&self) -> &VirtualPath {
        &self.root
    }

    pub fn cwd(&self) -> &VirtualPath {
        &self.cwd
    }

    pub fn at_root(&self) -> bool {
        self.cwd == self.root
    }

    /// Moves the session to `target`.
    ///
    /// # Errors
    ///
    /// Returns `EfsError::Forbidden` when `target` leaves the jail; the
    /// current directory is unchanged in that case.
    pub fn set_cwd(&mut self, target: VirtualPath) -> Result<(), EfsError> {
        if !target.starts_with(&self.root) {
            return Err(EfsError::Forbidden(
                "Directory is outside of the root directory.".to_string(),
            ));
        }
        self.cwd = target;
        Ok(())
    }

    /// Jumps back to the jail root (`cd /`, `cd ~`, bare `cd`).
    pub fn go_to_root(&mut self) {
        self.cwd = self.root.clone();
    }
}
