// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Virtual Path Value Object
//!
//! The server never navigates the host filesystem directly. Every location
//! is a *virtual path*: an absolute, `/`-separated string rooted at the
//! literal component `filesystem`, whose remaining components are either
//! randomized name tokens (for on-disk locations) or a randomized parent
//! chain ending in a plaintext leaf (for name-map lookup keys).
//!
//! ## Overview
//!
//! - **Single representation**: one immutable type covers the session's
//!   current directory, jail roots, and name-map keys. The invariant is
//!   shape, not content: absolute, rooted at `/filesystem`, no empty
//!   components, no `.` or `..` components.
//! - **Pure string navigation**: the current directory and the jail are
//!   string state in the session, so authorization is a prefix test and no
//!   code ever calls the host's working-directory APIs.
//! - **Boundary-aware prefix**: [`VirtualPath::starts_with`] only matches
//!   whole components, never a partial leaf.

use std::fmt;

use crate::EfsError;

/// The literal root component. Never randomized; appears as-is both on
/// disk and in every virtual path.
pub const FILESYSTEM_ROOT: &str = "/filesystem";

/// An absolute virtual path rooted at `/filesystem`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VirtualPath(String);

impl VirtualPath {
    /// The root of the whole encrypted tree, `/filesystem`.
    pub fn filesystem_root() -> Self {
        Self(FILESYSTEM_ROOT.to_string())
    }

    /// Validates an absolute virtual path string.
    ///
    /// # Errors
    ///
    /// Returns `EfsError::BadInput` when the string is not rooted at
    /// `/filesystem` or contains empty, `.`, or `..` components.
    pub fn parse(value: &str) -> Result<Self, EfsError> {
        if value != FILESYSTEM_ROOT && !value.starts_with("/filesystem/") {
            return Err(EfsError::BadInput(format!(
                "virtual path must be rooted at {FILESYSTEM_ROOT}: {value}"
            )));
        }
        for component in value[1..].split('/') {
            if component.is_empty() || component == "." || component == ".." {
                return Err(EfsError::BadInput(format!(
                    "virtual path contains an illegal component: {value}"
                )));
            }
        }
        Ok(Self(value.to_string()))
    }

    /// Appends one component. The component must not contain `/`; callers
    /// pass either a name token or a plaintext leaf for a lookup key.
    pub fn join(&self, component: &str) -> Self {
        debug_assert!(!component.is_empty() && !component.contains('/'));
        Self(format!("{}/{}", self.0, component))
    }

    /// The containing directory, or `None` at `/filesystem`.
    pub fn parent(&self) -> Option<Self> {
        if self.0 == FILESYSTEM_ROOT {
            return None;
        }
        let cut = self.0.rfind('/').unwrap_or(0);
        Some(Self(self.0[..cut].to_string()))
    }

    /// Final path component.
    pub fn leaf(&self) -> &str {
        match self.0.rfind('/') {
            Some(cut) => &self.0[cut + 1..],
            None => &self.0,
        }
    }

    /// Whole-component prefix test. `/filesystem/a` is a prefix of
    /// `/filesystem/a/b` but not of `/filesystem/ab`.
    pub fn starts_with(&self, prefix: &VirtualPath) -> bool {
        self.0 == prefix.0 || (self.0.starts_with(&prefix.0) && self.0.as_bytes()[prefix.0.len()] == b'/')
    }

    pub fn is_filesystem_root(&self) -> bool {
        self.0 == FILESYSTEM_ROOT
    }

    /// Path components, leading with the literal `filesystem`.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0[1..].split('/')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
