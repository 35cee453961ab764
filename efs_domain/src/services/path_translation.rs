// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Path Translation Service
//!
//! Translation between the two path spaces the server lives in:
//!
//! - **Plaintext → randomized**: a user-typed relative path is walked
//!   component by component. `.` and `..` adjust the position; any other
//!   component is looked up in the name map under the key
//!   `<randomized-position>/<component>`, and the returned token becomes
//!   the next position. The walk therefore resolves and translates in one
//!   pass, and can never skip past an unmapped component.
//! - **Randomized → plaintext**: each token is replaced by the plaintext
//!   leaf of its stored logical path; the literal `filesystem` root is
//!   preserved.
//!
//! Inputs are normalized first: trailing slashes are stripped and runs of
//! slashes collapse to one. Attempting to step above `/filesystem` is
//! refused with the jail diagnostic, which also covers the administrator
//! whose root is `/filesystem` itself.

use crate::repositories::NameMapRepository;
use crate::value_objects::VirtualPath;
use crate::EfsError;

/// Strips trailing slashes (keeping a lone `/`) and collapses slash runs.
pub fn normalize_input(raw: &str) -> String {
    let mut path = raw.trim_end_matches('/').to_string();
    if path.is_empty() && raw.starts_with('/') {
        path.push('/');
    }
    let mut collapsed = String::with_capacity(path.len());
    let mut prev_slash = false;
    for ch in path.chars() {
        if ch == '/' {
            if !prev_slash {
                collapsed.push(ch);
            }
            prev_slash = true;
        } else {
            collapsed.push(ch);
            prev_slash = false;
        }
    }
    collapsed
}

/// Resolves a relative plaintext path against `cwd`, returning the
/// randomized virtual path it denotes.
///
/// # Errors
///
/// - `EfsError::NotFound` when a component has no name-map entry at its
///   position.
/// - `EfsError::Forbidden` when `..` would climb above `/filesystem`.
pub fn randomize_relative(
    map: &dyn NameMapRepository,
    cwd: &VirtualPath,
    input: &str,
) -> Result<VirtualPath, EfsError> {
    let normalized = normalize_input(input);
    let mut position = cwd.clone();

    for component in normalized.split('/').filter(|c| !c.is_empty()) {
        match component {
            "." => {}
            ".." => {
                position = position.parent().ok_or_else(|| {
                    EfsError::Forbidden("Directory is outside of the root directory.".to_string())
                })?;
            }
            name => {
                let key = position.join(name);
                let token = map.token_for(&key)?.ok_or_else(|| {
                    EfsError::NotFound("ERROR: Path is either not a directory or doesn't exist!".to_string())
                })?;
                position = position.join(token.as_str());
            }
        }
    }

    Ok(position)
}

/// Renders a randomized virtual path as its plaintext counterpart, e.g.
/// `/filesystem/AbCdEfGhIj/KlMnOpQrSt` → `/filesystem/alice/personal`.
///
/// # Errors
///
/// Returns `EfsError::Metadata` when a component has no name-map entry;
/// that means the map and the disk tree have diverged.
pub fn plaintext_of(map: &dyn NameMapRepository, path: &VirtualPath) -> Result<String, EfsError> {
    let mut rendered = String::new();
    for component in path.components() {
        rendered.push('/');
        if component == "filesystem" {
            rendered.push_str(component);
        } else {
            let leaf = map
                .leaf_name(component)?
                .ok_or_else(|| EfsError::Metadata(format!("no name-map entry for token {component}")))?;
            rendered.push_str(&leaf);
        }
    }
    Ok(rendered)
}
