// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Write Authorization Service
//!
//! A session may create files and directories only while its current
//! directory lies inside its own `personal/` subtree. The authorized
//! prefix is `/filesystem/<rand(U)>/<rand(personal)>`, reconstructed from
//! the name map at check time, and the test itself is a whole-component
//! string prefix match on the session's virtual position. This applies to
//! the administrator too: admin writes happen in the admin's own home like
//! any other user's.

use crate::entities::Session;
use crate::repositories::NameMapRepository;
use crate::value_objects::{Username, VirtualPath};
use crate::EfsError;

/// Randomized path of `<user>/personal`, or `None` when the user's home
/// tree is incomplete.
pub fn personal_prefix(map: &dyn NameMapRepository, username: &Username) -> Result<Option<VirtualPath>, EfsError> {
    let home_key = VirtualPath::filesystem_root().join(username.as_str());
    let Some(home_token) = map.token_for(&home_key)? else {
        return Ok(None);
    };
    let home = VirtualPath::filesystem_root().join(home_token.as_str());

    let Some(personal_token) = map.token_for(&home.join("personal"))? else {
        return Ok(None);
    };
    Ok(Some(home.join(personal_token.as_str())))
}

/// True when the session's current directory permits writes.
pub fn can_write_here(map: &dyn NameMapRepository, session: &Session) -> Result<bool, EfsError> {
    match personal_prefix(map, session.username())? {
        Some(prefix) => Ok(session.cwd().starts_with(&prefix)),
        None => Ok(false),
    }
}
