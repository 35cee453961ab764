// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Add User Use Case
//!
//! Administrator-only account creation. Validates the username, then
//! delegates to the provisioning service for key material and the home
//! tree. The shell already hides `adduser` from standard users; the role
//! check here is the enforcement.

use std::sync::Arc;

use efs_domain::{EfsError, Session, Username};

use crate::application::services::UserProvisioning;

pub struct AddUser {
    provisioning: Arc<UserProvisioning>,
}

impl AddUser {
    pub fn new(provisioning: Arc<UserProvisioning>) -> Self {
        Self { provisioning }
    }

    pub fn execute(&self, session: &Session, username: &str) -> Result<Username, EfsError> {
        if !session.is_admin() {
            return Err(EfsError::Forbidden("Forbidden".to_string()));
        }
        let username = Username::parse(username)?;
        self.provisioning.provision(&username)?;
        Ok(username)
    }
}
