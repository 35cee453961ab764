// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Print Working Directory Use Case
//!
//! Renders the session's randomized position as a plaintext logical path.
//! The same rendering feeds the shell prompt.

use std::sync::Arc;

use efs_domain::services::path_translation;
use efs_domain::{EfsError, NameMapRepository, Session};

pub struct PrintWorkingDirectory {
    name_map: Arc<dyn NameMapRepository>,
}

impl PrintWorkingDirectory {
    pub fn new(name_map: Arc<dyn NameMapRepository>) -> Self {
        Self { name_map }
    }

    pub fn execute(&self, session: &Session) -> Result<String, EfsError> {
        path_translation::plaintext_of(self.name_map.as_ref(), session.cwd())
    }
}
