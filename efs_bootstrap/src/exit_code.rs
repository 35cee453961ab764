// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Exit Code Management
//!
//! Process exit statuses for the shell binary. The contract is small: a
//! clean `exit` (or end of input) terminates with 0, and any startup
//! failure, an invalid or missing keyfile included, terminates with 1.

use std::fmt;

/// Process exit statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful termination (0)
    #[default]
    Success = 0,

    /// Startup failure (1)
    /// - Missing or invalid keyfile
    /// - Installation bootstrap failure
    /// - Unreadable name-map document
    StartupFailure = 1,
}

impl ExitCode {
    /// Value handed to `std::process::exit`.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "success (0)"),
            ExitCode::StartupFailure => write!(f, "startup failure (1)"),
        }
    }
}
