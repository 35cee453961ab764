// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Bootstrap Module
//!
//! Sits **outside** the enterprise application layers (domain,
//! application, infrastructure) and owns what must happen before any of
//! them run:
//!
//! - **Argument validation** - the keyfile argument and the account name
//!   derived from it
//! - **Exit codes** - mapping shell termination to process status
//!
//! Enterprise layers never depend on this crate; only the binary's entry
//! point does.

pub mod cli;
pub mod exit_code;

pub use cli::{parse_keyfile_arg, KeyfileArgError, LoginRequest};
pub use exit_code::ExitCode;
