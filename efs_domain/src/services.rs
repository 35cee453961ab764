// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Domain Services
//!
//! Stateless domain logic that spans value objects: path translation over
//! the name map, the personal-subtree write rule, and the file cipher
//! port.

pub mod authorization;
pub mod file_cipher;
pub mod path_translation;

pub use file_cipher::{FileCipherService, BLOB_OVERHEAD, IV_SIZE, TAG_SIZE};
