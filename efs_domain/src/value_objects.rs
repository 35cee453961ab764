// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Domain Value Objects
//!
//! Immutable values with validation at the boundary: randomized name
//! tokens, virtual paths, file names, usernames, and key material. Once
//! constructed, a value is known good and is never re-validated.

pub mod file_name;
pub mod randomized_name;
pub mod user_key;
pub mod username;
pub mod virtual_path;

pub use file_name::{FileName, MAX_FILE_NAME_LEN};
pub use randomized_name::{RandomizedName, RANDOMIZED_NAME_LEN};
pub use user_key::{UserKey, KEY_SIZE};
pub use username::{Username, ADMIN_USERNAME};
pub use virtual_path::{VirtualPath, FILESYSTEM_ROOT};
