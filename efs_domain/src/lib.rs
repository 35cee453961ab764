// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Encrypted File Server Domain
//!
//! Pure domain layer for the encrypted file server: the business rules of
//! a POSIX-like tree whose file contents and path components are encrypted
//! at rest.
//!
//! ## Core Concepts
//!
//! ### Randomized names
//! Every on-disk file and directory under `filesystem/` is named by a
//! 10-character `[A-Za-z]` token. The name map records, for each token,
//! the randomized path of its parent joined with the plaintext leaf, which
//! makes both translation directions a component-wise walk.
//!
//! ### Virtual paths
//! Navigation happens over virtual paths rooted at the literal
//! `/filesystem` component. The session holds the current directory as a
//! string of tokens, so the jail is a prefix test and the host process
//! working directory is never involved.
//!
//! ### Sealed blobs
//! File bodies are sealed with AES-256-GCM as `IV[16] || TAG[16] || CT`
//! under the owner's 256-bit key. Tampering with any byte fails the tag
//! check and surfaces as a typed integrity error.
//!
//! ## Layering
//!
//! This crate holds entities, value objects, domain services, and the
//! ports (`NameMapRepository`, `FileCipherService`) that the
//! infrastructure layer implements. It performs no I/O of its own.

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::{Session, UserRole};
pub use error::EfsError;
pub use repositories::NameMapRepository;
pub use services::{FileCipherService, BLOB_OVERHEAD, IV_SIZE, TAG_SIZE};
pub use value_objects::{
    FileName, RandomizedName, UserKey, Username, VirtualPath, ADMIN_USERNAME, FILESYSTEM_ROOT, KEY_SIZE,
    MAX_FILE_NAME_LEN, RANDOMIZED_NAME_LEN,
};
