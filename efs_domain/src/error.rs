// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Domain Error System
//!
//! Hierarchical error type for the encrypted file server domain. Every
//! fallible operation in the domain, application, and infrastructure layers
//! returns [`EfsError`], and the shell decides how each kind is presented.
//!
//! ## Error Categories
//!
//! - **User diagnostics**: `BadInput`, `NotFound`, `Forbidden`, `Duplicate`
//!   carry the exact message shown at the prompt and return control to the
//!   REPL.
//! - **Cryptographic failures**: `IntegrityFailure` (authentication tag
//!   mismatch or truncated blob) and `CryptoInit` (cipher construction or
//!   random source failure). Both are command-scoped; the process never
//!   exits because a single file failed to decrypt.
//! - **Infrastructure failures**: `Io` for filesystem errors, `Metadata`
//!   for a corrupt or unreadable name-map document.
//!
//! ## Design Principles
//!
//! - **Typed, not fatal**: no layer calls `exit()`; errors travel up to the
//!   command dispatcher as values.
//! - **Message-carrying**: the user-diagnostic variants embed the final
//!   wording so call sites stay the single source of truth for shell
//!   output.

use thiserror::Error;

/// Domain-specific errors for the encrypted file server.
///
/// The four user-diagnostic variants display their payload verbatim; the
/// remaining variants prefix the payload with the failure class so log
/// output stays searchable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EfsError {
    /// Illegal character, missing operand, or invalid name.
    #[error("{0}")]
    BadInput(String),

    /// No such file, directory, or user.
    #[error("{0}")]
    NotFound(String),

    /// Write outside the personal subtree or navigation outside the jail.
    #[error("{0}")]
    Forbidden(String),

    /// Target already exists as another kind, or a share is already present.
    #[error("{0}")]
    Duplicate(String),

    /// Authentication tag did not verify, or the blob is malformed.
    #[error("Integrity check failed: {0}")]
    IntegrityFailure(String),

    /// Cipher construction or random source failure.
    #[error("Cipher initialization failed: {0}")]
    CryptoInit(String),

    /// Filesystem operation failed.
    #[error("I/O failure: {0}")]
    Io(String),

    /// The name-map document is missing, unreadable, or corrupt.
    #[error("Metadata error: {0}")]
    Metadata(String),
}

impl EfsError {
    /// Short category label for structured logging.
    pub fn category(&self) -> &'static str {
        match self {
            EfsError::BadInput(_) => "bad_input",
            EfsError::NotFound(_) => "not_found",
            EfsError::Forbidden(_) => "forbidden",
            EfsError::Duplicate(_) => "duplicate",
            EfsError::IntegrityFailure(_) => "integrity_failure",
            EfsError::CryptoInit(_) => "crypto_init",
            EfsError::Io(_) => "io",
            EfsError::Metadata(_) => "metadata",
        }
    }

    /// True for the variants whose message is user wording rather than a
    /// classified failure report.
    pub fn is_user_diagnostic(&self) -> bool {
        matches!(
            self,
            EfsError::BadInput(_) | EfsError::NotFound(_) | EfsError::Forbidden(_) | EfsError::Duplicate(_)
        )
    }
}

impl From<std::io::Error> for EfsError {
    fn from(err: std::io::Error) -> Self {
        EfsError::Io(err.to_string())
    }
}
