// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Encrypted File Server
//!
//! An interactive shell over a POSIX-like filesystem whose file contents
//! and path components are encrypted at rest. Authenticated users hold a
//! 256-bit symmetric key; an administrator manages accounts and can
//! inspect files with per-user keys; sharing re-encrypts a file for its
//! recipient and keeps the copy in sync on every rewrite of the source.
//!
//! ## Architecture Overview
//!
//! The crate follows Clean Architecture and Domain-Driven Design:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Presentation Layer                         │
//! │  (Interactive Shell, Prompt, Diagnostics)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                                │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Application Layer                          │
//! │  (One Use Case per Command, Provisioning Service)           │
//! └─────────────────────────────────────────────────────────────┘
//!                                │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (efs-domain)                │
//! │  (Sessions, Virtual Paths, Translation, Authorization)      │
//! └─────────────────────────────────────────────────────────────┘
//!                                │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                Infrastructure Layer                         │
//! │  (AES-GCM Cipher, JSON Name Map, Share Registry, Disk)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## On-Disk Layout
//!
//! ```text
//! filesystem/                    encrypted user trees (names randomized)
//! key/public_keys/<U>.pub        account existence markers
//! key/private_keys/<U>.priv      account keypairs (login keyfiles)
//! common/structure.json          name map: token → logical path
//! common/<U>_key                 32 raw bytes: U's symmetric key
//! shared/<token>                 share registry entries
//! ```
//!
//! Every file body is stored as `IV[16] || TAG[16] || CIPHERTEXT` under
//! AES-256-GCM; every name under `filesystem/` is a 10-character
//! `[A-Za-z]` token.

pub mod application;
pub mod infrastructure;
pub mod presentation;
