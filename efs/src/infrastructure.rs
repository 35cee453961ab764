// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Infrastructure Layer
//!
//! Concrete implementations of the domain ports: the AES-GCM cipher, the
//! persisted name map, the share registry, account key material, and the
//! on-disk file store, all anchored at one installation layout.

pub mod adapters;
pub mod config;
pub mod repositories;
pub mod services;
