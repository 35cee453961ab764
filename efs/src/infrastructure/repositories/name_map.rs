// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Persisted Name Map
//!
//! JSON-backed implementation of the domain's `NameMapRepository` port.
//! The document at `common/structure.json` is a flat object mapping each
//! randomized token to the logical path it stands for:
//!
//! ```json
//! {
//!     "KjRmZpQwXy": "/filesystem/alice",
//!     "BtNvCsLdHe": "/filesystem/KjRmZpQwXy/personal"
//! }
//! ```
//!
//! ## Implementation Notes
//!
//! - **Two indices, one document.** The forward map (token → path) is the
//!   persisted truth; a reverse index (path → token) is rebuilt at load so
//!   both lookup directions are constant-time. Entries are only ever
//!   added, so the indices cannot drift.
//! - **Serialized mutation.** A `parking_lot::Mutex` guards the state;
//!   each allocation mutates the in-memory maps and rewrites the whole
//!   document while holding the lock.
//! - **Replace, never patch.** Writes go to a sibling temp file first and
//!   are renamed over the document, so a reader never observes a
//!   half-written map.
//! - **Collision retry.** Token generation retries until unused. With 52
//!   letters over 10 positions collisions are vanishingly rare, but the
//!   map is global to the installation and lives forever, so the check is
//!   still made.
//! - **Foreign entries tolerated.** The bootstrap seed (`"test": "123"`)
//!   and any entry whose value is not a well-formed virtual path simply
//!   never match a lookup.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::debug;

use efs_domain::{EfsError, NameMapRepository, RandomizedName, VirtualPath};

#[derive(Debug)]
struct MapState {
    /// Persisted document: token → logical path.
    forward: BTreeMap<RandomizedName, String>,
    /// Rebuilt at load: logical path → token.
    reverse: HashMap<String, RandomizedName>,
}

/// Name map persisted at `common/structure.json`.
#[derive(Debug)]
pub struct JsonNameMap {
    document_path: PathBuf,
    state: Mutex<MapState>,
}

impl JsonNameMap {
    /// Loads the document and builds the reverse index.
    ///
    /// # Errors
    ///
    /// Returns `EfsError::Metadata` when the document is missing or not a
    /// JSON object of strings.
    pub fn open(document_path: PathBuf) -> Result<Self, EfsError> {
        let raw = fs::read_to_string(&document_path)
            .map_err(|e| EfsError::Metadata(format!("cannot read {}: {e}", document_path.display())))?;
        let forward: BTreeMap<RandomizedName, String> = serde_json::from_str(&raw)
            .map_err(|e| EfsError::Metadata(format!("cannot parse {}: {e}", document_path.display())))?;

        let mut reverse = HashMap::with_capacity(forward.len());
        for (token, path) in &forward {
            reverse.insert(path.clone(), token.clone());
        }
        debug!(entries = forward.len(), "name map loaded");

        Ok(Self {
            document_path,
            state: Mutex::new(MapState { forward, reverse }),
        })
    }

    /// Writes the document to a temp file and renames it into place.
    fn persist(&self, state: &MapState) -> Result<(), EfsError> {
        let rendered = serde_json::to_string_pretty(&state.forward)
            .map_err(|e| EfsError::Metadata(format!("cannot serialize name map: {e}")))?;

        let tmp_path = self.document_path.with_extension("json.tmp");
        fs::write(&tmp_path, rendered)
            .map_err(|e| EfsError::Io(format!("cannot write {}: {e}", tmp_path.display())))?;
        fs::rename(&tmp_path, &self.document_path)
            .map_err(|e| EfsError::Io(format!("cannot replace {}: {e}", self.document_path.display())))?;
        Ok(())
    }
}

impl NameMapRepository for JsonNameMap {
    fn allocate(&self, logical_path: &VirtualPath) -> Result<RandomizedName, EfsError> {
        let mut state = self.state.lock();

        let token = loop {
            let candidate = RandomizedName::generate();
            if !state.forward.contains_key(&candidate) {
                break candidate;
            }
        };

        state
            .forward
            .insert(token.clone(), logical_path.as_str().to_string());
        state
            .reverse
            .insert(logical_path.as_str().to_string(), token.clone());
        self.persist(&state)?;

        debug!(token = %token, path = %logical_path, "name map entry allocated");
        Ok(token)
    }

    fn logical_path(&self, token: &str) -> Result<Option<VirtualPath>, EfsError> {
        let state = self.state.lock();
        let Ok(token) = RandomizedName::parse(token) else {
            return Ok(None);
        };
        Ok(state
            .forward
            .get(&token)
            .and_then(|path| VirtualPath::parse(path).ok()))
    }

    fn token_for(&self, logical_path: &VirtualPath) -> Result<Option<RandomizedName>, EfsError> {
        let state = self.state.lock();
        Ok(state.reverse.get(logical_path.as_str()).cloned())
    }
}
