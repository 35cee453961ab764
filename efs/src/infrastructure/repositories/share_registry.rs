// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Share Registry
//!
//! Persisted links between a shared source file and its recipient mirror
//! copies. For a source stored under token `T`, the file `shared/T` holds
//! one line per recipient:
//!
//! ```text
//! bob:/filesystem/<rand(bob)>/<rand(shared)>/alice-memo
//! ```
//!
//! The value is the mirror copy's logical path exactly as stored in the
//! name map, so a rewrite of the source can find every mirror token again
//! and re-encrypt the new content for each recipient.
//!
//! Lines that do not contain a `:` separator are skipped on read; the
//! registry is append-only and shares are never deleted.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use tracing::warn;

use efs_domain::{EfsError, VirtualPath};

/// One recipient of a shared source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRecord {
    pub recipient: String,
    /// Logical path of the mirror copy (randomized parents, plaintext
    /// leaf `<owner>-<name>`).
    pub mirror_path: VirtualPath,
}

/// Append-only registry stored as one file per source token under
/// `shared/`.
pub struct ShareRegistry {
    shared_dir: PathBuf,
}

impl ShareRegistry {
    pub fn new(shared_dir: PathBuf) -> Self {
        Self { shared_dir }
    }

    fn record_file(&self, source_token: &str) -> PathBuf {
        self.shared_dir.join(source_token)
    }

    /// Appends a recipient line to the source's record, creating the
    /// record on first share.
    pub fn record(&self, source_token: &str, recipient: &str, mirror_path: &VirtualPath) -> Result<(), EfsError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.record_file(source_token))
            .map_err(|e| EfsError::Io(format!("cannot open share record for {source_token}: {e}")))?;
        writeln!(file, "{recipient}:{mirror_path}")
            .map_err(|e| EfsError::Io(format!("cannot append share record for {source_token}: {e}")))?;
        Ok(())
    }

    /// All recipients recorded for a source token. Missing record means
    /// the file was never shared.
    pub fn recipients(&self, source_token: &str) -> Result<Vec<ShareRecord>, EfsError> {
        let path = self.record_file(source_token);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let body = fs::read_to_string(&path)
            .map_err(|e| EfsError::Io(format!("cannot read share record for {source_token}: {e}")))?;

        let mut records = Vec::new();
        for line in body.lines() {
            let Some((recipient, mirror)) = line.split_once(':') else {
                continue;
            };
            match VirtualPath::parse(mirror) {
                Ok(mirror_path) => records.push(ShareRecord {
                    recipient: recipient.to_string(),
                    mirror_path,
                }),
                Err(_) => {
                    warn!(token = source_token, line, "skipping malformed share record line");
                }
            }
        }
        Ok(records)
    }

    /// True when any record in the registry already links `recipient` to
    /// `mirror_path`. One scan over the `shared/` directory.
    pub fn is_shared(&self, recipient: &str, mirror_path: &VirtualPath) -> Result<bool, EfsError> {
        let entries = match fs::read_dir(&self.shared_dir) {
            Ok(entries) => entries,
            Err(e) => return Err(EfsError::Io(format!("cannot scan shared directory: {e}"))),
        };

        for entry in entries {
            let entry = entry.map_err(|e| EfsError::Io(format!("cannot scan shared directory: {e}")))?;
            if !entry.path().is_file() {
                continue;
            }
            let Some(token) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            for record in self.recipients(&token)? {
                if record.recipient == recipient && &record.mirror_path == mirror_path {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}
