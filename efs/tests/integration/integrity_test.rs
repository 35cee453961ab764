// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Integrity Scenarios
//!
//! Tampering with stored blobs must surface as a command-scoped integrity
//! error, never as wrong plaintext and never as a process exit.

use crate::common::TestInstallation;
use efs_domain::{EfsError, IV_SIZE, TAG_SIZE};

fn alice_with_file(installation: &TestInstallation) -> (efs_domain::Session, std::path::PathBuf) {
    installation.add_user("alice");
    let mut alice = installation.login("alice");
    installation.cd(&mut alice, "personal").unwrap();
    installation.mkfile(&alice, "notes.txt", "hello").unwrap();

    let entries = installation.store.entries(alice.cwd()).unwrap();
    let disk_path = installation.layout.disk_path(&alice.cwd().join(&entries[0].token));
    (alice, disk_path)
}

#[test]
fn test_flipped_iv_tag_and_ciphertext_bytes_all_fail() {
    let installation = TestInstallation::bootstrap();
    let (alice, disk_path) = alice_with_file(&installation);

    let original = std::fs::read(&disk_path).unwrap();
    assert_eq!(original.len(), IV_SIZE + TAG_SIZE + "hello".len());

    // One probe in the IV, one in the tag, one in the ciphertext.
    for index in [0, IV_SIZE, IV_SIZE + TAG_SIZE] {
        let mut mutated = original.clone();
        mutated[index] ^= 0x01;
        std::fs::write(&disk_path, &mutated).unwrap();

        let err = installation.cat(&alice, "notes.txt").unwrap_err();
        assert!(
            matches!(err, EfsError::IntegrityFailure(_)),
            "flip at byte {index} yielded {err:?}"
        );
    }

    // Restoring the original bytes makes the file readable again.
    std::fs::write(&disk_path, &original).unwrap();
    assert_eq!(installation.cat(&alice, "notes.txt").unwrap(), "hello");
}

#[test]
fn test_truncated_blob_fails_integrity() {
    let installation = TestInstallation::bootstrap();
    let (alice, disk_path) = alice_with_file(&installation);

    std::fs::write(&disk_path, &std::fs::read(&disk_path).unwrap()[..IV_SIZE]).unwrap();
    let err = installation.cat(&alice, "notes.txt").unwrap_err();
    assert!(matches!(err, EfsError::IntegrityFailure(_)));
}

#[test]
fn test_session_survives_integrity_failure() {
    let installation = TestInstallation::bootstrap();
    let (alice, disk_path) = alice_with_file(&installation);

    let mut mutated = std::fs::read(&disk_path).unwrap();
    let last = mutated.len() - 1;
    mutated[last] ^= 0xFF;
    std::fs::write(&disk_path, &mutated).unwrap();

    assert!(installation.cat(&alice, "notes.txt").is_err());

    // The session keeps working: new files can still be written and read.
    installation.mkfile(&alice, "other.txt", "still alive").unwrap();
    assert_eq!(installation.cat(&alice, "other.txt").unwrap(), "still alive");
}
