// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Sharing Scenarios
//!
//! Share fan-out: the recipient's mirror copy, propagation on rewrite,
//! duplicate-share refusal, and the failure modes around missing users
//! and sources.

use crate::common::TestInstallation;

/// alice with `memo` = `v1` in `personal/`, bob provisioned.
fn alice_and_bob(installation: &TestInstallation) -> efs_domain::Session {
    installation.add_user("alice");
    installation.add_user("bob");

    let mut alice = installation.login("alice");
    installation.cd(&mut alice, "personal").unwrap();
    installation.mkfile(&alice, "memo", "v1").unwrap();
    alice
}

#[test]
fn test_share_places_mirror_in_recipient_shared() {
    let installation = TestInstallation::bootstrap();
    let alice = alice_and_bob(&installation);

    installation.share(&alice, "memo", "bob").unwrap();

    let mut bob = installation.login("bob");
    installation.cd(&mut bob, "shared").unwrap();
    assert_eq!(installation.ls(&bob).unwrap(), vec!["d -> .", "d -> ..", "f -> alice-memo"]);
    assert_eq!(installation.cat(&bob, "alice-memo").unwrap(), "v1");
}

#[test]
fn test_rewrite_propagates_to_mirror() {
    let installation = TestInstallation::bootstrap();
    let alice = alice_and_bob(&installation);
    installation.share(&alice, "memo", "bob").unwrap();

    installation.mkfile(&alice, "memo", "v2").unwrap();

    let mut bob = installation.login("bob");
    installation.cd(&mut bob, "shared").unwrap();
    assert_eq!(installation.cat(&bob, "alice-memo").unwrap(), "v2");
}

#[test]
fn test_every_rewrite_reaches_every_recipient() {
    let installation = TestInstallation::bootstrap();
    let alice = alice_and_bob(&installation);
    installation.add_user("carol");

    installation.share(&alice, "memo", "bob").unwrap();
    installation.share(&alice, "memo", "carol").unwrap();
    installation.mkfile(&alice, "memo", "v3").unwrap();

    for reader in ["bob", "carol"] {
        let mut session = installation.login(reader);
        installation.cd(&mut session, "shared").unwrap();
        assert_eq!(installation.cat(&session, "alice-memo").unwrap(), "v3", "reader {reader}");
    }
}

#[test]
fn test_double_share_is_refused_with_diagnostic() {
    let installation = TestInstallation::bootstrap();
    let alice = alice_and_bob(&installation);

    installation.share(&alice, "memo", "bob").unwrap();
    let err = installation.share(&alice, "memo", "bob").unwrap_err();
    assert_eq!(
        err.to_string(),
        "A file with name memo has already been shared with bob"
    );
}

#[test]
fn test_same_file_can_go_to_different_recipients() {
    let installation = TestInstallation::bootstrap();
    let alice = alice_and_bob(&installation);
    installation.add_user("carol");

    installation.share(&alice, "memo", "bob").unwrap();
    installation.share(&alice, "memo", "carol").unwrap();
}

#[test]
fn test_share_with_unknown_user_is_refused() {
    let installation = TestInstallation::bootstrap();
    let alice = alice_and_bob(&installation);

    let err = installation.share(&alice, "memo", "dave").unwrap_err();
    assert_eq!(err.to_string(), "User dave does not exist!");
}

#[test]
fn test_share_of_missing_source_is_refused() {
    let installation = TestInstallation::bootstrap();
    let alice = alice_and_bob(&installation);

    let err = installation.share(&alice, "ghost", "bob").unwrap_err();
    assert_eq!(err.to_string(), "File does not exist");
}

#[test]
fn test_share_of_directory_is_refused() {
    let installation = TestInstallation::bootstrap();
    let alice = alice_and_bob(&installation);
    installation.mkdir(&alice, "docs").unwrap();

    let err = installation.share(&alice, "docs", "bob").unwrap_err();
    assert_eq!(err.to_string(), "File does not exist");
}

#[test]
fn test_share_outside_personal_is_forbidden() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");
    installation.add_user("bob");

    let alice = installation.login("alice");
    let err = installation.share(&alice, "memo", "bob").unwrap_err();
    assert_eq!(err.to_string(), "Forbidden");
}

#[test]
fn test_mirror_is_encrypted_under_recipient_key() {
    let installation = TestInstallation::bootstrap();
    let alice = alice_and_bob(&installation);
    installation.share(&alice, "memo", "bob").unwrap();

    let mut bob = installation.login("bob");
    installation.cd(&mut bob, "shared").unwrap();

    // The mirror decrypts for bob with his own session key; the blob on
    // disk differs from alice's source blob.
    let source_entries = installation.store.entries(alice.cwd()).unwrap();
    let mirror_entries = installation.store.entries(bob.cwd()).unwrap();
    let source_blob = installation
        .store
        .read_blob(&alice.cwd().join(&source_entries[0].token))
        .unwrap();
    let mirror_blob = installation
        .store
        .read_blob(&bob.cwd().join(&mirror_entries[0].token))
        .unwrap();
    assert_ne!(source_blob, mirror_blob);
    assert_eq!(installation.cat(&bob, "alice-memo").unwrap(), "v1");
}
