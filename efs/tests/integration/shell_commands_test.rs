// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Navigation and File Scenarios
//!
//! `cd`, `pwd`, `ls`, `mkdir`, `mkfile`, `cat`: create-and-read round
//! trips, duplicate handling, jail enforcement, and the admin read path.

use crate::common::TestInstallation;
use efs_domain::EfsError;

#[test]
fn test_create_and_read_back() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    installation.cd(&mut alice, "personal").unwrap();
    installation.mkfile(&alice, "notes.txt", "hello").unwrap();

    assert_eq!(installation.cat(&alice, "notes.txt").unwrap(), "hello");
}

#[test]
fn test_contents_keep_interior_spacing_exactly() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    installation.cd(&mut alice, "personal").unwrap();
    installation
        .mkfile(&alice, "notes.txt", "spaced   out contents")
        .unwrap();

    assert_eq!(installation.cat(&alice, "notes.txt").unwrap(), "spaced   out contents");
}

#[test]
fn test_pwd_renders_plaintext_path() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    assert_eq!(installation.pwd(&alice).unwrap(), "/filesystem/alice");

    installation.cd(&mut alice, "personal").unwrap();
    assert_eq!(installation.pwd(&alice).unwrap(), "/filesystem/alice/personal");
}

#[test]
fn test_ls_lists_plaintext_names_sorted() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    installation.cd(&mut alice, "personal").unwrap();
    installation.mkfile(&alice, "zebra.txt", "z").unwrap();
    installation.mkdir(&alice, "docs").unwrap();
    installation.mkfile(&alice, "apple.txt", "a").unwrap();

    let lines = installation.ls(&alice).unwrap();
    assert_eq!(
        lines,
        vec!["d -> .", "d -> ..", "f -> apple.txt", "d -> docs", "f -> zebra.txt"]
    );
}

#[test]
fn test_ls_at_session_root_has_no_parent_line() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let alice = installation.login("alice");
    let lines = installation.ls(&alice).unwrap();
    assert_eq!(lines[0], "d -> .");
    assert!(!lines.contains(&"d -> ..".to_string()));
}

#[test]
fn test_overwrite_reuses_token_and_replaces_contents() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    installation.cd(&mut alice, "personal").unwrap();
    installation.mkfile(&alice, "memo", "v1").unwrap();
    installation.mkfile(&alice, "memo", "v2").unwrap();

    assert_eq!(installation.cat(&alice, "memo").unwrap(), "v2");
    assert_eq!(installation.store.entries(alice.cwd()).unwrap().len(), 1);
}

#[test]
fn test_mkfile_over_directory_is_duplicate() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    installation.cd(&mut alice, "personal").unwrap();
    installation.mkdir(&alice, "docs").unwrap();

    let err = installation.mkfile(&alice, "docs", "contents").unwrap_err();
    assert!(matches!(err, EfsError::Duplicate(_)));
}

#[test]
fn test_mkdir_over_file_or_directory_is_duplicate() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    installation.cd(&mut alice, "personal").unwrap();
    installation.mkfile(&alice, "memo", "v1").unwrap();
    installation.mkdir(&alice, "docs").unwrap();

    assert!(matches!(
        installation.mkdir(&alice, "memo").unwrap_err(),
        EfsError::Duplicate(_)
    ));
    assert!(matches!(
        installation.mkdir(&alice, "docs").unwrap_err(),
        EfsError::Duplicate(_)
    ));
}

#[test]
fn test_writes_refused_outside_personal() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let alice = installation.login("alice");
    let err = installation.mkdir(&alice, "foo").unwrap_err();
    assert_eq!(err.to_string(), "Forbidden");

    let err = installation.mkfile(&alice, "foo.txt", "contents").unwrap_err();
    assert_eq!(err.to_string(), "Forbidden");
}

#[test]
fn test_cd_above_home_is_refused() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    let err = installation.cd(&mut alice, "..").unwrap_err();
    assert_eq!(err.to_string(), "Directory is outside of the root directory.");
    assert!(alice.at_root());
}

#[test]
fn test_cd_root_and_tilde_stay_in_jail() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    installation.cd(&mut alice, "personal").unwrap();

    installation.cd(&mut alice, "/").unwrap();
    assert!(alice.at_root());

    installation.cd(&mut alice, "personal").unwrap();
    installation.cd(&mut alice, "~").unwrap();
    assert!(alice.at_root());
}

#[test]
fn test_cd_dotdot_returns_to_parent_inside_jail() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    installation.cd(&mut alice, "personal").unwrap();
    installation.mkdir(&alice, "docs").unwrap();
    installation.cd(&mut alice, "docs").unwrap();
    assert_eq!(installation.pwd(&alice).unwrap(), "/filesystem/alice/personal/docs");

    installation.cd(&mut alice, "..").unwrap();
    assert_eq!(installation.pwd(&alice).unwrap(), "/filesystem/alice/personal");
}

#[test]
fn test_cd_to_missing_or_file_target_is_refused() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    assert!(matches!(
        installation.cd(&mut alice, "nowhere").unwrap_err(),
        EfsError::NotFound(_)
    ));

    installation.cd(&mut alice, "personal").unwrap();
    installation.mkfile(&alice, "memo", "v1").unwrap();
    assert!(matches!(
        installation.cd(&mut alice, "memo").unwrap_err(),
        EfsError::NotFound(_)
    ));
}

#[test]
fn test_cd_absolute_paths_are_refused() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    let err = installation.cd(&mut alice, "/filesystem/alice").unwrap_err();
    assert_eq!(err.to_string(), "Give a relative path.");
}

#[test]
fn test_users_cannot_reach_each_other() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");
    installation.add_user("bob");

    let mut alice = installation.login("alice");
    // bob's home is not mapped below alice's position, so the name cannot
    // even be translated.
    assert!(installation.cd(&mut alice, "bob").is_err());
    assert!(installation.cd(&mut alice, "../bob").is_err());
}

#[test]
fn test_admin_navigates_any_tree_and_reads_with_owner_key() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    installation.cd(&mut alice, "personal").unwrap();
    installation.mkfile(&alice, "notes.txt", "hello").unwrap();

    let mut admin = installation.login("admin");
    installation.cd(&mut admin, "alice/personal").unwrap();
    assert_eq!(installation.cat(&admin, "notes.txt").unwrap(), "hello");
}

#[test]
fn test_invalid_filenames_are_refused() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    installation.cd(&mut alice, "personal").unwrap();

    for name in [".hidden", "bad.", "-dash"] {
        let err = installation.mkfile(&alice, name, "contents").unwrap_err();
        assert_eq!(err.to_string(), "Not a valid filename, try again.", "name: {name}");
    }

    let err = installation.mkfile(&alice, "a/b", "contents").unwrap_err();
    assert_eq!(err.to_string(), "File name cannot contain '/'");
}

#[test]
fn test_reserved_directory_names_are_refused() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let mut alice = installation.login("alice");
    installation.cd(&mut alice, "personal").unwrap();

    for name in ["filesystem", ".", ".."] {
        let err = installation.mkdir(&alice, name).unwrap_err();
        assert_eq!(err.to_string(), "Invalid directory name provided.", "name: {name}");
    }
}
