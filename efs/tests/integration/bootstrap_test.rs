// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Bootstrap Scenarios
//!
//! First-run behavior: the installation skeleton, the seeded name map,
//! the admin account, and the opacity of every on-disk name.

use crate::common::{on_disk_names, TestInstallation};
use efs_domain::{RandomizedName, Username};

#[test]
fn test_bootstrap_creates_installation_skeleton() {
    let installation = TestInstallation::bootstrap();

    assert!(installation.layout.filesystem_dir().is_dir());
    assert!(installation.layout.public_keys_dir().is_dir());
    assert!(installation.layout.private_keys_dir().is_dir());
    assert!(installation.layout.common_dir().is_dir());
    assert!(installation.layout.shared_dir().is_dir());

    let document = std::fs::read_to_string(installation.layout.structure_json()).unwrap();
    assert!(document.contains("\"test\""));
}

#[test]
fn test_admin_session_opens_at_filesystem_root() {
    let installation = TestInstallation::bootstrap();
    let session = installation.login("admin");

    assert!(session.is_admin());
    assert_eq!(installation.pwd(&session).unwrap(), "/filesystem");
}

#[test]
fn test_admin_owns_a_home_tree() {
    let installation = TestInstallation::bootstrap();
    let admin = installation.login("admin");

    let lines = installation.ls(&admin).unwrap();
    assert!(lines.contains(&"d -> admin".to_string()), "got {lines:?}");
}

#[test]
fn test_admin_key_material_exists() {
    let installation = TestInstallation::bootstrap();
    let admin = Username::parse("admin").unwrap();

    assert!(installation.accounts.exists(&admin));
    assert!(installation.layout.private_key_file("admin").is_file());
    assert!(installation.layout.user_key_file("admin").is_file());
    assert_eq!(
        std::fs::read(installation.layout.user_key_file("admin")).unwrap().len(),
        32
    );
}

#[test]
fn test_every_on_disk_name_is_a_token() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let alice = installation.login("alice");
    let mut session = alice;
    installation.cd(&mut session, "personal").unwrap();
    installation.mkfile(&session, "notes.txt", "hello").unwrap();
    installation.mkdir(&session, "docs").unwrap();

    for name in on_disk_names(&installation) {
        assert!(
            RandomizedName::is_token(&name),
            "on-disk name leaks plaintext: {name}"
        );
    }
}

#[test]
fn test_duplicate_provisioning_is_refused() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let admin = installation.login("admin");
    let err = installation.adduser(&admin, "alice").unwrap_err();
    assert_eq!(err.to_string(), "User alice already exists");
}

#[test]
fn test_standard_user_cannot_add_users() {
    let installation = TestInstallation::bootstrap();
    installation.add_user("alice");

    let alice = installation.login("alice");
    let err = installation.adduser(&alice, "mallory").unwrap_err();
    assert!(matches!(err, efs_domain::EfsError::Forbidden(_)));
}
