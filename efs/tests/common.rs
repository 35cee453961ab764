// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Common Test Helpers
//!
//! Shared scaffolding for the integration tests: a scratch installation
//! in a temporary directory, wired exactly like the binary's composition
//! root, plus session and use-case helpers so scenarios read like shell
//! transcripts.

use std::sync::Arc;

use efs::application::services::UserProvisioning;
use efs::application::use_cases::{
    AddUser, ChangeDirectory, ListDirectory, MakeDirectory, MakeFile, PrintWorkingDirectory, ReadFile, ShareFile,
};
use efs::infrastructure::adapters::AesGcmFileCipher;
use efs::infrastructure::config::InstallLayout;
use efs::infrastructure::repositories::{JsonNameMap, ShareRegistry, UserAccounts};
use efs::infrastructure::services::FileStore;
use efs_domain::{
    EfsError, FileCipherService, NameMapRepository, Session, UserRole, Username, VirtualPath, ADMIN_USERNAME,
};

/// A bootstrapped installation in a temp directory, with the same wiring
/// the binary uses.
pub struct TestInstallation {
    // Held for its Drop; removes the whole installation afterwards.
    _dir: tempfile::TempDir,
    pub layout: InstallLayout,
    pub name_map: Arc<dyn NameMapRepository>,
    pub store: Arc<FileStore>,
    pub cipher: Arc<dyn FileCipherService>,
    pub accounts: Arc<UserAccounts>,
    pub shares: Arc<ShareRegistry>,
    pub provisioning: Arc<UserProvisioning>,
}

impl TestInstallation {
    /// First-run bootstrap: skeleton, seeded name map, admin account.
    pub fn bootstrap() -> Self {
        let dir = tempfile::tempdir().expect("cannot create temp dir");
        let layout = InstallLayout::new(dir.path());
        layout.bootstrap_skeleton().expect("bootstrap failed");

        let name_map: Arc<dyn NameMapRepository> =
            Arc::new(JsonNameMap::open(layout.structure_json()).expect("name map"));
        let store = Arc::new(FileStore::new(layout.clone()));
        let cipher: Arc<dyn FileCipherService> = Arc::new(AesGcmFileCipher::new());
        let accounts = Arc::new(UserAccounts::new(layout.clone()));
        let shares = Arc::new(ShareRegistry::new(layout.shared_dir()));
        let provisioning = Arc::new(UserProvisioning::new(
            accounts.clone(),
            name_map.clone(),
            store.clone(),
        ));

        provisioning
            .provision(&Username::parse(ADMIN_USERNAME).unwrap())
            .expect("admin provisioning failed");

        Self {
            _dir: dir,
            layout,
            name_map,
            store,
            cipher,
            accounts,
            shares,
            provisioning,
        }
    }

    /// Provisions an account the way `adduser` does.
    pub fn add_user(&self, username: &str) {
        self.provisioning
            .provision(&Username::parse(username).unwrap())
            .expect("user provisioning failed");
    }

    /// Opens a session the way the binary's login path does.
    pub fn login(&self, username: &str) -> Session {
        let username = Username::parse(username).unwrap();
        let key = self.accounts.load_key(&username).expect("user key");

        let (role, root) = if username.is_admin() {
            (UserRole::Admin, VirtualPath::filesystem_root())
        } else {
            let home_token = self
                .name_map
                .token_for(&VirtualPath::filesystem_root().join(username.as_str()))
                .unwrap()
                .expect("user home token");
            (
                UserRole::Standard,
                VirtualPath::filesystem_root().join(home_token.as_str()),
            )
        };
        Session::new(username, role, key, root)
    }

    pub fn cd(&self, session: &mut Session, target: &str) -> Result<(), EfsError> {
        ChangeDirectory::new(self.name_map.clone(), self.store.clone()).execute(session, target)
    }

    pub fn pwd(&self, session: &Session) -> Result<String, EfsError> {
        PrintWorkingDirectory::new(self.name_map.clone()).execute(session)
    }

    pub fn ls(&self, session: &Session) -> Result<Vec<String>, EfsError> {
        ListDirectory::new(self.name_map.clone(), self.store.clone()).execute(session)
    }

    pub fn cat(&self, session: &Session, name: &str) -> Result<String, EfsError> {
        ReadFile::new(
            self.name_map.clone(),
            self.store.clone(),
            self.cipher.clone(),
            self.accounts.clone(),
        )
        .execute(session, name)
    }

    pub fn mkdir(&self, session: &Session, name: &str) -> Result<(), EfsError> {
        MakeDirectory::new(self.name_map.clone(), self.store.clone()).execute(session, name)
    }

    pub fn mkfile(&self, session: &Session, name: &str, contents: &str) -> Result<(), EfsError> {
        MakeFile::new(
            self.name_map.clone(),
            self.store.clone(),
            self.cipher.clone(),
            self.accounts.clone(),
            self.shares.clone(),
        )
        .execute(session, name, contents)
    }

    pub fn share(&self, session: &Session, name: &str, recipient: &str) -> Result<(), EfsError> {
        ShareFile::new(
            self.name_map.clone(),
            self.store.clone(),
            self.cipher.clone(),
            self.accounts.clone(),
            self.shares.clone(),
        )
        .execute(session, name, recipient)
    }

    pub fn adduser(&self, session: &Session, username: &str) -> Result<Username, EfsError> {
        AddUser::new(self.provisioning.clone()).execute(session, username)
    }
}

/// Every on-disk name below `filesystem/`, relative leaf names only.
pub fn on_disk_names(installation: &TestInstallation) -> Vec<String> {
    fn walk(dir: &std::path::Path, out: &mut Vec<String>) {
        for entry in std::fs::read_dir(dir).expect("read_dir") {
            let entry = entry.expect("dir entry");
            out.push(entry.file_name().to_string_lossy().into_owned());
            if entry.path().is_dir() {
                walk(&entry.path(), out);
            }
        }
    }

    let mut names = Vec::new();
    walk(&installation.layout.filesystem_dir(), &mut names);
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_provisions_admin() {
        let installation = TestInstallation::bootstrap();
        assert!(installation
            .accounts
            .exists(&Username::parse(ADMIN_USERNAME).unwrap()));
    }

    #[test]
    fn test_login_opens_jailed_session() {
        let installation = TestInstallation::bootstrap();
        installation.add_user("alice");

        let session = installation.login("alice");
        assert!(!session.is_admin());
        assert!(session.at_root());
        assert_ne!(session.root(), &VirtualPath::filesystem_root());
    }
}
