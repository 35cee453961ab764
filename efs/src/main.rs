// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Encrypted File Server CLI
//!
//! Entry point and composition root. On first run in a directory with no
//! `filesystem/`, the installation is bootstrapped (directory skeleton,
//! seeded name map, `admin` account) and the shell opens as admin.
//! Afterwards a keyfile argument is required; its stem names the account
//! and `admin` grants administrator rights.
//!
//! Startup failures exit with status 1; a clean `exit` or end of input
//! exits with 0.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{debug, error, info};

use efs_bootstrap::{parse_keyfile_arg, ExitCode, KeyfileArgError, LoginRequest};
use efs_domain::{
    FileCipherService, NameMapRepository, Session, UserRole, Username, VirtualPath, ADMIN_USERNAME,
};

use efs::application::services::UserProvisioning;
use efs::infrastructure::adapters::AesGcmFileCipher;
use efs::infrastructure::config::InstallLayout;
use efs::infrastructure::repositories::{JsonNameMap, ShareRegistry, UserAccounts};
use efs::infrastructure::services::FileStore;
use efs::presentation::Shell;

#[derive(Parser)]
#[command(name = "efs")]
#[command(about = "Encrypted File Server - authenticated shell over an encrypted filesystem")]
#[command(version = "1.0.0")]
struct Cli {
    /// Keyfile identifying the account to log in as (required once the
    /// installation exists)
    keyfile: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Wired infrastructure for one installation.
struct Services {
    name_map: Arc<dyn NameMapRepository>,
    store: Arc<FileStore>,
    cipher: Arc<dyn FileCipherService>,
    accounts: Arc<UserAccounts>,
    shares: Arc<ShareRegistry>,
    provisioning: Arc<UserProvisioning>,
}

fn wire(layout: &InstallLayout) -> Result<Services> {
    let name_map: Arc<dyn NameMapRepository> = Arc::new(JsonNameMap::open(layout.structure_json())?);
    let store = Arc::new(FileStore::new(layout.clone()));
    let cipher: Arc<dyn FileCipherService> = Arc::new(AesGcmFileCipher::new());
    let accounts = Arc::new(UserAccounts::new(layout.clone()));
    let shares = Arc::new(ShareRegistry::new(layout.shared_dir()));
    let provisioning = Arc::new(UserProvisioning::new(
        accounts.clone(),
        name_map.clone(),
        store.clone(),
    ));

    Ok(Services {
        name_map,
        store,
        cipher,
        accounts,
        shares,
        provisioning,
    })
}

/// Builds the authenticated session for a validated login.
fn open_session(services: &Services, login: &LoginRequest) -> Result<Session> {
    let username = Username::parse(&login.username)?;
    let key = services.accounts.load_key(&username)?;

    let (role, root) = if login.is_admin() {
        (UserRole::Admin, VirtualPath::filesystem_root())
    } else {
        let home_token = services
            .name_map
            .token_for(&VirtualPath::filesystem_root().join(username.as_str()))?
            .ok_or_else(|| anyhow!("user {username} has no home directory"))?;
        (
            UserRole::Standard,
            VirtualPath::filesystem_root().join(home_token.as_str()),
        )
    };

    Ok(Session::new(username, role, key, root))
}

fn run(cli: Cli) -> Result<ExitCode> {
    let root = std::env::current_dir().context("cannot determine working directory")?;
    let layout = InstallLayout::new(&root);

    let (services, session) = if InstallLayout::is_installed(&root) {
        let keyfile = cli.keyfile.ok_or(KeyfileArgError::Missing)?;
        let login = parse_keyfile_arg(&keyfile)?;
        debug!(user = %login.username, "logging in");

        let services = wire(&layout)?;
        let session = open_session(&services, &login)?;
        (services, session)
    } else {
        info!(root = %root.display(), "no installation found, bootstrapping");
        layout.bootstrap_skeleton()?;

        let services = wire(&layout)?;
        services
            .provisioning
            .provision(&Username::parse(ADMIN_USERNAME)?)?;

        let login = LoginRequest {
            username: ADMIN_USERNAME.to_string(),
            keyfile: layout.private_key_file(ADMIN_USERNAME),
        };
        let session = open_session(&services, &login)?;
        (services, session)
    };

    Shell::new(
        session,
        services.name_map,
        services.store,
        services.cipher,
        services.accounts,
        services.shares,
        services.provisioning,
    )
    .run()
    .context("shell terminated abnormally")?;

    Ok(ExitCode::Success)
}

fn main() {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("no other subscriber is installed at startup");

    match run(cli) {
        Ok(code) => process::exit(code.as_i32()),
        Err(err) => {
            error!("{err}");
            eprintln!("{err}");
            process::exit(ExitCode::StartupFailure.as_i32());
        }
    }
}
