// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Interactive Shell
//!
//! The REPL. Reads one line per turn, tokenizes it, dispatches to the
//! matching use case, and prints the result or the diagnostic. All
//! validation and authorization live in the use cases; this layer only
//! splits words and formats output.
//!
//! `mkfile` is the one command whose operand is not a single word: the
//! contents are everything after the filename with the separating
//! whitespace stripped, so what gets encrypted is exactly what the user
//! typed and decryption returns it byte for byte.
//!
//! `adduser` is dispatched only for the administrator; for everyone else
//! it is an unknown command.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::debug;

use efs_domain::{EfsError, FileCipherService, NameMapRepository, Session};

use crate::application::services::UserProvisioning;
use crate::application::use_cases::{
    AddUser, ChangeDirectory, ListDirectory, MakeDirectory, MakeFile, PrintWorkingDirectory, ReadFile, ShareFile,
};
use crate::infrastructure::repositories::{ShareRegistry, UserAccounts};
use crate::infrastructure::services::FileStore;

/// Interactive command loop bound to one authenticated session.
pub struct Shell {
    session: Session,
    pwd: PrintWorkingDirectory,
    cd: ChangeDirectory,
    ls: ListDirectory,
    cat: ReadFile,
    mkdir: MakeDirectory,
    mkfile: MakeFile,
    share: ShareFile,
    adduser: AddUser,
}

impl Shell {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        session: Session,
        name_map: Arc<dyn NameMapRepository>,
        store: Arc<FileStore>,
        cipher: Arc<dyn FileCipherService>,
        accounts: Arc<UserAccounts>,
        shares: Arc<ShareRegistry>,
        provisioning: Arc<UserProvisioning>,
    ) -> Self {
        Self {
            session,
            pwd: PrintWorkingDirectory::new(name_map.clone()),
            cd: ChangeDirectory::new(name_map.clone(), store.clone()),
            ls: ListDirectory::new(name_map.clone(), store.clone()),
            cat: ReadFile::new(name_map.clone(), store.clone(), cipher.clone(), accounts.clone()),
            mkdir: MakeDirectory::new(name_map.clone(), store.clone()),
            mkfile: MakeFile::new(
                name_map.clone(),
                store.clone(),
                cipher.clone(),
                accounts.clone(),
                shares.clone(),
            ),
            share: ShareFile::new(name_map, store, cipher, accounts, shares),
            adduser: AddUser::new(provisioning),
        }
    }

    /// Runs the loop until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_banner();

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut line = String::new();

        loop {
            self.print_prompt()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                println!("Ctrl+D detected.");
                return Ok(());
            }

            if !self.dispatch(line.trim_end_matches(['\n', '\r'])) {
                return Ok(());
            }
        }
    }

    fn print_banner(&self) {
        println!("++++++++++++++++++++++++");
        println!("++| WELCOME TO EFS! |++");
        println!("++++++++++++++++++++++++");
        println!("\nEFS Commands Available: \n");
        println!(
            "cd <directory> \npwd \nls  \ncat <filename> \nshare <filename> <username> \nmkdir <directory_name> \
             \nmkfile <filename> <contents...> \nexit "
        );
        if self.session.is_admin() {
            println!("adduser <username>");
        }
        println!("++++++++++++++++++++++++");
    }

    fn print_prompt(&self) -> io::Result<()> {
        let location = self
            .pwd
            .execute(&self.session)
            .unwrap_or_else(|_| self.session.cwd().as_str().to_string());
        print!("{} {}> ", self.session.username(), location);
        io::stdout().flush()
    }

    /// Handles one input line. Returns `false` when the shell should
    /// terminate.
    fn dispatch(&mut self, line: &str) -> bool {
        let (command, rest) = split_first_word(line);

        let outcome = match command {
            "" => Ok(()),
            "cd" => {
                let (target, _) = split_first_word(rest);
                match self.cd.execute(&mut self.session, target) {
                    Err(error @ (EfsError::Forbidden(_) | EfsError::BadInput(_))) => {
                        println!("{error}");
                        println!("Staying in current directory.");
                        Ok(())
                    }
                    other => other,
                }
            }
            "pwd" => self.pwd.execute(&self.session).map(|path| println!("{path}")),
            "ls" => self.ls.execute(&self.session).map(|lines| {
                for line in lines {
                    println!("{line}");
                }
            }),
            "cat" => {
                let (name, _) = split_first_word(rest);
                self.cat
                    .execute(&self.session, name)
                    .map(|contents| println!("{contents}"))
            }
            "share" => {
                let (name, rest) = split_first_word(rest);
                let (recipient, _) = split_first_word(rest);
                self.share
                    .execute(&self.session, name, recipient)
                    .map(|()| println!("File shared successfully!"))
            }
            "mkdir" => {
                let (name, _) = split_first_word(rest);
                self.mkdir
                    .execute(&self.session, name)
                    .map(|()| println!("Directory created successfully."))
            }
            "mkfile" => {
                let (name, contents) = split_first_word(rest);
                self.mkfile
                    .execute(&self.session, name, contents)
                    .map(|()| println!("File created and encrypted successfully!"))
            }
            "adduser" if self.session.is_admin() => {
                let (name, _) = split_first_word(rest);
                self.adduser
                    .execute(&self.session, name)
                    .map(|username| println!("User {username} added successfully!"))
            }
            "exit" => return false,
            _ => {
                println!("Invalid Command");
                Ok(())
            }
        };

        if let Err(error) = outcome {
            debug!(category = error.category(), "command failed");
            println!("{error}");
        }
        true
    }
}

/// Splits off the first whitespace-delimited word; the remainder keeps
/// its interior spacing but loses the separator.
fn split_first_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(cut) => (&input[..cut], input[cut..].trim_start()),
        None => (input, ""),
    }
}
