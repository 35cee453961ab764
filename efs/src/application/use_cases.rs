// /////////////////////////////////////////////////////////////////////////////
// Encrypted File Server
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Shell Command Use Cases

pub mod add_user;
pub mod change_directory;
pub mod list_directory;
pub mod make_directory;
pub mod make_file;
pub mod print_working_directory;
pub mod read_file;
pub mod share_file;

pub use add_user::AddUser;
pub use change_directory::ChangeDirectory;
pub use list_directory::ListDirectory;
pub use make_directory::MakeDirectory;
pub use make_file::MakeFile;
pub use print_working_directory::PrintWorkingDirectory;
pub use read_file::ReadFile;
pub use share_file::ShareFile;
