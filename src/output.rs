//! # Output Module
//!
//! This module centralizes the user-facing standard-output lines: the
//! per-file status line and the rename-failure diagnostic. Status words are
//! colored only when stdout supports color, so redirected output stays
//! byte-exact plain text.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::enforcer::{FileStatus, RenameError};

/// Print the per-file status line: `"<path> updated"` or `"<path> is ok"`.
pub fn print_status(path: &Path, status: FileStatus) {
  match status {
    FileStatus::Updated => println!(
      "{} {}",
      path.display(),
      "updated".if_supports_color(Stream::Stdout, |s| s.green())
    ),
    FileStatus::Ok => println!(
      "{} {}",
      path.display(),
      "is ok".if_supports_color(Stream::Stdout, |s| s.cyan())
    ),
  }
}

/// Report a failed rename, naming the temp path, the destination path, and
/// the underlying system error. Goes to standard output; the run continues
/// after this.
pub fn print_rename_failure(error: &RenameError) {
  println!("{}", error.if_supports_color(Stream::Stdout, |e| e.red()));
}
