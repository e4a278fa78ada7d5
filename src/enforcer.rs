//! # Enforcer Module
//!
//! This module contains the core functionality for checking and rewriting
//! files: the containment checks for the license and modelines texts, the
//! prepend/append mutations, and the rewrite through a sibling `.new` file
//! consumed by an overwriting rename.
//!
//! The [`Enforcer`] struct is the entry point; [`Enforcer::run`] drives a
//! whole tree and prints one status line per visited file.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::output;
use crate::templates::{ExtensionTable, HeaderSet};
use crate::walker;

/// Outcome of enforcing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
  /// One or both texts were missing; the file was rewritten
  Updated,
  /// Both texts were already present; the file's bytes are unchanged
  Ok,
}

/// Error produced when the final rename of the `.new` file fails.
///
/// This is the only recovered failure in a run: it is reported on standard
/// output and the traversal continues with the next file. The `.new` file is
/// left behind for inspection.
#[derive(Debug, thiserror::Error)]
#[error("Couldn't rename file {} to {}: {source}", from.display(), to.display())]
pub struct RenameError {
  /// The temporary `.new` path that could not be renamed
  pub from: PathBuf,

  /// The destination path
  pub to: PathBuf,

  /// The underlying system error
  #[source]
  pub source: io::Error,
}

/// Result of one visited file.
#[derive(Debug)]
pub struct FileReport {
  /// Path of the visited file
  pub path: PathBuf,

  /// Whether the file was rewritten
  pub status: FileStatus,

  /// Set when the file was rewritten but the rename failed
  pub rename_error: Option<RenameError>,
}

/// Counts for a whole run.
///
/// Returned by [`Enforcer::run`] for library consumers and tests; nothing in
/// the summary is printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
  /// Recognized regular files visited
  pub files_visited: usize,

  /// Files rewritten (including those whose rename then failed)
  pub files_updated: usize,

  /// Files left untouched
  pub files_ok: usize,

  /// Rewrites whose final rename failed
  pub rename_failures: usize,
}

/// Enforcer for license headers and modelines over a directory tree.
///
/// Holds the immutable [`ExtensionTable`] built at startup; each file's
/// read-modify-rename sequence is self-contained.
pub struct Enforcer {
  table: ExtensionTable,
}

impl Enforcer {
  /// Creates an enforcer over the given extension table.
  pub const fn new(table: ExtensionTable) -> Self {
    Self { table }
  }

  /// Walks `root` and enforces every recognized regular file underneath it.
  ///
  /// Prints one status line per visited file (`"<path> updated"` or
  /// `"<path> is ok"`); files with unrecognized extensions produce no
  /// output. A failed rename is reported and does not abort the run.
  ///
  /// # Errors
  ///
  /// Returns an error if the traversal fails or if reading a file or
  /// writing a `.new` file fails. These terminate the run.
  pub fn run(&self, root: &Path) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for path in walker::collect_files(root)? {
      let Some(headers) = self.table.lookup(&path) else {
        trace!("Skipping: {} (unrecognized extension)", path.display());
        continue;
      };

      let report = self.enforce_file(&path, headers)?;

      if let Some(rename_error) = &report.rename_error {
        output::print_rename_failure(rename_error);
        summary.rename_failures += 1;
      }
      output::print_status(&report.path, report.status);

      summary.files_visited += 1;
      match report.status {
        FileStatus::Updated => summary.files_updated += 1,
        FileStatus::Ok => summary.files_ok += 1,
      }
    }

    debug!(
      "Run complete: {} visited, {} updated, {} ok, {} rename failures",
      summary.files_visited, summary.files_updated, summary.files_ok, summary.rename_failures
    );

    Ok(summary)
  }

  /// Enforces a single file against the given header variants.
  ///
  /// Reads the full content, prepends the license text if absent, appends
  /// the modelines text if absent, and rewrites the file through
  /// `<path>.new` when either was missing. The two checks are independent
  /// and share a single combined rewrite.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read as text or the `.new`
  /// file cannot be written. A failed rename is not an error here; it is
  /// carried in the report.
  pub fn enforce_file(&self, path: &Path, headers: &HeaderSet) -> Result<FileReport> {
    let mut content = fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let mut modified = false;

    // Containment, not an anchored check: a text already present anywhere
    // in the file must not be inserted again.
    if !content.contains(&headers.license) {
      content = format!("{}{}", headers.license, content);
      modified = true;
    }

    if !content.contains(&headers.modelines) {
      content.push_str(&headers.modelines);
      modified = true;
    }

    if !modified {
      return Ok(FileReport {
        path: path.to_path_buf(),
        status: FileStatus::Ok,
        rename_error: None,
      });
    }

    let temp_path = sibling_new_path(path);
    fs::write(&temp_path, &content).with_context(|| format!("Failed to write file: {}", temp_path.display()))?;

    // Overwriting rename. On failure the .new file is left behind.
    let rename_error = fs::rename(&temp_path, path).err().map(|source| RenameError {
      from: temp_path,
      to: path.to_path_buf(),
      source,
    });

    Ok(FileReport {
      path: path.to_path_buf(),
      status: FileStatus::Updated,
      rename_error,
    })
  }
}

/// The sibling temporary path `<path>.new`.
fn sibling_new_path(path: &Path) -> PathBuf {
  let mut os: OsString = path.as_os_str().to_os_string();
  os.push(".new");
  PathBuf::from(os)
}
