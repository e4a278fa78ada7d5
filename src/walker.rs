//! # Walker Module
//!
//! Deterministic recursive traversal of the tree being enforced. Siblings
//! are visited in file-name order so two runs over the same tree produce
//! output in the same order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Collects every regular file under `root`, depth-first with siblings
/// sorted by file name.
///
/// Hidden entries are included. Symlinks are resolved: a link to a regular
/// file is collected, links to anything else (or to nothing) are skipped,
/// and symlinked directories are not descended into.
///
/// # Errors
///
/// Returns an error if listing any directory fails.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
  let mut files = Vec::new();

  debug!("Scanning directory: {}", root.display());
  let start_time = std::time::Instant::now();

  for entry in WalkDir::new(root).sort_by_file_name() {
    let entry = entry.with_context(|| format!("Failed to traverse directory tree at {}", root.display()))?;
    let path = entry.path();

    if entry.file_type().is_dir() {
      continue;
    }

    // fs::metadata follows symlinks, so a link to a regular file counts as
    // one while dangling links drop out here.
    let metadata = match fs::metadata(path) {
      Ok(metadata) => metadata,
      Err(e) if entry.file_type().is_symlink() => {
        trace!("Skipping: {} (unresolvable symlink: {})", path.display(), e);
        continue;
      }
      Err(e) => {
        return Err(e).with_context(|| format!("Failed to stat file: {}", path.display()));
      }
    };

    if metadata.is_file() {
      files.push(path.to_path_buf());
    } else {
      trace!("Skipping: {} (not a regular file)", path.display());
    }
  }

  debug!("Found {} files in {}ms", files.len(), start_time.elapsed().as_millis());

  Ok(files)
}
