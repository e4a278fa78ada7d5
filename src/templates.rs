//! # Templates Module
//!
//! This module provides functionality for loading the two boilerplate
//! template texts, deriving the comment-marker variants used for different
//! file types, and building the extension table that drives enforcement.
//!
//! The module includes:
//! - [`TemplateSet`] for the two template texts read at startup
//! - [`CommentMarker`] for the supported comment-marker substitutions
//! - [`ExtensionTable`] mapping file extensions to pre-substituted
//!   [`HeaderSet`] variants
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use apply_boilerplate::templates::{ExtensionTable, TemplateSet};
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load `license_header` and `modelines.txt` from the working directory
//! let templates = TemplateSet::load(Path::new("."))?;
//!
//! // Build the extension table once; it is immutable afterward
//! let table = ExtensionTable::build(&templates);
//!
//! // Look up the variants for a file
//! if let Some(headers) = table.lookup(Path::new("boot.s")) {
//!   println!("license for .s files:\n{}", headers.license);
//! }
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Fixed name of the license template file, resolved against the working
/// directory.
pub const LICENSE_FILE: &str = "license_header";

/// Fixed name of the modelines template file, resolved against the working
/// directory.
pub const MODELINES_FILE: &str = "modelines.txt";

/// The two template texts, read once at startup and never mutated.
///
/// Both templates use `//` as their native comment marker; variants for other
/// file types are derived by [`ExtensionTable::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
  /// License boilerplate, prepended to files that lack it
  pub license: String,

  /// Editor modeline boilerplate, appended to files that lack it
  pub modelines: String,
}

impl TemplateSet {
  /// Creates a template set from in-memory strings.
  pub const fn new(license: String, modelines: String) -> Self {
    Self { license, modelines }
  }

  /// Loads the template set from its two fixed-name files in `dir`.
  ///
  /// # Errors
  ///
  /// Returns an error if either file is missing, unreadable, or not valid
  /// UTF-8. Both conditions are fatal at startup.
  pub fn load(dir: &Path) -> Result<Self> {
    let license_path = dir.join(LICENSE_FILE);
    let license = fs::read_to_string(&license_path)
      .with_context(|| format!("Failed to read license template file: {}", license_path.display()))?;

    let modelines_path = dir.join(MODELINES_FILE);
    let modelines = fs::read_to_string(&modelines_path)
      .with_context(|| format!("Failed to read modelines template file: {}", modelines_path.display()))?;

    debug!(
      "Loaded templates: {} ({} bytes), {} ({} bytes)",
      LICENSE_FILE,
      license.len(),
      MODELINES_FILE,
      modelines.len()
    );

    Ok(Self { license, modelines })
  }
}

/// Comment-marker substitution applied to a template for a file type.
///
/// The templates are authored with `//` comments; assembly and script-like
/// files need every occurrence rewritten to their own line-comment marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentMarker {
  /// C-family files: `//` kept unchanged
  Slashes,
  /// Assembly files: `//` becomes `;`
  Semicolon,
  /// Script-like files: `//` becomes `#`
  Hash,
}

impl CommentMarker {
  /// Rewrites every occurrence of `//` in `text` to this marker.
  pub fn apply(self, text: &str) -> String {
    match self {
      Self::Slashes => text.to_owned(),
      Self::Semicolon => text.replace("//", ";"),
      Self::Hash => text.replace("//", "#"),
    }
  }
}

/// Supported extensions and their marker substitutions.
///
/// Keys include the leading dot and match case-sensitively; files with any
/// other extension (or none) are skipped entirely.
const EXTENSIONS: &[(&str, CommentMarker)] = &[
  (".cpp", CommentMarker::Slashes),
  (".c", CommentMarker::Slashes),
  (".h", CommentMarker::Slashes),
  (".s", CommentMarker::Semicolon),
  (".rb", CommentMarker::Hash),
];

/// The license and modelines variants for one file type, with the comment
/// marker already substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSet {
  /// License text in the file type's comment syntax
  pub license: String,

  /// Modelines text in the file type's comment syntax
  pub modelines: String,
}

/// Mapping from recognized file extensions to their [`HeaderSet`] variants.
///
/// Built once from [`TemplateSet`] at startup; immutable afterward. The key
/// set enumerates the supported extensions exhaustively, so a failed lookup
/// means the file is not handled at all.
#[derive(Debug)]
pub struct ExtensionTable {
  entries: Vec<(&'static str, HeaderSet)>,
}

impl ExtensionTable {
  /// Builds the table by substituting each marker into both templates.
  pub fn build(templates: &TemplateSet) -> Self {
    let entries = EXTENSIONS
      .iter()
      .map(|&(ext, marker)| {
        (
          ext,
          HeaderSet {
            license: marker.apply(&templates.license),
            modelines: marker.apply(&templates.modelines),
          },
        )
      })
      .collect();

    Self { entries }
  }

  /// Looks up the header variants for `path` by its extension.
  ///
  /// Matching is purely lexical on the filename: the extension is the
  /// substring from the last `.` of the final path segment onward, compared
  /// exactly and case-sensitively. Returns `None` for unrecognized
  /// extensions and for paths with no extension.
  pub fn lookup(&self, path: &Path) -> Option<&HeaderSet> {
    let ext = extension_of(path)?;
    self.entries.iter().find(|entry| entry.0 == ext).map(|entry| &entry.1)
  }
}

/// Extension of the final path segment, including the leading dot.
fn extension_of(path: &Path) -> Option<String> {
  let ext = path.extension()?.to_str()?;
  Some(format!(".{ext}"))
}
