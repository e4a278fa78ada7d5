//! # apply-boilerplate
//!
//! A tool that ensures text source files begin with a license header and end
//! with a set of editor modeline comment lines.
//!
//! `apply-boilerplate` walks the working directory recursively and rewrites
//! files in place, transforming the `//` comment marker of both boilerplate
//! texts into the comment syntax appropriate to each file's extension. A
//! file already containing both texts anywhere in its content is left
//! byte-identical, so running the tool twice in succession is a no-op.
//!
//! ## Features
//!
//! * Recursive, deterministic scan of the working directory
//! * Per-extension comment-marker substitution (`//` for C-family files,
//!   `;` for assembly, `#` for Ruby)
//! * Independent license/modelines checks with a single combined rewrite
//!   through an atomic rename
//! * Best-effort rename: a failure is reported and the run continues
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use apply_boilerplate::enforcer::Enforcer;
//! use apply_boilerplate::templates::{ExtensionTable, TemplateSet};
//!
//! fn main() -> anyhow::Result<()> {
//!   // Read `license_header` and `modelines.txt` from the working directory
//!   let templates = TemplateSet::load(Path::new("."))?;
//!
//!   // Derive the per-extension variants once
//!   let table = ExtensionTable::build(&templates);
//!
//!   // Walk the tree, rewriting files that lack either text
//!   let summary = Enforcer::new(table).run(Path::new("./"))?;
//!
//!   println!("{} of {} files updated", summary.files_updated, summary.files_visited);
//!   Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`enforcer`] - Core functionality for checking and rewriting files
//! * [`templates`] - Template loading and comment-marker substitution
//! * [`walker`] - Deterministic directory traversal
//!
//! [`enforcer`]: crate::enforcer
//! [`templates`]: crate::templates
//! [`walker`]: crate::walker

pub mod enforcer;
pub mod logging;
pub mod output;
pub mod templates;
pub mod walker;
