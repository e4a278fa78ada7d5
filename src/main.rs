//! # apply-boilerplate
//!
//! Binary entry point. Behavior is fixed: templates come from two
//! fixed-name files in the working directory and the scan root is `./`.

use std::path::Path;

use anyhow::Result;
use apply_boilerplate::enforcer::Enforcer;
use apply_boilerplate::logging;
use apply_boilerplate::templates::{ExtensionTable, TemplateSet};

fn main() -> Result<()> {
  logging::init_tracing();

  let templates = TemplateSet::load(Path::new("."))?;
  let table = ExtensionTable::build(&templates);

  Enforcer::new(table).run(Path::new("./"))?;

  Ok(())
}
