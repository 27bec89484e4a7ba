/* src/cli/core/src/check.rs */

use std::path::Path;

use anyhow::{Result, bail};

use crate::config::NewsdeskConfig;
use crate::{taxonomy, ui};

pub fn run_check(config: &NewsdeskConfig, base_dir: &Path) -> Result<()> {
  ui::banner("check");
  let tax = taxonomy::load(config, base_dir)?;
  ui::ok(&format!(
    "{} categories, {} nodes, {} legacy labels",
    tax.all_categories().len(),
    tax.maps().len(),
    tax.maps().legacy_labels().len()
  ));
  ui::ok(&format!("{} static paths", tax.enumerate_static_paths().len()));

  let diagnostics = tax.diagnostics();
  if diagnostics.is_empty() {
    ui::ok("no data problems");
    return Ok(());
  }
  for diagnostic in diagnostics {
    ui::fail(&diagnostic.to_string());
  }
  ui::blank();
  bail!("{} taxonomy problem(s) found", diagnostics.len());
}
