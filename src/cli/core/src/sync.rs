/* src/cli/core/src/sync.rs */

use std::path::Path;

use anyhow::{Context, Result, bail};
use newsdesk_server::sync::{self, CategoryStore, JsonFileStore, SyncPlan};

use crate::config::NewsdeskConfig;
use crate::{taxonomy, ui};

pub fn run_sync(
  config: &NewsdeskConfig,
  base_dir: &Path,
  store_override: Option<&Path>,
  dry_run: bool,
) -> Result<()> {
  ui::banner("sync");
  let tax = taxonomy::load(config, base_dir)?;
  let store_path = match store_override {
    Some(path) => path.to_path_buf(),
    None => config.store_path(base_dir),
  };
  let mut store = JsonFileStore::open(&store_path)
    .with_context(|| format!("failed to open store {}", store_path.display()))?;

  let existing = store.existing_ids()?;
  let plan = SyncPlan::new(sync::flatten(&tax), &existing);
  ui::arrow(&format!(
    "{} upserts, {} deletions -> {}",
    plan.upserts.len(),
    plan.deletions.len(),
    store.path().display()
  ));
  for id in &plan.deletions {
    ui::detail(&format!("delete {id}"));
  }
  if dry_run {
    ui::ok("dry run, nothing written");
    return Ok(());
  }

  let report = sync::apply(&plan, &mut store)
    .with_context(|| format!("failed to write {}", store_path.display()))?;
  for (id, err) in &report.failed {
    ui::fail(&format!("{id}: {err}"));
  }
  if !report.is_clean() {
    bail!("{} record(s) failed to sync", report.failed.len());
  }
  ui::ok(&format!("synced {} categories, deleted {}", report.upserted, report.deleted));
  Ok(())
}
