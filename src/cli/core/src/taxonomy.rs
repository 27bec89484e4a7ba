/* src/cli/core/src/taxonomy.rs */

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use newsdesk_server::{Taxonomy, TaxonomyStore};

use crate::config::NewsdeskConfig;

/// Load the definition directory named by the config and build the snapshot.
pub fn load(config: &NewsdeskConfig, base_dir: &Path) -> Result<Arc<Taxonomy>> {
  let dir = config.taxonomy_dir(base_dir);
  let store = TaxonomyStore::from_dir(&dir)
    .with_context(|| format!("failed to load taxonomy from {}", dir.display()))?;
  Ok(Arc::new(Taxonomy::build(store)))
}
