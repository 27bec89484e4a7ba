/* src/server/core/rust/src/store/mod.rs */

// Static category definitions, loaded once at process start.
// Each JSON file under the definition directory holds one top-level category.

mod loader;
mod types;


use std::path::Path;
use std::sync::Arc;

use crate::errors::TaxonomyError;
use crate::node::CategoryNode;

pub use loader::{load_taxonomy_dir, load_taxonomy_file, parse_definitions};

/// Ordered top-level categories. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyStore {
  roots: Vec<Arc<CategoryNode>>,
}

impl TaxonomyStore {
  pub fn new(roots: Vec<CategoryNode>) -> Self {
    Self { roots: roots.into_iter().map(Arc::new).collect() }
  }

  pub fn from_dir(dir: &Path) -> Result<Self, TaxonomyError> {
    Ok(Self::new(load_taxonomy_dir(dir)?))
  }

  pub fn from_file(path: &Path) -> Result<Self, TaxonomyError> {
    Ok(Self::new(load_taxonomy_file(path)?))
  }

  /// Top-level categories in definition order.
  pub fn load_all(&self) -> &[Arc<CategoryNode>] {
    &self.roots
  }

  pub fn is_empty(&self) -> bool {
    self.roots.is_empty()
  }
}
