/* src/server/core/rust/src/store/loader.rs */

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::TaxonomyError;
use crate::node::CategoryNode;

use super::types::DefinitionFile;

/// Parse one definition document. `origin` is only used for error reporting.
pub fn parse_definitions(json: &str, origin: &Path) -> Result<Vec<CategoryNode>, TaxonomyError> {
  let file: DefinitionFile = serde_json::from_str(json)
    .map_err(|source| TaxonomyError::Json { path: origin.to_path_buf(), source })?;
  Ok(file.into_nodes())
}

/// Load a single JSON file holding one top-level record or an array of them.
pub fn load_taxonomy_file(path: &Path) -> Result<Vec<CategoryNode>, TaxonomyError> {
  let content = std::fs::read_to_string(path)
    .map_err(|source| TaxonomyError::Io { path: path.to_path_buf(), source })?;
  parse_definitions(&content, path)
}

/// Load every `*.json` file in `dir`, ordered by file name.
/// File names carry a numeric prefix (`01-report.json`) that fixes top-level order.
pub fn load_taxonomy_dir(dir: &Path) -> Result<Vec<CategoryNode>, TaxonomyError> {
  let entries =
    std::fs::read_dir(dir).map_err(|source| TaxonomyError::Io { path: dir.to_path_buf(), source })?;

  let mut files: Vec<PathBuf> = Vec::new();
  for entry in entries {
    let entry = entry.map_err(|source| TaxonomyError::Io { path: dir.to_path_buf(), source })?;
    let path = entry.path();
    if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
      files.push(path);
    }
  }
  files.sort();

  let mut nodes = Vec::new();
  for file in &files {
    let loaded = load_taxonomy_file(file)?;
    debug!(file = %file.display(), categories = loaded.len(), "loaded category definitions");
    nodes.extend(loaded);
  }

  if nodes.is_empty() {
    return Err(TaxonomyError::Empty(dir.to_path_buf()));
  }
  Ok(nodes)
}
