/* src/server/core/rust/src/sync.rs */

// Push the taxonomy snapshot to an external record store.
// Only the explicit `sync` step writes; request handling never does.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::TaxonomyError;
use crate::resolve::Taxonomy;

/// One row of the flattened taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
  pub id: String,
  pub title_ko: String,
  #[serde(default)]
  pub title_en: Option<String>,
  pub slug: String,
  #[serde(default)]
  pub parent_id: Option<String>,
}

/// Flatten every addressable node in pre-order, parents before children.
pub fn flatten(taxonomy: &Taxonomy) -> Vec<CategoryRecord> {
  let mut seen = HashSet::new();
  let mut records = Vec::new();
  for resolution in taxonomy.nodes() {
    let node = resolution.node();
    if !seen.insert(node.id.as_str()) {
      continue;
    }
    records.push(CategoryRecord {
      id: node.id.clone(),
      title_ko: node.title.ko().to_string(),
      title_en: node.title.en().map(String::from),
      slug: node.slug.clone(),
      parent_id: resolution.parent().map(|p| p.id.clone()),
    });
  }
  records
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncPlan {
  pub upserts: Vec<CategoryRecord>,
  /// Stored ids no longer present in the snapshot, in store order.
  pub deletions: Vec<String>,
}

impl SyncPlan {
  pub fn new(records: Vec<CategoryRecord>, existing_ids: &[String]) -> Self {
    let current: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
    let deletions =
      existing_ids.iter().filter(|id| !current.contains(id.as_str())).cloned().collect();
    Self { upserts: records, deletions }
  }

  pub fn is_empty(&self) -> bool {
    self.upserts.is_empty() && self.deletions.is_empty()
  }
}

/// Destination of a sync. Writes may be buffered until `commit`.
pub trait CategoryStore {
  fn existing_ids(&self) -> Result<Vec<String>, TaxonomyError>;
  fn upsert(&mut self, record: &CategoryRecord) -> Result<(), TaxonomyError>;
  fn delete(&mut self, id: &str) -> Result<(), TaxonomyError>;
  fn commit(&mut self) -> Result<(), TaxonomyError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
  pub upserted: usize,
  pub deleted: usize,
  /// (id, error message) for records the store rejected.
  pub failed: Vec<(String, String)>,
}

impl SyncReport {
  pub fn is_clean(&self) -> bool {
    self.failed.is_empty()
  }
}

/// Apply a plan record by record. A rejected record is logged and skipped;
/// only a failed commit aborts the sync.
pub fn apply(plan: &SyncPlan, store: &mut dyn CategoryStore) -> Result<SyncReport, TaxonomyError> {
  let mut report = SyncReport::default();
  for record in &plan.upserts {
    match store.upsert(record) {
      Ok(()) => report.upserted += 1,
      Err(e) => {
        error!(id = %record.id, error = %e, "failed to sync category");
        report.failed.push((record.id.clone(), e.to_string()));
      }
    }
  }
  for id in &plan.deletions {
    match store.delete(id) {
      Ok(()) => {
        info!(%id, "deleted category");
        report.deleted += 1;
      }
      Err(e) => {
        error!(%id, error = %e, "failed to delete category");
        report.failed.push((id.clone(), e.to_string()));
      }
    }
  }
  store.commit()?;
  info!(
    upserted = report.upserted,
    deleted = report.deleted,
    failed = report.failed.len(),
    "category sync completed"
  );
  Ok(report)
}

/// Record store backed by a single pretty-printed JSON array.
pub struct JsonFileStore {
  path: PathBuf,
  records: Vec<CategoryRecord>,
}

impl JsonFileStore {
  /// Open `path`, starting empty when the file does not exist yet.
  pub fn open(path: impl Into<PathBuf>) -> Result<Self, TaxonomyError> {
    let path = path.into();
    if !path.exists() {
      return Ok(Self { path, records: Vec::new() });
    }
    let content = std::fs::read_to_string(&path)
      .map_err(|source| TaxonomyError::Io { path: path.clone(), source })?;
    let records = serde_json::from_str(&content)
      .map_err(|source| TaxonomyError::Json { path: path.clone(), source })?;
    Ok(Self { path, records })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn records(&self) -> &[CategoryRecord] {
    &self.records
  }
}

impl CategoryStore for JsonFileStore {
  fn existing_ids(&self) -> Result<Vec<String>, TaxonomyError> {
    Ok(self.records.iter().map(|r| r.id.clone()).collect())
  }

  fn upsert(&mut self, record: &CategoryRecord) -> Result<(), TaxonomyError> {
    match self.records.iter_mut().find(|r| r.id == record.id) {
      Some(existing) => *existing = record.clone(),
      None => self.records.push(record.clone()),
    }
    Ok(())
  }

  fn delete(&mut self, id: &str) -> Result<(), TaxonomyError> {
    self.records.retain(|r| r.id != id);
    Ok(())
  }

  fn commit(&mut self) -> Result<(), TaxonomyError> {
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)
        .map_err(|source| TaxonomyError::Io { path: parent.to_path_buf(), source })?;
    }
    let json = serde_json::to_string_pretty(&self.records)
      .map_err(|source| TaxonomyError::Json { path: self.path.clone(), source })?;
    std::fs::write(&self.path, json)
      .map_err(|source| TaxonomyError::Io { path: self.path.clone(), source })
  }
}
