/* src/server/core/rust/src/mapping/mod.rs */

// Lookup tables derived from the taxonomy tree, built once at boot.

mod builder;
mod diagnostic;


use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::node::CategoryNode;
use crate::resolve::Resolution;

pub use diagnostic::Diagnostic;

/// Deepest level that gets a URL: category / subcategory / subsubcategory.
pub const MAX_DEPTH: usize = 3;

pub struct CategoryMaps {
  by_id: HashMap<String, Arc<CategoryNode>>,
  /// "industry/industry-medical" -> resolution
  by_path: HashMap<String, Resolution>,
  /// localized label -> canonical slug
  by_legacy_label: HashMap<String, String>,
  /// slug of any non-root node -> canonical "/"-prefixed path
  by_leaf_slug: HashMap<String, String>,
  /// Title labels shared by several nodes; only resolvable under a known parent.
  contextual_labels: HashSet<String>,
  slugs: HashSet<String>,
  /// Every mapped node in pre-order.
  order: Vec<Resolution>,
  diagnostics: Vec<Diagnostic>,
}

impl CategoryMaps {
  pub fn build(roots: &[Arc<CategoryNode>]) -> Self {
    builder::MapBuilder::default().build(roots)
  }

  pub fn node(&self, id: &str) -> Option<&Arc<CategoryNode>> {
    self.by_id.get(id)
  }

  pub fn resolution(&self, path: &str) -> Option<&Resolution> {
    self.by_path.get(path)
  }

  pub fn legacy_slug(&self, label: &str) -> Option<&str> {
    self.by_legacy_label.get(label).map(String::as_str)
  }

  pub fn leaf_path(&self, slug: &str) -> Option<&str> {
    self.by_leaf_slug.get(slug).map(String::as_str)
  }

  pub fn is_contextual_label(&self, label: &str) -> bool {
    self.contextual_labels.contains(label)
  }

  pub fn is_canonical_slug(&self, segment: &str) -> bool {
    self.slugs.contains(segment)
  }

  pub fn resolutions(&self) -> &[Resolution] {
    &self.order
  }

  pub fn diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }

  pub fn len(&self) -> usize {
    self.by_id.len()
  }

  pub fn is_empty(&self) -> bool {
    self.by_id.is_empty()
  }

  /// Legacy labels sorted by key, for listings.
  pub fn legacy_labels(&self) -> Vec<(&str, &str)> {
    let mut labels: Vec<(&str, &str)> =
      self.by_legacy_label.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    labels.sort_unstable();
    labels
  }
}
