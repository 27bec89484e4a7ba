/* src/server/core/rust/src/resolve.rs */

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::mapping::{CategoryMaps, Diagnostic};
use crate::node::{CategoryNode, slugify};
use crate::store::TaxonomyStore;

/// A category page target: the top-level category plus up to two descendants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
  pub category: Arc<CategoryNode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub subcategory: Option<Arc<CategoryNode>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub subsubcategory: Option<Arc<CategoryNode>>,
}

impl Resolution {
  /// Build from a root-to-node chain of one to three nodes.
  pub fn from_chain(chain: &[Arc<CategoryNode>]) -> Option<Self> {
    match chain {
      [category] => {
        Some(Self { category: Arc::clone(category), subcategory: None, subsubcategory: None })
      }
      [category, sub] => Some(Self {
        category: Arc::clone(category),
        subcategory: Some(Arc::clone(sub)),
        subsubcategory: None,
      }),
      [category, sub, subsub] => Some(Self {
        category: Arc::clone(category),
        subcategory: Some(Arc::clone(sub)),
        subsubcategory: Some(Arc::clone(subsub)),
      }),
      _ => None,
    }
  }

  /// Root-to-leaf nodes.
  pub fn chain(&self) -> impl Iterator<Item = &Arc<CategoryNode>> {
    std::iter::once(&self.category)
      .chain(self.subcategory.as_ref())
      .chain(self.subsubcategory.as_ref())
  }

  /// The deepest node.
  pub fn node(&self) -> &Arc<CategoryNode> {
    self.subsubcategory.as_ref().or(self.subcategory.as_ref()).unwrap_or(&self.category)
  }

  pub fn depth(&self) -> usize {
    self.chain().count()
  }

  pub fn parent(&self) -> Option<&Arc<CategoryNode>> {
    match (&self.subcategory, &self.subsubcategory) {
      (Some(sub), Some(_)) => Some(sub),
      (Some(_), None) => Some(&self.category),
      _ => None,
    }
  }

  /// "industry/industry-medical"
  pub fn path(&self) -> String {
    self.chain().map(|n| n.slug.as_str()).collect::<Vec<_>>().join("/")
  }

  /// "/industry/industry-medical"
  pub fn url(&self) -> String {
    format!("/{}", self.path())
  }
}

/// Either a raw id/slug/label string or an already loaded node.
/// Call sites pass whichever they have at hand.
#[derive(Debug, Clone, Copy)]
pub enum CategoryRef<'a> {
  Key(&'a str),
  Node(&'a CategoryNode),
}

impl<'a> From<&'a str> for CategoryRef<'a> {
  fn from(key: &'a str) -> Self {
    Self::Key(key)
  }
}

impl<'a> From<&'a String> for CategoryRef<'a> {
  fn from(key: &'a String) -> Self {
    Self::Key(key)
  }
}

impl<'a> From<&'a CategoryNode> for CategoryRef<'a> {
  fn from(node: &'a CategoryNode) -> Self {
    Self::Node(node)
  }
}

impl<'a> From<&'a Arc<CategoryNode>> for CategoryRef<'a> {
  fn from(node: &'a Arc<CategoryNode>) -> Self {
    Self::Node(node)
  }
}

/// One pre-rendered category page: `/{mainCategory}/{subcategory}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticParams {
  pub main_category: String,
  pub subcategory: String,
}

/// Immutable taxonomy snapshot: the store plus its derived maps.
/// Built once at startup and shared behind an `Arc`.
pub struct Taxonomy {
  store: TaxonomyStore,
  maps: CategoryMaps,
}

impl Taxonomy {
  pub fn build(store: TaxonomyStore) -> Self {
    let maps = CategoryMaps::build(store.load_all());
    info!(
      categories = store.load_all().len(),
      nodes = maps.len(),
      diagnostics = maps.diagnostics().len(),
      "taxonomy loaded"
    );
    Self { store, maps }
  }

  pub fn from_nodes(nodes: Vec<CategoryNode>) -> Self {
    Self::build(TaxonomyStore::new(nodes))
  }

  pub fn maps(&self) -> &CategoryMaps {
    &self.maps
  }

  pub fn diagnostics(&self) -> &[Diagnostic] {
    self.maps.diagnostics()
  }

  /// Top-level categories in definition order.
  pub fn all_categories(&self) -> &[Arc<CategoryNode>] {
    self.store.load_all()
  }

  pub fn get_by_id(&self, id: &str) -> Option<&Arc<CategoryNode>> {
    self.maps.node(id)
  }

  pub fn subcategories_of(&self, id: &str) -> Option<&[Arc<CategoryNode>]> {
    self.get_by_id(id).map(|n| n.children.as_slice())
  }

  /// Every mapped node, pre-order, as a resolution.
  pub fn nodes(&self) -> impl Iterator<Item = &Resolution> {
    self.maps.resolutions().iter()
  }

  /// Look up canonical, already decoded slug segments.
  pub fn resolve_path<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Resolution> {
    if segments.is_empty() {
      return None;
    }
    let key = segments.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("/");
    self.maps.resolution(&key)
  }

  /// Like `resolve_path` but takes a raw "/a/b" string.
  pub fn resolve_str(&self, path: &str) -> Option<&Resolution> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    self.resolve_path(&segments)
  }

  /// Resolve a static-param pair. `sub` may live below level 2 under `main`,
  /// in which case the leaf table supplies its full path.
  pub fn resolve_static(&self, main: &str, sub: &str) -> Option<&Resolution> {
    if let Some(found) = self.resolve_path(&[main, sub]) {
      return Some(found);
    }
    let path = self.maps.leaf_path(sub)?;
    self.resolve_str(path).filter(|r| r.category.slug == main)
  }

  /// Canonical URL for a (category, subcategory?, subsubcategory?) triple.
  pub fn build_url<'a>(
    &self,
    category: impl Into<CategoryRef<'a>>,
    subcategory: Option<CategoryRef<'a>>,
    subsubcategory: Option<CategoryRef<'a>>,
  ) -> String {
    let mut segments = vec![self.slug_for(category.into(), None)];
    if let Some(sub) = subcategory {
      let parent = segments.join("/");
      segments.push(self.slug_for(sub, Some(&parent)));
      if let Some(subsub) = subsubcategory {
        let parent = segments.join("/");
        segments.push(self.slug_for(subsub, Some(&parent)));
      }
    }
    format!("/{}", segments.join("/"))
  }

  /// Article detail URL under its category page.
  pub fn article_url<'a>(
    &self,
    article_id: &str,
    category: impl Into<CategoryRef<'a>>,
    subcategory: Option<CategoryRef<'a>>,
    subsubcategory: Option<CategoryRef<'a>>,
  ) -> String {
    format!("{}/article/{article_id}", self.build_url(category, subcategory, subsubcategory))
  }

  /// One entry per addressable descendant of every top-level category,
  /// intermediate levels included, in pre-order. Pairs that `resolve_static`
  /// cannot answer (a leaf slug owned by another category) are left out, and
  /// repeated pairs keep their first occurrence.
  pub fn enumerate_static_paths(&self) -> Vec<StaticParams> {
    let mut seen = HashSet::new();
    self
      .nodes()
      .filter(|r| r.depth() > 1)
      .map(|r| StaticParams {
        main_category: r.category.slug.clone(),
        subcategory: r.node().slug.clone(),
      })
      .filter(|p| self.resolve_static(&p.main_category, &p.subcategory).is_some())
      .filter(|p| seen.insert(p.clone()))
      .collect()
  }

  /// Canonical slug for a legacy or localized label, if the taxonomy knows it.
  /// `parent` is the canonical path of the enclosing node; a matching child title
  /// there wins over the global label map. Canonical slugs never map to anything.
  pub fn legacy_slug(&self, label: &str, parent: Option<&str>) -> Option<&str> {
    if self.maps.is_canonical_slug(label) {
      return None;
    }
    let siblings = match parent {
      None => Some(self.all_categories()),
      Some(path) => self.resolve_str(path).map(|r| r.node().children.as_slice()),
    };
    if let Some(found) = siblings.and_then(|s| s.iter().find(|n| n.title.matches_label(label))) {
      return Some(&found.slug);
    }
    self.maps.legacy_slug(label)
  }

  /// Like `legacy_slug`, falling back to a slugified form of unknown labels.
  pub fn label_slug(&self, label: &str, parent: Option<&str>) -> String {
    self.legacy_slug(label, parent).map_or_else(|| slugify(label), str::to_string)
  }

  fn slug_for(&self, reference: CategoryRef<'_>, parent: Option<&str>) -> String {
    match reference {
      CategoryRef::Node(node) => node.slug.clone(),
      CategoryRef::Key(key) => match self.get_by_id(key) {
        Some(node) => node.slug.clone(),
        None => self.label_slug(key, parent),
      },
    }
  }
}
