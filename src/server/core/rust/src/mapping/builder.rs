/* src/server/core/rust/src/mapping/builder.rs */

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::node::{CategoryNode, Title, hyphenate};
use crate::resolve::Resolution;

use super::{CategoryMaps, Diagnostic, MAX_DEPTH};

struct LabelCandidate {
  label: String,
  slug: String,
  owner: String,
  /// From the node's `aliases` rather than derived from its title.
  explicit: bool,
}

#[derive(Default)]
pub(super) struct MapBuilder {
  by_id: HashMap<String, Arc<CategoryNode>>,
  by_path: HashMap<String, Resolution>,
  by_leaf_slug: HashMap<String, String>,
  slugs: HashSet<String>,
  order: Vec<Resolution>,
  labels: Vec<LabelCandidate>,
  diagnostics: Vec<Diagnostic>,
}

impl MapBuilder {
  pub(super) fn build(mut self, roots: &[Arc<CategoryNode>]) -> CategoryMaps {
    self.check_siblings("<root>", roots);
    let mut chain = Vec::with_capacity(MAX_DEPTH);
    for root in roots {
      self.visit(root, &mut chain);
    }
    let (by_legacy_label, contextual_labels) = self.build_labels();

    for diagnostic in &self.diagnostics {
      warn!(%diagnostic, "taxonomy data problem");
    }
    debug!(
      nodes = self.by_id.len(),
      paths = self.by_path.len(),
      labels = by_legacy_label.len(),
      contextual = contextual_labels.len(),
      "category maps built"
    );

    CategoryMaps {
      by_id: self.by_id,
      by_path: self.by_path,
      by_legacy_label,
      by_leaf_slug: self.by_leaf_slug,
      contextual_labels,
      slugs: self.slugs,
      order: self.order,
      diagnostics: self.diagnostics,
    }
  }

  /// Pre-order: a node is registered before any of its children. A dropped
  /// node takes its whole subtree with it.
  fn visit(&mut self, node: &Arc<CategoryNode>, chain: &mut Vec<Arc<CategoryNode>>) {
    chain.push(Arc::clone(node));
    if self.register(node, chain) {
      self.check_siblings(&node.id, &node.children);
      for child in &node.children {
        self.visit(child, chain);
      }
    } else {
      self.skip_subtree(node, &node.id);
    }
    chain.pop();
  }

  /// Returns whether the node was kept.
  fn register(&mut self, node: &Arc<CategoryNode>, chain: &[Arc<CategoryNode>]) -> bool {
    if self.by_id.contains_key(&node.id) {
      self.diagnostics.push(Diagnostic::DuplicateId { id: node.id.clone() });
      return false;
    }

    if let Title::Localized { en: None, .. } = node.title {
      self.diagnostics.push(Diagnostic::MissingEnglishTitle { id: node.id.clone() });
    }

    let depth = chain.len();
    if depth > MAX_DEPTH {
      self.diagnostics.push(Diagnostic::DepthExceeded { id: node.id.clone(), depth });
    } else if !self.map_node(node, chain) {
      return false;
    }
    self.by_id.insert(node.id.clone(), Arc::clone(node));
    true
  }

  fn skip_subtree(&mut self, node: &CategoryNode, ancestor: &str) {
    for child in &node.children {
      self.diagnostics.push(Diagnostic::DroppedWithAncestor {
        id: child.id.clone(),
        ancestor: ancestor.to_string(),
      });
      self.skip_subtree(child, ancestor);
    }
  }

  /// Returns false when the node's path is already taken.
  fn map_node(&mut self, node: &Arc<CategoryNode>, chain: &[Arc<CategoryNode>]) -> bool {
    let Some(resolution) = Resolution::from_chain(chain) else {
      return false;
    };
    let path = resolution.path();

    match self.by_path.entry(path.clone()) {
      Entry::Occupied(existing) => {
        self.diagnostics.push(Diagnostic::DuplicatePath {
          path,
          kept: existing.get().node().id.clone(),
          dropped: node.id.clone(),
        });
        return false;
      }
      Entry::Vacant(slot) => {
        slot.insert(resolution.clone());
        self.order.push(resolution);
      }
    }
    self.slugs.insert(node.slug.clone());

    if chain.len() > 1 {
      let url = format!("/{path}");
      match self.by_leaf_slug.entry(node.slug.clone()) {
        Entry::Occupied(existing) => {
          self.diagnostics.push(Diagnostic::DuplicateLeafSlug {
            slug: node.slug.clone(),
            kept: existing.get().clone(),
            dropped: url,
          });
        }
        Entry::Vacant(slot) => {
          slot.insert(url);
        }
      }
    }

    let ko = node.title.ko();
    let hyphenated = hyphenate(ko);
    if hyphenated != ko {
      self.push_label(hyphenated, node, false);
    }
    self.push_label(ko.to_string(), node, false);
    for alias in &node.aliases {
      self.push_label(alias.trim().to_string(), node, true);
    }
    true
  }

  fn push_label(&mut self, label: String, node: &CategoryNode, explicit: bool) {
    self.labels.push(LabelCandidate {
      label,
      slug: node.slug.clone(),
      owner: node.id.clone(),
      explicit,
    });
  }

  fn check_siblings(&mut self, parent: &str, children: &[Arc<CategoryNode>]) {
    let mut seen = HashSet::new();
    for child in children {
      if !seen.insert(child.slug.as_str()) {
        self.diagnostics.push(Diagnostic::DuplicateSiblingSlug {
          parent: parent.to_string(),
          slug: child.slug.clone(),
        });
      }
    }
  }

  /// Title-derived labels that name several different slugs ("의료" under four
  /// parents) stay contextual. Everything else lands in the global map, first wins.
  fn build_labels(&mut self) -> (HashMap<String, String>, HashSet<String>) {
    let mut targets: HashMap<&str, HashSet<&str>> = HashMap::new();
    for candidate in self.labels.iter().filter(|c| !c.explicit) {
      targets.entry(candidate.label.as_str()).or_default().insert(candidate.slug.as_str());
    }
    let contextual: HashSet<String> = targets
      .into_iter()
      .filter(|(_, slugs)| slugs.len() > 1)
      .map(|(label, _)| label.to_string())
      .collect();

    let mut winners: HashMap<String, (String, String)> = HashMap::new();
    for candidate in &self.labels {
      if candidate.label.is_empty() || candidate.label == candidate.slug {
        continue;
      }
      if !candidate.explicit && contextual.contains(&candidate.label) {
        continue;
      }
      if self.slugs.contains(&candidate.label) {
        self.diagnostics.push(Diagnostic::LabelShadowsSlug {
          label: candidate.label.clone(),
          owner: candidate.owner.clone(),
        });
        continue;
      }
      match winners.entry(candidate.label.clone()) {
        Entry::Occupied(existing) => {
          let (slug, owner) = existing.get();
          if *slug != candidate.slug {
            self.diagnostics.push(Diagnostic::DuplicateLabel {
              label: candidate.label.clone(),
              kept: owner.clone(),
              dropped: candidate.owner.clone(),
            });
          }
        }
        Entry::Vacant(slot) => {
          slot.insert((candidate.slug.clone(), candidate.owner.clone()));
        }
      }
    }

    let by_label = winners.into_iter().map(|(label, (slug, _))| (label, slug)).collect();
    (by_label, contextual)
  }
}
