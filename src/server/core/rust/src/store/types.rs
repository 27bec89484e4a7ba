/* src/server/core/rust/src/store/types.rs */

use std::sync::Arc;

use serde::Deserialize;

use crate::node::{CategoryNode, Title};

/// One category as written in a definition file.
#[derive(Deserialize)]
pub(super) struct NodeRecord {
  #[serde(default)]
  pub(super) id: Option<String>,
  pub(super) title: Title,
  pub(super) slug: String,
  #[serde(default)]
  pub(super) aliases: Vec<String>,
  #[serde(default, alias = "children")]
  pub(super) subcategories: Vec<NodeRecord>,
}

impl NodeRecord {
  /// Convert into the runtime node. A missing or blank id falls back to the slug.
  pub(super) fn into_node(self) -> CategoryNode {
    let id = match self.id {
      Some(id) if !id.trim().is_empty() => id,
      _ => self.slug.clone(),
    };
    CategoryNode {
      id,
      title: self.title,
      slug: self.slug,
      aliases: self.aliases,
      children: self.subcategories.into_iter().map(|c| Arc::new(c.into_node())).collect(),
    }
  }
}

/// A definition file holds either one top-level record or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
pub(super) enum DefinitionFile {
  Many(Vec<NodeRecord>),
  One(NodeRecord),
}

impl DefinitionFile {
  pub(super) fn into_nodes(self) -> Vec<CategoryNode> {
    match self {
      Self::Many(records) => records.into_iter().map(NodeRecord::into_node).collect(),
      Self::One(record) => vec![record.into_node()],
    }
  }
}
