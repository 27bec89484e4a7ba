/* src/server/core/rust/src/mapping/diagnostic.rs */

use std::fmt;

use serde::Serialize;

/// A non-fatal data problem found while building the lookup maps.
/// Colliding entries are resolved first-definition-wins; `kept`/`dropped` name the
/// winning and the discarded entry (node ids, or paths for leaf slugs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
  DuplicateId { id: String },
  DuplicateSiblingSlug { parent: String, slug: String },
  DuplicatePath { path: String, kept: String, dropped: String },
  DuplicateLabel { label: String, kept: String, dropped: String },
  DuplicateLeafSlug { slug: String, kept: String, dropped: String },
  LabelShadowsSlug { label: String, owner: String },
  MissingEnglishTitle { id: String },
  DepthExceeded { id: String, depth: usize },
  /// Descendant of a node dropped by a duplicate id or path.
  DroppedWithAncestor { id: String, ancestor: String },
}

impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::DuplicateId { id } => write!(f, "duplicate category id \"{id}\""),
      Self::DuplicateSiblingSlug { parent, slug } => {
        write!(f, "slug \"{slug}\" used twice under \"{parent}\"")
      }
      Self::DuplicatePath { path, kept, dropped } => {
        write!(f, "duplicate URL /{path}: kept {kept}, dropped {dropped}")
      }
      Self::DuplicateLabel { label, kept, dropped } => {
        write!(f, "duplicate legacy label \"{label}\": kept {kept}, dropped {dropped}")
      }
      Self::DuplicateLeafSlug { slug, kept, dropped } => {
        write!(f, "duplicate leaf slug \"{slug}\": kept {kept}, dropped {dropped}")
      }
      Self::LabelShadowsSlug { label, owner } => {
        write!(f, "legacy label \"{label}\" of {owner} is already a canonical slug")
      }
      Self::MissingEnglishTitle { id } => write!(f, "category \"{id}\" has no English title"),
      Self::DepthExceeded { id, depth } => {
        write!(f, "category \"{id}\" sits at depth {depth}, deeper than 3 levels")
      }
      Self::DroppedWithAncestor { id, ancestor } => {
        write!(f, "category \"{id}\" dropped along with its ancestor {ancestor}")
      }
    }
  }
}
