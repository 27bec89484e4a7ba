/* src/server/core/rust/src/node.rs */

use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

fn whitespace_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Display language for category titles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  Ko,
  En,
}

impl Locale {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Ko => "ko",
      Self::En => "en",
    }
  }

  pub fn parse(value: &str) -> Option<Self> {
    match value {
      "ko" => Some(Self::Ko),
      "en" => Some(Self::En),
      _ => None,
    }
  }
}

/// Category title as written in definition data.
/// Legacy leaf entries carry a bare string; everything else is a `{ko, en}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Title {
  Plain(String),
  Localized {
    ko: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    en: Option<String>,
  },
}

impl Title {
  pub fn localized(ko: impl Into<String>, en: impl Into<String>) -> Self {
    Self::Localized { ko: ko.into(), en: Some(en.into()) }
  }

  /// The one place a display string is derived from a title.
  /// English falls back to the Korean text when no translation exists.
  pub fn display(&self, locale: Locale) -> &str {
    match (self, locale) {
      (Self::Plain(text), _) => text,
      (Self::Localized { ko, .. }, Locale::Ko) => ko,
      (Self::Localized { ko, en }, Locale::En) => en.as_deref().unwrap_or(ko),
    }
  }

  pub fn ko(&self) -> &str {
    self.display(Locale::Ko)
  }

  pub fn en(&self) -> Option<&str> {
    match self {
      Self::Plain(_) => None,
      Self::Localized { en, .. } => en.as_deref(),
    }
  }

  /// True when `label` names this title, either verbatim or in its hyphenated URL form.
  pub fn matches_label(&self, label: &str) -> bool {
    let ko = self.ko();
    ko == label || hyphenate(ko) == label
  }
}

/// One node of the category tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNode {
  pub id: String,
  pub title: Title,
  pub slug: String,
  /// Extra legacy labels that should redirect to this node's slug.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub aliases: Vec<String>,
  #[serde(rename = "subcategories", skip_serializing_if = "Vec::is_empty")]
  pub children: Vec<Arc<CategoryNode>>,
}

impl CategoryNode {
  pub fn new(id: impl Into<String>, title: Title, slug: impl Into<String>) -> Self {
    Self { id: id.into(), title, slug: slug.into(), aliases: Vec::new(), children: Vec::new() }
  }

  pub fn with_children(mut self, children: Vec<CategoryNode>) -> Self {
    self.children = children.into_iter().map(Arc::new).collect();
    self
  }

  pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.aliases = aliases.into_iter().map(Into::into).collect();
    self
  }

  pub fn child_by_slug(&self, slug: &str) -> Option<&Arc<CategoryNode>> {
    self.children.iter().find(|c| c.slug == slug)
  }
}

/// Collapse whitespace runs into `-`, keeping case ("경제 동향" -> "경제-동향").
pub fn hyphenate(label: &str) -> String {
  whitespace_re().replace_all(label.trim(), "-").into_owned()
}

/// Fallback slug for labels that are not known to the taxonomy.
pub fn slugify(label: &str) -> String {
  hyphenate(label).to_lowercase()
}
