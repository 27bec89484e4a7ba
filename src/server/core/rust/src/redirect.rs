/* src/server/core/rust/src/redirect.rs */

// Legacy URL normalization, run before a request path reaches the resolver.
// Framework-agnostic: adapters turn a `RedirectDecision` into a response.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::resolve::Taxonomy;

/// Rewriting converges in at most three passes (leaf fix, label fix, leaf fix).
const MAX_PASSES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectConfig {
  /// Paths starting with any of these are never rewritten.
  #[serde(default = "default_reserved_prefixes")]
  pub reserved_prefixes: Vec<String>,
}

fn default_reserved_prefixes() -> Vec<String> {
  ["/api", "/_next", "/assets", "/favicon.ico"].into_iter().map(String::from).collect()
}

impl Default for RedirectConfig {
  fn default() -> Self {
    Self { reserved_prefixes: default_reserved_prefixes() }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectReason {
  /// A leaf slug reached through a misplaced, flattened path.
  LeafShortcut,
  /// A localized label used where a slug belongs.
  LegacyLabel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
  PassThrough,
  /// Permanent redirect. `location` is percent-encoded and keeps the query string.
  Redirect { location: String, reason: RedirectReason },
}

impl RedirectDecision {
  pub fn location(&self) -> Option<&str> {
    match self {
      Self::PassThrough => None,
      Self::Redirect { location, .. } => Some(location),
    }
  }
}

pub struct Redirector {
  taxonomy: Arc<Taxonomy>,
  config: RedirectConfig,
}

impl Redirector {
  pub fn new(taxonomy: Arc<Taxonomy>, config: RedirectConfig) -> Self {
    Self { taxonomy, config }
  }

  pub fn config(&self) -> &RedirectConfig {
    &self.config
  }

  pub fn is_reserved(&self, path: &str) -> bool {
    self.config.reserved_prefixes.iter().any(|p| path.starts_with(p.as_str()))
  }

  /// Decide what to do with a raw (still percent-encoded) request path.
  pub fn decide(&self, path: &str, query: Option<&str>) -> RedirectDecision {
    if self.is_reserved(path) {
      return RedirectDecision::PassThrough;
    }
    let Ok(decoded) = urlencoding::decode(path) else {
      return RedirectDecision::PassThrough;
    };
    let segments: Vec<String> =
      decoded.split('/').filter(|s| !s.is_empty()).map(String::from).collect();
    if segments.is_empty() {
      return RedirectDecision::PassThrough;
    }

    match self.canonicalize(&segments) {
      Some((canonical, reason)) => {
        RedirectDecision::Redirect { location: encode_location(&canonical, query), reason }
      }
      None => RedirectDecision::PassThrough,
    }
  }

  /// Rewrite decoded segments until stable. Returns `None` when nothing changed,
  /// otherwise the canonical segments and the first rule that fired.
  pub fn canonicalize(&self, segments: &[String]) -> Option<(Vec<String>, RedirectReason)> {
    let mut current = segments.to_vec();
    let mut first_reason = None;
    for _ in 0..MAX_PASSES {
      let Some((next, reason)) = self.rewrite_once(&current) else {
        break;
      };
      first_reason = first_reason.or(Some(reason));
      current = next;
    }
    first_reason.map(|reason| (current, reason))
  }

  fn rewrite_once(&self, segments: &[String]) -> Option<(Vec<String>, RedirectReason)> {
    if let Some(canonical) = self.leaf_shortcut(segments) {
      return Some((canonical, RedirectReason::LeafShortcut));
    }
    self.replace_labels(segments).map(|rewritten| (rewritten, RedirectReason::LegacyLabel))
  }

  /// Three or more segments ending in a known leaf slug that is not at its registered place.
  fn leaf_shortcut(&self, segments: &[String]) -> Option<Vec<String>> {
    if segments.len() < 3 {
      return None;
    }
    let last = segments.last()?;
    let canonical = self.taxonomy.maps().leaf_path(last)?;
    let canonical: Vec<String> =
      canonical.split('/').filter(|s| !s.is_empty()).map(String::from).collect();
    (canonical != segments).then_some(canonical)
  }

  /// Swap localized labels for slugs, each segment looked up under its rewritten parent.
  fn replace_labels(&self, segments: &[String]) -> Option<Vec<String>> {
    let mut rewritten: Vec<String> = Vec::with_capacity(segments.len());
    let mut modified = false;
    for segment in segments {
      let parent = (!rewritten.is_empty()).then(|| rewritten.join("/"));
      let replacement = self.taxonomy.legacy_slug(segment, parent.as_deref()).map(String::from);
      match replacement {
        Some(slug) if slug != *segment => {
          modified = true;
          rewritten.push(slug);
        }
        _ => rewritten.push(segment.clone()),
      }
    }
    modified.then_some(rewritten)
  }
}

fn encode_location(segments: &[String], query: Option<&str>) -> String {
  let mut location = String::new();
  for segment in segments {
    location.push('/');
    location.push_str(&urlencoding::encode(segment));
  }
  if let Some(q) = query.filter(|q| !q.is_empty()) {
    location.push('?');
    location.push_str(q);
  }
  location
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::node::{CategoryNode, Title};

  fn leaf(slug: &str, ko: &str) -> CategoryNode {
    CategoryNode::new(slug, Title::localized(ko, slug), slug)
  }

  fn redirector() -> Redirector {
    let taxonomy = Taxonomy::from_nodes(vec![
      CategoryNode::new("report", Title::localized("리포트", "Report"), "report")
        .with_children(vec![leaf("ha-raw-material", "HA원료")]),
      CategoryNode::new(
        "economic-trends",
        Title::localized("경제 동향", "Economic Trends"),
        "economic-trends",
      )
      .with_children(vec![
        leaf("private-consumption", "민간소비"),
        leaf("government-spending", "정부지출")
          .with_children(vec![leaf("infrastructure-investment", "시설투자")]),
      ]),
      CategoryNode::new("industry", Title::localized("산업 동향", "Industry"), "industry")
        .with_children(vec![leaf("industry-medical", "의료").with_aliases(["산업_의료"])]),
      CategoryNode::new("company", Title::localized("기업 동향", "Company"), "company")
        .with_children(vec![leaf("company-medical", "의료")]),
    ]);
    Redirector::new(Arc::new(taxonomy), RedirectConfig::default())
  }

  fn encoded(path: &str) -> String {
    path.split('/').map(|s| urlencoding::encode(s).into_owned()).collect::<Vec<_>>().join("/")
  }

  #[test]
  fn reserved_prefixes_pass_through() {
    let r = redirector();
    assert_eq!(r.decide("/api/%EA%B2%BD%EC%A0%9C", None), RedirectDecision::PassThrough);
    assert_eq!(r.decide("/_next/static/x/y/ha-raw-material", None), RedirectDecision::PassThrough);
    assert_eq!(r.decide("/favicon.ico", None), RedirectDecision::PassThrough);
  }

  #[test]
  fn root_and_canonical_paths_pass_through() {
    let r = redirector();
    assert_eq!(r.decide("/", None), RedirectDecision::PassThrough);
    assert_eq!(
      r.decide("/economic-trends/private-consumption", None),
      RedirectDecision::PassThrough
    );
    assert_eq!(
      r.decide("/economic-trends/government-spending/infrastructure-investment", None),
      RedirectDecision::PassThrough
    );
  }

  #[test]
  fn korean_label_redirects_to_slug() {
    let r = redirector();
    let decision = r.decide(&encoded("/경제-동향/private-consumption"), None);
    assert_eq!(
      decision,
      RedirectDecision::Redirect {
        location: "/economic-trends/private-consumption".into(),
        reason: RedirectReason::LegacyLabel,
      }
    );
  }

  #[test]
  fn label_with_space_redirects() {
    let r = redirector();
    let decision = r.decide("/%EA%B2%BD%EC%A0%9C%20%EB%8F%99%ED%96%A5", None);
    assert_eq!(decision.location(), Some("/economic-trends"));
  }

  #[test]
  fn misplaced_leaf_redirects_to_registered_path() {
    let r = redirector();
    let decision = r.decide("/report/report/ha-raw-material", None);
    assert_eq!(
      decision,
      RedirectDecision::Redirect {
        location: "/report/ha-raw-material".into(),
        reason: RedirectReason::LeafShortcut,
      }
    );
    assert_eq!(
      r.decide("/industry/x/y/ha-raw-material", None).location(),
      Some("/report/ha-raw-material")
    );
  }

  #[test]
  fn two_segment_leaf_is_left_alone() {
    let r = redirector();
    assert_eq!(r.decide("/report/ha-raw-material", None), RedirectDecision::PassThrough);
    assert_eq!(
      r.decide("/economic-trends/infrastructure-investment", None),
      RedirectDecision::PassThrough
    );
  }

  #[test]
  fn label_and_leaf_rules_combine_into_one_redirect() {
    let r = redirector();
    let decision = r.decide(&encoded("/a/b/산업_의료"), None);
    assert_eq!(
      decision,
      RedirectDecision::Redirect {
        location: "/industry/industry-medical".into(),
        reason: RedirectReason::LegacyLabel,
      }
    );
  }

  #[test]
  fn contextual_labels_follow_parent() {
    let r = redirector();
    let company = r.decide(&encoded("/기업 동향/의료"), None);
    assert_eq!(company.location(), Some("/company/company-medical"));
    let industry = r.decide(&encoded("/industry/의료"), None);
    assert_eq!(industry.location(), Some("/industry/industry-medical"));
  }

  #[test]
  fn unknown_segments_are_kept_and_encoded() {
    let r = redirector();
    let decision = r.decide(&encoded("/경제 동향/모름"), None);
    assert_eq!(decision.location(), Some(encoded("/economic-trends/모름").as_str()));
  }

  #[test]
  fn query_string_is_preserved() {
    let r = redirector();
    let decision = r.decide(&encoded("/리포트"), Some("page=2"));
    assert_eq!(decision.location(), Some("/report?page=2"));
  }

  #[test]
  fn undecodable_path_passes_through() {
    let r = redirector();
    assert_eq!(r.decide("/%FF%FE/ha-raw-material/x", None), RedirectDecision::PassThrough);
  }

  #[test]
  fn redirect_is_idempotent() {
    let r = redirector();
    let inputs = [
      "/경제-동향/private-consumption",
      "/report/report/ha-raw-material",
      "/a/b/산업_의료",
      "/x/y/시설투자",
      "/경제 동향/정부지출/시설투자",
      "/기업 동향/의료/모름",
      "/unknown/path",
    ];
    for input in inputs {
      let first = r.decide(&encoded(input), None);
      let Some(location) = first.location() else {
        continue;
      };
      assert_eq!(r.decide(location, None), RedirectDecision::PassThrough, "{input} -> {location}");
    }
  }

  #[test]
  fn custom_reserved_prefixes() {
    let taxonomy = Arc::new(Taxonomy::from_nodes(vec![CategoryNode::new(
      "report",
      Title::localized("리포트", "Report"),
      "report",
    )]));
    let r = Redirector::new(taxonomy, RedirectConfig { reserved_prefixes: vec!["/admin".into()] });
    assert_eq!(r.decide(&encoded("/admin/리포트"), None), RedirectDecision::PassThrough);
    assert_eq!(r.decide(&encoded("/리포트"), None).location(), Some("/report"));
  }
}
