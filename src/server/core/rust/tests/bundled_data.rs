/* src/server/core/rust/tests/bundled_data.rs */

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use newsdesk_server::{
  RedirectConfig, RedirectDecision, RedirectReason, Redirector, Taxonomy, TaxonomyStore,
};

fn data_dir() -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../../data/categories")
}

fn taxonomy() -> Arc<Taxonomy> {
  let store = TaxonomyStore::from_dir(&data_dir()).unwrap();
  Arc::new(Taxonomy::build(store))
}

fn encode_path(path: &str) -> String {
  path.split('/').map(|s| urlencoding::encode(s).into_owned()).collect::<Vec<_>>().join("/")
}

#[test]
fn bundled_data_is_clean() {
  let tax = taxonomy();
  assert!(tax.diagnostics().is_empty(), "{:?}", tax.diagnostics());
  let slugs: Vec<&str> =
    tax.all_categories().iter().map(|c| c.slug.as_str()).collect();
  assert_eq!(
    slugs,
    [
      "report",
      "economic-trends",
      "finance",
      "industry",
      "company",
      "policy",
      "media",
      "marketing",
      "people",
      "media-review",
      "schedule",
    ]
  );
}

#[test]
fn ids_are_unique_and_sibling_slugs_distinct() {
  let tax = taxonomy();
  let mut ids = HashSet::new();
  for resolution in tax.nodes() {
    let node = resolution.node();
    assert!(ids.insert(node.id.clone()), "duplicate id {}", node.id);
    let mut slugs = HashSet::new();
    for child in &node.children {
      assert!(slugs.insert(child.slug.as_str()), "duplicate slug {} under {}", child.slug, node.id);
    }
  }
  assert_eq!(ids.len(), tax.maps().len());
}

#[test]
fn build_url_and_resolve_round_trip() {
  let tax = taxonomy();
  let url = tax.build_url("industry", Some("industry-medical".into()), None);
  assert_eq!(url, "/industry/industry-medical");
  let found = tax.resolve_path(&["industry", "industry-medical"]).unwrap();
  assert_eq!(found.category.slug, "industry");
  assert_eq!(found.subcategory.as_ref().unwrap().slug, "industry-medical");

  for node in tax.nodes() {
    let url = tax.build_url(
      &node.category,
      node.subcategory.as_ref().map(Into::into),
      node.subsubcategory.as_ref().map(Into::into),
    );
    assert_eq!(tax.resolve_str(&url), Some(node), "{url}");
  }
}

#[test]
fn unknown_id_is_none() {
  assert!(taxonomy().get_by_id("nonexistent-id").is_none());
}

#[test]
fn static_paths_cover_every_subcategory() {
  let tax = taxonomy();
  let params = tax.enumerate_static_paths();
  let descendants = tax.nodes().filter(|r| r.depth() > 1).count();
  assert_eq!(params.len(), descendants);
  assert_eq!(params.len(), 60);

  let unique: HashSet<_> = params.iter().collect();
  assert_eq!(unique.len(), params.len());
  for p in &params {
    assert!(tax.resolve_static(&p.main_category, &p.subcategory).is_some(), "{p:?}");
  }
  assert!(params.iter().any(|p| p.main_category == "economic-trends"
    && p.subcategory == "infrastructure-investment"));
  assert!(tax.subcategories_of("schedule").unwrap().is_empty());
}

#[test]
fn legacy_korean_path_redirects() {
  let redirector = Redirector::new(taxonomy(), RedirectConfig::default());
  let decision = redirector.decide(&encode_path("/경제-동향/private-consumption"), None);
  assert_eq!(
    decision,
    RedirectDecision::Redirect {
      location: "/economic-trends/private-consumption".into(),
      reason: RedirectReason::LegacyLabel,
    }
  );
}

#[test]
fn misplaced_leaf_redirects_to_report() {
  let redirector = Redirector::new(taxonomy(), RedirectConfig::default());
  for path in ["/report/report/ha-raw-material", "/industry/x/ha-raw-material"] {
    assert_eq!(redirector.decide(path, None).location(), Some("/report/ha-raw-material"));
  }
}

#[test]
fn every_label_converges_to_its_canonical_path() {
  let tax = taxonomy();
  let redirector = Redirector::new(Arc::clone(&tax), RedirectConfig::default());
  for (label, slug) in tax.maps().legacy_labels() {
    let Some(canonical) = tax.nodes().find(|r| r.node().slug == slug).map(|r| r.url()) else {
      panic!("label {label} points at unknown slug {slug}");
    };
    let legacy = match canonical.rsplit_once('/') {
      Some((parent, _)) => format!("{parent}/{label}"),
      None => format!("/{label}"),
    };
    let decision = redirector.decide(&encode_path(&legacy), None);
    assert_eq!(decision.location(), Some(encode_path(&canonical).as_str()), "{legacy}");
  }
}

#[test]
fn contextual_titles_resolve_under_their_parent() {
  let tax = taxonomy();
  let redirector = Redirector::new(Arc::clone(&tax), RedirectConfig::default());
  for (parent, expected) in [
    ("산업 동향", "/industry/industry-medical"),
    ("기업 동향", "/company/company-medical"),
    ("정책 동향", "/policy/policy-medical"),
    ("언론 동향", "/media/media-medical"),
  ] {
    let decision = redirector.decide(&encode_path(&format!("/{parent}/의료")), None);
    assert_eq!(decision.location(), Some(expected));
  }
}

#[test]
fn redirects_are_idempotent_on_bundled_data() {
  let tax = taxonomy();
  let redirector = Redirector::new(Arc::clone(&tax), RedirectConfig::default());
  let mut inputs: Vec<String> = tax.nodes().map(|r| r.url()).collect();
  inputs.extend(tax.maps().legacy_labels().into_iter().map(|(label, _)| format!("/{label}")));
  inputs.extend(
    tax.nodes().filter(|r| r.depth() > 1).map(|r| format!("/a/b/{}", r.node().slug)),
  );
  for input in inputs {
    let first = redirector.decide(&encode_path(&input), Some("page=2"));
    if let Some(location) = first.location() {
      let (path, query) = location.split_once('?').unwrap_or((location, ""));
      assert_eq!(
        redirector.decide(path, Some(query)),
        RedirectDecision::PassThrough,
        "{input} -> {location}"
      );
    }
  }
}
