/* src/cli/core/src/inspect.rs */

use std::path::Path;

use anyhow::{Context, Result, bail};
use newsdesk_server::{
  CategoryRef, Locale, RedirectDecision, Redirector, Resolution, Taxonomy,
};

use crate::config::NewsdeskConfig;
use crate::{taxonomy, ui};

pub fn run_tree(config: &NewsdeskConfig, base_dir: &Path) -> Result<()> {
  let tax = taxonomy::load(config, base_dir)?;
  print!("{}", render_tree(&tax, config.server.locale));
  Ok(())
}

/// One line per node in pre-order, indented by depth.
fn render_tree(tax: &Taxonomy, locale: Locale) -> String {
  let mut out = String::new();
  for resolution in tax.nodes() {
    let indent = "  ".repeat(resolution.depth() - 1);
    let title = resolution.node().title.display(locale);
    out.push_str(&format!("{indent}{title}  {}\n", resolution.url()));
  }
  out
}

pub fn run_paths(config: &NewsdeskConfig, base_dir: &Path, json: bool) -> Result<()> {
  let tax = taxonomy::load(config, base_dir)?;
  let params = tax.enumerate_static_paths();
  if json {
    let out = serde_json::to_string_pretty(&params).context("failed to serialize static params")?;
    println!("{out}");
    return Ok(());
  }
  for p in &params {
    println!("{}/{}", p.main_category, p.subcategory);
  }
  Ok(())
}

pub fn run_resolve(config: &NewsdeskConfig, base_dir: &Path, path: &str) -> Result<()> {
  let tax = taxonomy::load(config, base_dir)?;
  let Some(resolution) = tax.resolve_str(path) else {
    ui::fail(&format!("no category at {path}"));
    bail!("unresolved path {path}");
  };
  print_resolution(resolution, config.server.locale);
  Ok(())
}

fn print_resolution(resolution: &Resolution, locale: Locale) {
  ui::ok(&resolution.url());
  for node in resolution.chain() {
    ui::detail(&format!("{}  ({}, id {})", node.title.display(locale), node.slug, node.id));
  }
}

pub fn run_redirect(config: &NewsdeskConfig, base_dir: &Path, raw: &str) -> Result<()> {
  let tax = taxonomy::load(config, base_dir)?;
  let redirector = Redirector::new(tax, config.redirect.clone());
  let (path, query) = match raw.split_once('?') {
    Some((path, query)) => (path, Some(query)),
    None => (raw, None),
  };
  match redirector.decide(path, query) {
    RedirectDecision::PassThrough => ui::arrow(&format!("{raw} passes through")),
    RedirectDecision::Redirect { location, reason } => {
      ui::ok(&format!("308 {raw} -> {location}"));
      ui::detail(&format!("reason: {reason:?}"));
    }
  }
  Ok(())
}

pub fn run_url(
  config: &NewsdeskConfig,
  base_dir: &Path,
  category: &str,
  sub: Option<&str>,
  subsub: Option<&str>,
) -> Result<()> {
  let tax = taxonomy::load(config, base_dir)?;
  let url = tax.build_url(category, sub.map(CategoryRef::from), subsub.map(CategoryRef::from));
  println!("{url}");
  if tax.resolve_str(&url).is_none() {
    ui::warn(&format!("{url} does not resolve to a known category"));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use newsdesk_server::{CategoryNode, Title};

  use super::*;

  #[test]
  fn tree_is_indented_by_depth() {
    let tax = Taxonomy::from_nodes(vec![
      CategoryNode::new("marketing", Title::localized("마케팅 동향", "Marketing"), "marketing")
        .with_children(vec![
          CategoryNode::new("btl", Title::localized("BTL", "BTL"), "btl").with_children(vec![
            CategoryNode::new(
              "influencer-marketing",
              Title::localized("인플루언서 마케팅", "Influencer Marketing"),
              "influencer-marketing",
            ),
          ]),
        ]),
    ]);
    assert_eq!(
      render_tree(&tax, Locale::En),
      concat!(
        "Marketing  /marketing\n",
        "  BTL  /marketing/btl\n",
        "    Influencer Marketing  /marketing/btl/influencer-marketing\n",
      )
    );
  }
}
