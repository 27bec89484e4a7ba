/* src/server/adapter/axum/src/handler/page.rs */

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use newsdesk_server::{Locale, NewsdeskError, Resolution, Taxonomy};
use serde::Serialize;

use super::AppState;
use crate::error::AxumError;

#[derive(Serialize)]
struct Crumb {
  title: String,
  url: String,
}

#[derive(Serialize)]
struct ChildLink {
  id: String,
  title: String,
  slug: String,
  url: String,
}

/// Everything a category page template needs, already localized.
#[derive(Serialize)]
struct PageModel<'a> {
  url: String,
  locale: &'static str,
  title: String,
  resolution: &'a Resolution,
  breadcrumb: Vec<Crumb>,
  children: Vec<ChildLink>,
}

fn page_model<'a>(
  taxonomy: &Taxonomy,
  resolution: &'a Resolution,
  locale: Locale,
) -> PageModel<'a> {
  let mut breadcrumb = Vec::with_capacity(resolution.depth());
  let mut path = String::new();
  for node in resolution.chain() {
    path.push('/');
    path.push_str(&node.slug);
    breadcrumb.push(Crumb { title: node.title.display(locale).to_string(), url: path.clone() });
  }

  let url = resolution.url();
  let node = resolution.node();
  let children = node
    .children
    .iter()
    .map(|child| ChildLink {
      id: child.id.clone(),
      title: child.title.display(locale).to_string(),
      slug: child.slug.clone(),
      url: format!("{url}/{}", child.slug),
    })
    .filter(|link| taxonomy.resolve_str(&link.url).is_some())
    .collect();

  PageModel {
    title: node.title.display(locale).to_string(),
    url,
    locale: locale.as_str(),
    resolution,
    breadcrumb,
    children,
  }
}

/// `/{main}`, `/{main}/{sub}` and `/{main}/{sub}/{subsub}`. `?lang=en` switches titles.
pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  Path(params): Path<Vec<(String, String)>>,
  Query(query): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AxumError> {
  let segments: Vec<&str> = params.iter().map(|(_, value)| value.as_str()).collect();
  let resolution = state
    .taxonomy
    .resolve_path(&segments)
    .ok_or_else(|| NewsdeskError::not_found(format!("No category at /{}", segments.join("/"))))?;
  let locale = query.get("lang").and_then(|l| Locale::parse(l)).unwrap_or(state.locale);
  let model = page_model(&state.taxonomy, resolution, locale);
  Ok(axum::Json(serde_json::json!({"ok": true, "data": model})))
}

pub(super) async fn handle_not_found() -> AxumError {
  AxumError(NewsdeskError::not_found("Not found"))
}
