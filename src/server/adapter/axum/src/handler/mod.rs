/* src/server/adapter/axum/src/handler/mod.rs */

mod category;
mod page;
mod redirect;

use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use newsdesk_server::{Locale, NewsdeskParts, Redirector, Taxonomy};

pub(crate) struct AppState {
  pub taxonomy: Arc<Taxonomy>,
  pub redirector: Arc<Redirector>,
  pub locale: Locale,
}

pub(crate) fn build_router(parts: NewsdeskParts) -> Router {
  let state = Arc::new(AppState {
    taxonomy: parts.taxonomy,
    redirector: parts.redirector,
    locale: parts.locale,
  });

  // The redirect layer goes on last so it also sees paths that only the
  // fallback would match (misplaced leaves deeper than three segments).
  Router::new()
    .route("/api/categories", get(category::handle_list))
    .route("/api/categories/{id}", get(category::handle_get))
    .route("/api/static-params", get(category::handle_static_params))
    .route("/{main}", get(page::handle_page))
    .route("/{main}/{sub}", get(page::handle_page))
    .route("/{main}/{sub}/{subsub}", get(page::handle_page))
    .fallback(page::handle_not_found)
    .layer(from_fn_with_state(state.clone(), redirect::redirect_legacy))
    .with_state(state)
}
