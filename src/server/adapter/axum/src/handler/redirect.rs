/* src/server/adapter/axum/src/handler/redirect.rs */

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use newsdesk_server::RedirectDecision;
use tracing::debug;

use super::AppState;

/// Rewrite legacy category URLs before routing. Canonical paths pass through.
pub(super) async fn redirect_legacy(
  State(state): State<Arc<AppState>>,
  req: Request<Body>,
  next: Next,
) -> Response {
  let uri = req.uri().clone();
  match state.redirector.decide(uri.path(), uri.query()) {
    RedirectDecision::PassThrough => next.run(req).await,
    RedirectDecision::Redirect { location, reason } => {
      debug!(from = %uri, to = %location, ?reason, "legacy category URL");
      Redirect::permanent(&location).into_response()
    }
  }
}
