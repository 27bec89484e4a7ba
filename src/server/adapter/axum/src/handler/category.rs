/* src/server/adapter/axum/src/handler/category.rs */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use newsdesk_server::NewsdeskError;

use super::AppState;
use crate::error::AxumError;

pub(super) async fn handle_list(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  axum::Json(serde_json::json!({"ok": true, "data": state.taxonomy.all_categories()}))
}

pub(super) async fn handle_get(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<impl IntoResponse, AxumError> {
  let node = state
    .taxonomy
    .get_by_id(&id)
    .ok_or_else(|| NewsdeskError::not_found(format!("Category '{id}' not found")))?;
  Ok(axum::Json(serde_json::json!({"ok": true, "data": node})))
}

pub(super) async fn handle_static_params(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  axum::Json(serde_json::json!({"ok": true, "data": state.taxonomy.enumerate_static_paths()}))
}
