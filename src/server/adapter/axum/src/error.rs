/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use newsdesk_server::NewsdeskError;
use serde::Serialize;
use tracing::{debug, error};

/// Handler error rendered as `{"ok":false,"error":{code,message}}`.
/// Wraps the core error since neither it nor `IntoResponse` is local here.
pub(crate) struct AxumError(pub NewsdeskError);

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
  ok: bool,
  error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
  code: &'a str,
  message: &'a str,
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = &self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
      error!(code = err.code(), message = err.message(), "request failed");
    } else {
      debug!(code = err.code(), %status, "request rejected");
    }
    let body =
      ErrorEnvelope { ok: false, error: ErrorDetail { code: err.code(), message: err.message() } };
    (status, axum::Json(body)).into_response()
  }
}

impl From<NewsdeskError> for AxumError {
  fn from(err: NewsdeskError) -> Self {
    Self(err)
  }
}
