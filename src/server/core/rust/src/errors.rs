/* src/server/core/rust/src/errors.rs */

use std::fmt;
use std::path::PathBuf;

/// Failures while loading definition data or talking to a category store.
/// These only happen at boot or during an explicit sync, never per request.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
  #[error("failed to read {}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to parse {}", path.display())]
  Json {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
  #[error("no category definitions found in {}", .0.display())]
  Empty(PathBuf),
  #[error("category store: {0}")]
  Store(String),
  #[error("taxonomy has {0} data problem(s) and strict mode is on")]
  Strict(usize),
}

/// HTTP-facing error: a stable code, a human message and a status.
#[derive(Debug)]
pub struct NewsdeskError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "NOT_FOUND" => 404,
    "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl NewsdeskError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for NewsdeskError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for NewsdeskError {}

impl From<TaxonomyError> for NewsdeskError {
  fn from(err: TaxonomyError) -> Self {
    Self::internal(err.to_string())
  }
}
