/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

#[cfg(test)]
mod tests;

use newsdesk_server::{NewsdeskServer, TaxonomyError};
use tracing::info;

/// Re-export newsdesk-server core for convenience
pub use newsdesk_server;

/// Extension trait that converts a `NewsdeskServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> Result<axum::Router, TaxonomyError>;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for NewsdeskServer {
  fn into_axum_router(self) -> Result<axum::Router, TaxonomyError> {
    let parts = self.into_parts()?;
    Ok(handler::build_router(parts))
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    serve_router(self.into_axum_router()?, addr).await
  }
}

/// Bind `addr` and serve an already assembled router until the process exits.
pub async fn serve_router(
  router: axum::Router,
  addr: &str,
) -> Result<(), Box<dyn std::error::Error>> {
  let listener = tokio::net::TcpListener::bind(addr).await?;
  let local_addr = listener.local_addr()?;
  info!(%local_addr, "newsdesk server listening");
  axum::serve(listener, router).await?;
  Ok(())
}
