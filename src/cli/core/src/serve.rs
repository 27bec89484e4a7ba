/* src/cli/core/src/serve.rs */

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use newsdesk_server::NewsdeskServer;
use newsdesk_server_axum::{IntoAxumRouter, serve_router};
use tower_http::services::ServeDir;
use tracing::warn;

use crate::config::NewsdeskConfig;
use crate::{taxonomy, ui};

pub async fn run_serve(config: &NewsdeskConfig, base_dir: &Path, port: Option<u16>) -> Result<()> {
  let tax = taxonomy::load(config, base_dir)?;
  for diagnostic in tax.diagnostics() {
    warn!(%diagnostic, "serving with taxonomy problem");
  }

  let mut router = NewsdeskServer::new(tax)
    .redirect_config(config.redirect.clone())
    .locale(config.server.locale)
    .strict(config.taxonomy.strict)
    .into_axum_router()
    .context("failed to build router")?;
  if let Some(dir) = config.static_dir(base_dir) {
    ui::arrow(&format!("serving {} under /assets", dir.display()));
    router = router.nest_service("/assets", ServeDir::new(dir));
  }

  let addr = match port {
    Some(p) => format!("{}:{p}", config.server.host),
    None => config.bind_addr(),
  };
  ui::ok(&format!("{} listening on http://{addr}", config.project.name));
  serve_router(router, &addr).await.map_err(|e| anyhow!("server error: {e}"))
}
