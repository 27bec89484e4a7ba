/* src/cli/core/src/main.rs */

mod check;
mod config;
mod inspect;
mod serve;
mod sync;
mod taxonomy;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{NewsdeskConfig, find_newsdesk_config, load_newsdesk_config};

#[derive(Parser)]
#[command(name = "newsdesk", about = "Category taxonomy and legacy URL tooling")]
struct Cli {
  /// Path to newsdesk.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Validate the taxonomy and report data problems
  Check,
  /// Print the category tree with canonical URLs
  Tree,
  /// Print every static (mainCategory, subcategory) pair
  Paths {
    /// Emit JSON instead of one pair per line
    #[arg(long)]
    json: bool,
  },
  /// Resolve a canonical path such as /industry/industry-medical
  Resolve { path: String },
  /// Show what the redirect middleware does with a raw request path
  Redirect { path: String },
  /// Build the canonical URL for a category, by id, slug or Korean label
  Url { category: String, sub: Option<String>, subsub: Option<String> },
  /// Push the taxonomy snapshot to the JSON record store
  Sync {
    /// Store file (defaults to sync.store)
    #[arg(long)]
    store: Option<PathBuf>,
    /// Show the plan without writing
    #[arg(long)]
    dry_run: bool,
  },
  /// Run the HTTP server
  Serve {
    #[arg(short, long)]
    port: Option<u16>,
  },
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, NewsdeskConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_newsdesk_config(&cwd)?
    }
  };
  let config = load_newsdesk_config(&path)?;
  Ok((path, config))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing();

  let (config_path, config) = resolve_config(cli.config)?;
  let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

  match cli.command {
    Command::Check => check::run_check(&config, base_dir)?,
    Command::Tree => inspect::run_tree(&config, base_dir)?,
    Command::Paths { json } => inspect::run_paths(&config, base_dir, json)?,
    Command::Resolve { path } => inspect::run_resolve(&config, base_dir, &path)?,
    Command::Redirect { path } => inspect::run_redirect(&config, base_dir, &path)?,
    Command::Url { category, sub, subsub } => {
      inspect::run_url(&config, base_dir, &category, sub.as_deref(), subsub.as_deref())?;
    }
    Command::Sync { store, dry_run } => {
      sync::run_sync(&config, base_dir, store.as_deref(), dry_run)?;
    }
    Command::Serve { port } => serve::run_serve(&config, base_dir, port).await?,
  }

  Ok(())
}
