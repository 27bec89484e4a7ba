/* src/cli/core/src/config/types.rs */

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use newsdesk_server::{Locale, RedirectConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NewsdeskConfig {
  pub project: ProjectConfig,
  #[serde(default)]
  pub taxonomy: TaxonomySection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub redirect: RedirectConfig,
  #[serde(default)]
  pub sync: SyncSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomySection {
  /// Directory of `*.json` top-level category records, relative to the config file.
  #[serde(default = "default_taxonomy_dir")]
  pub dir: String,
  /// Refuse to serve when the taxonomy has data problems.
  #[serde(default)]
  pub strict: bool,
}

impl Default for TaxonomySection {
  fn default() -> Self {
    Self { dir: default_taxonomy_dir(), strict: false }
  }
}

fn default_taxonomy_dir() -> String {
  "data/categories".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default)]
  pub locale: Locale,
  /// Served under `/assets` when set.
  pub static_dir: Option<String>,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port(), locale: Locale::default(), static_dir: None }
  }
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncSection {
  #[serde(default = "default_store")]
  pub store: String,
}

impl Default for SyncSection {
  fn default() -> Self {
    Self { store: default_store() }
  }
}

fn default_store() -> String {
  ".newsdesk/categories.json".to_string()
}

impl NewsdeskConfig {
  pub fn validate(&self) -> Result<()> {
    if self.server.port == 0 {
      bail!("server.port must not be 0");
    }
    if self.taxonomy.dir.trim().is_empty() {
      bail!("taxonomy.dir must not be empty");
    }
    if let Some(bad) = self.redirect.reserved_prefixes.iter().find(|p| !p.starts_with('/')) {
      bail!("redirect.reserved_prefixes entry \"{bad}\" must start with '/'");
    }
    Ok(())
  }

  pub fn taxonomy_dir(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.taxonomy.dir)
  }

  pub fn store_path(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.sync.store)
  }

  pub fn static_dir(&self, base_dir: &Path) -> Option<PathBuf> {
    self.server.static_dir.as_ref().map(|d| base_dir.join(d))
  }

  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.server.host, self.server.port)
  }
}
