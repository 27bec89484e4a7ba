/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::NewsdeskConfig;

/// Walk upward from `start` to find `newsdesk.toml`, like Cargo.toml discovery
pub fn find_newsdesk_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join("newsdesk.toml");
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("newsdesk.toml not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_newsdesk_config(path: &Path) -> Result<NewsdeskConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: NewsdeskConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid config {}", path.display()))?;
  Ok(config)
}
