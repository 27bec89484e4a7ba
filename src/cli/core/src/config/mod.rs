/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_newsdesk_config, load_newsdesk_config};
pub use types::NewsdeskConfig;
