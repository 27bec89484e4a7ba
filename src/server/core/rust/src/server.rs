/* src/server/core/rust/src/server.rs */

use std::sync::Arc;

use crate::errors::TaxonomyError;
use crate::node::Locale;
use crate::redirect::{RedirectConfig, Redirector};
use crate::resolve::Taxonomy;

/// Framework-agnostic parts extracted from `NewsdeskServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct NewsdeskParts {
  pub taxonomy: Arc<Taxonomy>,
  pub redirector: Arc<Redirector>,
  pub locale: Locale,
}

pub struct NewsdeskServer {
  taxonomy: Arc<Taxonomy>,
  redirect: RedirectConfig,
  locale: Locale,
  strict: bool,
}

impl NewsdeskServer {
  pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
    Self { taxonomy, redirect: RedirectConfig::default(), locale: Locale::default(), strict: false }
  }

  pub fn redirect_config(mut self, config: RedirectConfig) -> Self {
    self.redirect = config;
    self
  }

  /// Language used for titles in page models.
  pub fn locale(mut self, locale: Locale) -> Self {
    self.locale = locale;
    self
  }

  /// Refuse to start when the taxonomy produced diagnostics.
  pub fn strict(mut self, strict: bool) -> Self {
    self.strict = strict;
    self
  }

  /// Consume the builder, returning framework-agnostic parts for an adapter.
  pub fn into_parts(self) -> Result<NewsdeskParts, TaxonomyError> {
    let problems = self.taxonomy.diagnostics().len();
    if self.strict && problems > 0 {
      return Err(TaxonomyError::Strict(problems));
    }
    let redirector = Arc::new(Redirector::new(Arc::clone(&self.taxonomy), self.redirect));
    Ok(NewsdeskParts { taxonomy: self.taxonomy, redirector, locale: self.locale })
  }
}
