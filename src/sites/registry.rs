//! Explicit URL → adapter table.
//!
//! Adapters are registered once at startup, in priority order. Lookups walk
//! the table and return the first adapter whose URL patterns accept the URL.

use serde::Serialize;

use super::{IdType, RateYourMusic, SiteAdapter, SiteName};
use crate::config::ExtractionConfig;
use crate::error::{Error, Result};

/// A URL matched to its adapter and identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub site: SiteName,
    pub id_type: IdType,
    pub identifier: String,
    /// Canonical URL rebuilt from the identifier
    pub url: String,
}

#[derive(Default)]
pub struct SiteRegistry {
    adapters: Vec<Box<dyn SiteAdapter>>,
}

impl SiteRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in adapter
    pub fn with_defaults(options: &ExtractionConfig) -> Self {
        Self::new().register(RateYourMusic::with_options(options.clone()))
    }

    pub fn register(mut self, adapter: impl SiteAdapter + 'static) -> Self {
        self.adapters.push(Box::new(adapter));
        self
    }

    pub fn adapters(&self) -> impl Iterator<Item = &dyn SiteAdapter> {
        self.adapters.iter().map(|a| a.as_ref())
    }

    /// First adapter accepting `url`
    pub fn adapter_for(&self, url: &str) -> Option<&dyn SiteAdapter> {
        self.adapters().find(|a| a.matches(url))
    }

    pub fn by_site(&self, site: SiteName) -> Option<&dyn SiteAdapter> {
        self.adapters().find(|a| a.site() == site)
    }

    pub fn by_id_type(&self, id_type: IdType) -> Option<&dyn SiteAdapter> {
        self.adapters().find(|a| a.id_type() == id_type)
    }

    /// Resolve a URL to its site and identifier.
    pub fn resolve(&self, url: &str) -> Result<Resolved> {
        let adapter = self
            .adapter_for(url)
            .ok_or_else(|| Error::UnknownSite(url.to_string()))?;
        let identifier = adapter
            .url_to_id(url)
            .ok_or_else(|| Error::UnknownSite(url.to_string()))?;
        tracing::debug!(site = %adapter.site(), %identifier, "Resolved URL");

        Ok(Resolved {
            site: adapter.site(),
            id_type: adapter.id_type(),
            url: adapter.id_to_url(&identifier),
            identifier,
        })
    }
}
