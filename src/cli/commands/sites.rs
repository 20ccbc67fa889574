//! URL and identifier conversion commands.

use crate::config::Config;
use crate::error::Error;
use crate::sites::{SiteName, SiteRegistry};

/// Print the site and identifier a URL resolves to
pub fn cmd_resolve(config: &Config, url: &str) -> anyhow::Result<()> {
    let registry = SiteRegistry::with_defaults(&config.extraction);
    let resolved = registry.resolve(url)?;
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

/// Print the canonical URL for an identifier
pub fn cmd_url(config: &Config, site: SiteName, identifier: &str) -> anyhow::Result<()> {
    let registry = SiteRegistry::with_defaults(&config.extraction);
    let adapter = registry
        .by_site(site)
        .ok_or_else(|| Error::UnknownSite(site.to_string()))?;
    println!("{}", adapter.id_to_url(identifier.trim()));
    Ok(())
}
