//! Site adapters - one per source website.
//!
//! An adapter knows three things about its site: which URLs belong to it,
//! how to convert between those URLs and catalog identifiers, and where the
//! metadata sits in a fetched page. Fetching itself happens elsewhere; an
//! adapter only ever sees a document that has already been downloaded.
//!
//! Adapters are looked up through the explicit [`SiteRegistry`] table.

pub mod rateyourmusic;
pub mod registry;

use regex::Regex;
use serde::Serialize;

use crate::document::RawDocument;
use crate::error::{Error, Result};
use crate::record::CanonicalRecord;

pub use rateyourmusic::RateYourMusic;
pub use registry::{Resolved, SiteRegistry};

/// Websites with an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
pub enum SiteName {
    #[serde(rename = "rateyourmusic")]
    #[value(name = "rateyourmusic")]
    RateYourMusic,
}

impl std::fmt::Display for SiteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteName::RateYourMusic => f.write_str("rateyourmusic"),
        }
    }
}

/// Kinds of catalog identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IdType {
    #[serde(rename = "rateyourmusic_album")]
    RateYourMusicAlbum,
}

/// Contract between a site and the registry.
pub trait SiteAdapter: Send + Sync {
    fn site(&self) -> SiteName;

    fn id_type(&self) -> IdType;

    /// Patterns for URLs this adapter accepts, tried in order
    fn url_patterns(&self) -> &[Regex];

    /// Canonical URL for an identifier. Total: any string is accepted.
    fn id_to_url(&self, id: &str) -> String;

    /// Identifier for a URL, or `None` if the URL is not this site's shape.
    fn url_to_id(&self, url: &str) -> Option<String>;

    /// Build a record from an already-fetched page.
    fn extract(&self, document: &RawDocument) -> CanonicalRecord;

    /// Build a record, insisting on a pre-fetched document.
    ///
    /// Adapters cannot fetch pages themselves, so calling this without a
    /// document is an integration error rather than a degraded result.
    fn scrape(&self, prefetched: Option<&RawDocument>) -> Result<CanonicalRecord> {
        match prefetched {
            Some(document) => Ok(self.extract(document)),
            None => Err(Error::unsupported(format!(
                "{} pages must be fetched by the caller (e.g. in the user's browser) \
                 and passed in as a document",
                self.site()
            ))),
        }
    }

    fn matches(&self, url: &str) -> bool {
        let url = without_query(url);
        self.url_patterns().iter().any(|re| re.is_match(url))
    }
}

/// Drop the query string and fragment; identifiers never carry them.
pub(crate) fn without_query(url: &str) -> &str {
    let url = url.trim();
    url.find(['?', '#']).map_or(url, |i| &url[..i])
}
