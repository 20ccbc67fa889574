//! RateYourMusic album pages.
//!
//! RYM sits behind Cloudflare, so pages are loaded in the user's browser and
//! the HTML is handed to us. Calling [`SiteAdapter::scrape`] without that
//! document is an error.
//!
//! Metadata comes from OpenGraph tags first (they are stable across layout
//! changes) and from body selectors second. The OpenGraph title reads
//! `"Artist - Album"`, which also makes it the most reliable artist source.

use std::sync::LazyLock;

use regex::Regex;

use super::{IdType, SiteAdapter, SiteName, without_query};
use crate::config::ExtractionConfig;
use crate::document::{Query, RawDocument};
use crate::extract::{Assembler, Candidate, Field, FieldSpec, Rule};
use crate::record::CanonicalRecord;

const ALBUM_URL_PREFIX: &str = "https://rateyourmusic.com/release/album/";

static URL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^https?://(?:www\.)?rateyourmusic\.com/release/album/([\w\-]+)/([\w\-]+)/?$",
        r"^https?://(?:www\.)?rateyourmusic\.com/release/album/([\w\-]+)/([\w\-]+)/([\w\-]+)/?$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rateyourmusic\.com/release/album/(.+?)/?$").unwrap());

/// Where each field lives on an album page, most trustworthy source first.
pub static FIELD_SPECS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
    vec![
        FieldSpec::new(
            Field::Title,
            Rule::Title,
            [
                Candidate::new(Query::Attr("meta[property='og:title']", "content"))
                    .splitting_artist(),
                Candidate::new(Query::Text("title")),
            ],
        ),
        FieldSpec::new(
            Field::CoverImageUrl,
            Rule::FirstText,
            [Candidate::new(Query::Attr("meta[property='og:image']", "content"))],
        ),
        FieldSpec::new(
            Field::Artist,
            Rule::Set,
            [Candidate::new(Query::Text(
                "a.artist, div.album_info a[href*='/artist/']",
            ))],
        ),
        FieldSpec::new(
            Field::ReleaseDate,
            Rule::Date,
            [
                Candidate::new(Query::LabeledCell("Released")),
                Candidate::new(Query::Text("span.release_date")),
            ],
        ),
        FieldSpec::new(
            Field::Genre,
            Rule::Set,
            [Candidate::new(Query::Text(
                "a.genre, div.release_pri_genres a",
            ))],
        ),
        FieldSpec::new(
            Field::TrackList,
            Rule::Ordinal,
            [
                Candidate::new(Query::Text("div.tracklist div.track span.tracklist_title")),
                Candidate::new(Query::Text("div#tracks span.rendered_text")),
            ],
        ),
        FieldSpec::new(
            Field::Duration,
            Rule::Duration,
            [
                Candidate::new(Query::Text("span.tracklist_total")),
                Candidate::new(Query::Attr("meta[property='music:duration']", "content")),
            ],
        ),
        FieldSpec::new(
            Field::Description,
            Rule::LocalizedText,
            [Candidate::new(Query::Attr(
                "meta[property='og:description']",
                "content",
            ))],
        ),
    ]
});

/// Adapter for `rateyourmusic.com/release/album/...` pages
#[derive(Debug, Clone, Default)]
pub struct RateYourMusic {
    options: ExtractionConfig,
}

impl RateYourMusic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExtractionConfig) -> Self {
        Self { options }
    }
}

impl SiteAdapter for RateYourMusic {
    fn site(&self) -> SiteName {
        SiteName::RateYourMusic
    }

    fn id_type(&self) -> IdType {
        IdType::RateYourMusicAlbum
    }

    fn url_patterns(&self) -> &[Regex] {
        &URL_PATTERNS
    }

    /// `"artist/album"` or `"artist/album/version"` → album URL
    fn id_to_url(&self, id: &str) -> String {
        format!("{ALBUM_URL_PREFIX}{id}/")
    }

    fn url_to_id(&self, url: &str) -> Option<String> {
        ID_RE
            .captures(without_query(url))
            .map(|caps| caps[1].trim_end_matches('/').to_string())
            .filter(|id| !id.is_empty())
    }

    fn extract(&self, document: &RawDocument) -> CanonicalRecord {
        Assembler::new(&FIELD_SPECS, &self.options).assemble(document)
    }
}
