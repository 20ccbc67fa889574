//! Record assembly: run every field spec against a document and fold the
//! normalized values into a [`CanonicalRecord`].
//!
//! Each field runs inside its own failure boundary. A query error is logged
//! and the field stays empty; the remaining fields are still extracted and a
//! record is always returned.

use tracing::{debug, warn};

use super::field::{Match, first_match};
use super::spec::{Field, FieldSpec, Rule};
use crate::config::ExtractionConfig;
use crate::document::RawDocument;
use crate::error::Result;
use crate::normalize::lang::DEFAULT_LANGUAGE;
use crate::normalize::{self, detect_language};
use crate::record::{CanonicalRecord, LocalizedText, UNKNOWN_ALBUM};

/// A normalized field value, ready to be placed in a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Title { artist: Option<String>, title: String },
    Localized(LocalizedText),
    Text(String),
    Set(Vec<String>),
    Date(String),
    TrackList(String),
    Seconds(u32),
}

/// Apply a normalization rule to the winning candidate's matches.
///
/// `None` means the field is absent, e.g. an unparseable date.
pub fn normalize_match(rule: Rule, m: &Match<'_>, options: &ExtractionConfig) -> Option<Value> {
    match rule {
        Rule::Title => {
            let raw = normalize::first_text(&m.values)?;
            let (artist, title) = if m.candidate.splits_artist {
                normalize::split_artist_title(&raw, &options.title_separator)
            } else {
                (None, raw)
            };
            Some(Value::Title { artist, title })
        }
        Rule::LocalizedText => normalize::first_text(&m.values)
            .map(|text| Value::Localized(LocalizedText::new(detect_language(&text), text))),
        Rule::FirstText => normalize::first_text(&m.values).map(Value::Text),
        Rule::Set => {
            let set = normalize::to_set(&m.values);
            (!set.is_empty()).then_some(Value::Set(set))
        }
        Rule::Date => {
            let joined = normalize::join_fragments(&m.values);
            let parsed = normalize::parse_date(&joined);
            if parsed.is_none() {
                debug!(text = %joined, "Unparseable date, leaving release_date empty");
            }
            parsed.map(|d| Value::Date(normalize::format_date(d)))
        }
        Rule::Ordinal => normalize::number_tracks(&m.values).map(Value::TrackList),
        Rule::Duration => normalize::first_text(&m.values)
            .and_then(|t| normalize::parse_duration(&t))
            .map(Value::Seconds),
    }
}

/// Builds records from a fixed table of field specs.
pub struct Assembler<'a> {
    specs: &'a [FieldSpec],
    options: &'a ExtractionConfig,
}

impl<'a> Assembler<'a> {
    pub fn new(specs: &'a [FieldSpec], options: &'a ExtractionConfig) -> Self {
        Self { specs, options }
    }

    /// Best-effort record for `doc`. Never fails.
    pub fn assemble(&self, doc: &RawDocument) -> CanonicalRecord {
        let mut draft = Draft::default();

        for spec in self.specs {
            match self.extract_field(spec, doc) {
                Ok(Some(value)) => draft.apply(spec.field, value),
                Ok(None) => debug!(field = %spec.field, "No value found"),
                Err(e) => warn!(
                    field = %spec.field,
                    error = %e,
                    "Field extraction failed, continuing without it"
                ),
            }
        }

        draft.finish(self.options)
    }

    fn extract_field(&self, spec: &FieldSpec, doc: &RawDocument) -> Result<Option<Value>> {
        Ok(first_match(spec, doc)?.and_then(|m| normalize_match(spec.rule, &m, self.options)))
    }
}

/// Field values collected so far for one document.
#[derive(Debug, Default)]
struct Draft {
    title: Option<String>,
    title_artist: Option<String>,
    artist: Vec<String>,
    genre: Vec<String>,
    release_date: Option<String>,
    track_list: Option<String>,
    duration: Option<u32>,
    cover_image_url: Option<String>,
    description: Option<LocalizedText>,
}

impl Draft {
    fn apply(&mut self, field: Field, value: Value) {
        match (field, value) {
            (Field::Title, Value::Title { artist, title }) => {
                self.title_artist = artist;
                self.title = Some(title);
            }
            (Field::Artist, Value::Set(artists)) => self.artist = artists,
            (Field::Genre, Value::Set(genres)) => self.genre = genres,
            (Field::ReleaseDate, Value::Date(date)) => self.release_date = Some(date),
            (Field::TrackList, Value::TrackList(tracks)) => self.track_list = Some(tracks),
            (Field::Duration, Value::Seconds(secs)) => self.duration = Some(secs),
            (Field::CoverImageUrl, Value::Text(url)) => self.cover_image_url = Some(url),
            (Field::Description, Value::Localized(desc)) => self.description = Some(desc),
            (field, value) => warn!(%field, ?value, "Value does not fit field, ignoring"),
        }
    }

    fn finish(self, options: &ExtractionConfig) -> CanonicalRecord {
        // Artist parsed out of the structured title outranks body anchors
        let artist = match self.title_artist {
            Some(artist) => vec![artist],
            None => self.artist,
        };

        let (title, localized_title) = match self.title {
            Some(title) => {
                let localized = LocalizedText::new(detect_language(&title), title.clone());
                (title, vec![localized])
            }
            None => {
                let fallback = CanonicalRecord::untitled(
                    non_blank(&options.fallback_language).unwrap_or(DEFAULT_LANGUAGE),
                    non_blank(&options.fallback_title).unwrap_or(UNKNOWN_ALBUM),
                );
                (fallback.title, fallback.localized_title)
            }
        };

        CanonicalRecord {
            title,
            localized_title: normalize::uniq(localized_title),
            localized_description: normalize::uniq(self.description),
            artist,
            genre: self.genre,
            release_date: self.release_date,
            track_list: self.track_list,
            duration: self.duration,
            cover_image_url: self.cover_image_url,
        }
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}
