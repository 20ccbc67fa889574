//! Canonical metadata record produced by every site adapter.
//!
//! These types are OUR types: every adapter converts whatever shape its source
//! page has into a [`CanonicalRecord`], so storage and merge code only ever
//! sees one layout.

use serde::{Deserialize, Serialize};

use crate::normalize::uniq;

/// Title used when a page offers nothing usable.
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// A piece of text tagged with the language it is written in.
///
/// Two entries are the same entry only if both language and text match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedText {
    pub lang: String,
    pub text: String,
}

impl LocalizedText {
    pub fn new(lang: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            text: text.into(),
        }
    }
}

/// Normalized release metadata.
///
/// Every key is always serialized: absent values become `null` and empty sets
/// become `[]`, so downstream mergers can rely on key presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub title: String,
    /// Never empty
    pub localized_title: Vec<LocalizedText>,
    pub localized_description: Vec<LocalizedText>,
    /// Set semantics: no duplicates, order carries no meaning
    pub artist: Vec<String>,
    /// Set semantics: no duplicates, order carries no meaning
    pub genre: Vec<String>,
    /// `YYYY-MM-DD`
    pub release_date: Option<String>,
    /// Newline-joined `"1. Name"` lines in document order
    pub track_list: Option<String>,
    /// Total running time in seconds, always positive when present
    pub duration: Option<u32>,
    pub cover_image_url: Option<String>,
}

impl Default for CanonicalRecord {
    fn default() -> Self {
        Self::untitled("en", UNKNOWN_ALBUM)
    }
}

impl CanonicalRecord {
    /// An otherwise empty record carrying only the fallback title.
    pub fn untitled(lang: &str, title: &str) -> Self {
        Self {
            title: title.to_string(),
            localized_title: vec![LocalizedText::new(lang, title)],
            localized_description: Vec::new(),
            artist: Vec::new(),
            genre: Vec::new(),
            release_date: None,
            track_list: None,
            duration: None,
            cover_image_url: None,
        }
    }

    /// Combine with a record for the same release from another source.
    ///
    /// Scalar fields keep `self`'s value and fill gaps from `other`; sets and
    /// localized texts are unioned with `self`'s entries first.
    pub fn merged(self, other: &CanonicalRecord) -> CanonicalRecord {
        let concat = |a: Vec<String>, b: &[String]| uniq(a.into_iter().chain(b.iter().cloned()));
        let concat_text = |a: Vec<LocalizedText>, b: &[LocalizedText]| {
            uniq(a.into_iter().chain(b.iter().cloned()))
        };

        CanonicalRecord {
            title: self.title,
            localized_title: concat_text(self.localized_title, &other.localized_title),
            localized_description: concat_text(
                self.localized_description,
                &other.localized_description,
            ),
            artist: concat(self.artist, &other.artist),
            genre: concat(self.genre, &other.genre),
            release_date: self.release_date.or_else(|| other.release_date.clone()),
            track_list: self.track_list.or_else(|| other.track_list.clone()),
            duration: self.duration.or(other.duration),
            cover_image_url: self
                .cover_image_url
                .or_else(|| other.cover_image_url.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_has_unknown_title() {
        let record = CanonicalRecord::default();
        assert_eq!(record.title, "Unknown Album");
        assert_eq!(
            record.localized_title,
            vec![LocalizedText::new("en", "Unknown Album")]
        );
    }

    #[test]
    fn test_serialization_keeps_every_key() {
        let json = serde_json::to_value(CanonicalRecord::default()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "title",
            "localized_title",
            "localized_description",
            "artist",
            "genre",
            "release_date",
            "track_list",
            "duration",
            "cover_image_url",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert!(obj["release_date"].is_null());
        assert_eq!(obj["artist"], serde_json::json!([]));
    }

    #[test]
    fn test_merged_fills_gaps_and_unions_sets() {
        let ours = CanonicalRecord {
            artist: vec!["Miles Davis".into()],
            genre: vec!["Jazz".into()],
            release_date: Some("1959-08-17".into()),
            ..CanonicalRecord::untitled("en", "Kind of Blue")
        };
        let theirs = CanonicalRecord {
            artist: vec!["Miles Davis".into(), "John Coltrane".into()],
            genre: vec!["Modal Jazz".into()],
            release_date: Some("1959-01-01".into()),
            cover_image_url: Some("https://img.example/kob.jpg".into()),
            ..CanonicalRecord::untitled("en", "Kind Of Blue")
        };

        let merged = ours.merged(&theirs);

        assert_eq!(merged.title, "Kind of Blue");
        assert_eq!(merged.artist, vec!["Miles Davis", "John Coltrane"]);
        assert_eq!(merged.genre, vec!["Jazz", "Modal Jazz"]);
        assert_eq!(merged.release_date.as_deref(), Some("1959-08-17"));
        assert_eq!(
            merged.cover_image_url.as_deref(),
            Some("https://img.example/kob.jpg")
        );
        assert_eq!(merged.localized_title.len(), 2);
    }
}
