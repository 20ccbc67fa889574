//! Pure transforms from raw matched strings to well-typed field values.
//!
//! Nothing here touches a document: input is whatever the field extractor
//! matched, output is a fresh value. Helpers never fail loudly; a value that
//! cannot be normalized comes back as `None` or an empty collection.

pub mod date;
pub mod duration;
pub mod lang;

use std::collections::HashSet;
use std::hash::Hash;

pub use date::{format_date, parse_date};
pub use duration::parse_duration;
pub use lang::detect_language;

/// Deduplicate, keeping the first occurrence of each value in input order.
pub fn uniq<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Trimmed, non-blank entries in their original order.
pub fn clean<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// First trimmed, non-blank entry.
pub fn first_text<S: AsRef<str>>(raw: &[S]) -> Option<String> {
    raw.iter()
        .map(|s| s.as_ref().trim())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Trim, drop blanks, and collapse to a set (artists, genres).
pub fn to_set<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    uniq(clean(raw))
}

/// Render tracks as `"1. Intro\n2. Song A"`, keeping document order.
///
/// Returns `None` when no track survives cleaning.
pub fn number_tracks<S: AsRef<str>>(raw: &[S]) -> Option<String> {
    let tracks = clean(raw);
    if tracks.is_empty() {
        return None;
    }
    Some(
        tracks
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}. {}", i + 1, t))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// Split an `"Artist - Title"` string on the first separator.
///
/// Returns `(artist, title)`; artist is `None` when the separator is missing
/// or either side is blank after trimming.
pub fn split_artist_title(raw: &str, separator: &str) -> (Option<String>, String) {
    let raw = raw.trim();
    match raw.split_once(separator) {
        Some((artist, title)) if !artist.trim().is_empty() && !title.trim().is_empty() => {
            (Some(artist.trim().to_string()), title.trim().to_string())
        }
        _ => (None, raw.to_string()),
    }
}

/// Join non-blank fragments with single spaces (date cells split across tags).
pub fn join_fragments<S: AsRef<str>>(raw: &[S]) -> String {
    clean(raw).join(" ")
}
