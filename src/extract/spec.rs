//! Field specifications: where to look for each logical field, in order of
//! confidence, and how to normalize what is found.

use crate::document::Query;

/// Logical fields of a release record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Artist,
    Genre,
    ReleaseDate,
    TrackList,
    Duration,
    CoverImageUrl,
    Description,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Artist => "artist",
            Field::Genre => "genre",
            Field::ReleaseDate => "release_date",
            Field::TrackList => "track_list",
            Field::Duration => "duration",
            Field::CoverImageUrl => "cover_image_url",
            Field::Description => "description",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How raw matches become a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// First non-blank match, possibly split into artist and title
    Title,
    /// First non-blank match, tagged with its language
    LocalizedText,
    /// First non-blank match, verbatim after trimming
    FirstText,
    /// Trimmed, deduplicated set
    Set,
    /// Fragments joined and parsed as a date
    Date,
    /// Numbered list in document order
    Ordinal,
    /// Running time in seconds
    Duration,
}

/// One query in a field's fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub query: Query,
    /// Matches look like `"Artist - Title"`
    pub splits_artist: bool,
}

impl Candidate {
    pub const fn new(query: Query) -> Self {
        Self {
            query,
            splits_artist: false,
        }
    }

    pub const fn splitting_artist(mut self) -> Self {
        self.splits_artist = true;
        self
    }
}

/// Ordered candidates plus a normalization rule for one field.
///
/// Earlier candidates strictly outrank later ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub candidates: Vec<Candidate>,
    pub rule: Rule,
}

impl FieldSpec {
    pub fn new(field: Field, rule: Rule, candidates: impl IntoIterator<Item = Candidate>) -> Self {
        Self {
            field,
            rule,
            candidates: candidates.into_iter().collect(),
        }
    }
}
