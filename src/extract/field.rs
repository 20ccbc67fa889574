//! First-non-empty-candidate field extraction.

use tracing::debug;

use super::spec::{Candidate, FieldSpec};
use crate::document::RawDocument;
use crate::error::Result;

/// Raw strings found by the winning candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'s> {
    pub candidate: &'s Candidate,
    /// Untrimmed, in document order; at least one entry is non-blank
    pub values: Vec<String>,
}

/// Walk the candidates in declared order and return the first non-empty match.
///
/// A candidate whose matches are all blank after trimming counts as empty.
/// Query errors propagate unchanged; callers decide how to degrade.
pub fn first_match<'s>(spec: &'s FieldSpec, doc: &RawDocument) -> Result<Option<Match<'s>>> {
    for (index, candidate) in spec.candidates.iter().enumerate() {
        let values = doc.query(&candidate.query)?;
        if values.iter().any(|v| !v.trim().is_empty()) {
            debug!(
                field = %spec.field,
                candidate = index,
                query = %candidate.query.describe(),
                matches = values.len(),
                "Candidate matched"
            );
            return Ok(Some(Match { candidate, values }));
        }
    }
    Ok(None)
}
