//! Extraction pipeline: field specs → first matching candidate → normalized
//! value → canonical record.
//!
//! # Architecture
//!
//! - **Specs** (`spec.rs`) - static tables describing where each field lives
//! - **Field extractor** (`field.rs`) - ordered fallback chain over queries
//! - **Assembler** (`assemble.rs`) - normalization, defaults and the
//!   per-field failure boundary
//!
//! Site adapters own their spec tables and hand them to an [`Assembler`].

pub mod assemble;
pub mod field;
pub mod spec;

pub use assemble::{Assembler, Value, normalize_match};
pub use field::{Match, first_match};
pub use spec::{Candidate, Field, FieldSpec, Rule};
