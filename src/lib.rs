//! Release Scribe - turns saved release pages into canonical catalog records.
//!
//! A page goes through three stages:
//! 1. [`document::RawDocument`] parses the HTML once
//! 2. [`extract`] walks each field's ordered fallback queries and normalizes
//!    the winner
//! 3. the assembler folds the values into a [`record::CanonicalRecord`],
//!    filling defaults so every key is present
//!
//! Site adapters in [`sites`] own the per-site queries and the URL ↔
//! identifier mapping; [`sites::SiteRegistry`] picks an adapter for a URL.
//!
//! # Example
//!
//! ```ignore
//! use release_scribe::document::RawDocument;
//! use release_scribe::sites::{RateYourMusic, SiteAdapter};
//!
//! let doc = RawDocument::parse(&html);
//! let record = RateYourMusic::new().scrape(Some(&doc))?;
//! println!("{} by {:?}", record.title, record.artist);
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod record;
pub mod sites;
#[cfg(test)]
pub mod test_utils;
