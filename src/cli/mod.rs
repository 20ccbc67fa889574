//! Command-line interface for release-scribe.
//!
//! Extracts records from saved HTML pages and exposes the URL ↔ identifier
//! mapping for scripting.

mod commands;

pub use commands::{Cli, Commands, run_command};
