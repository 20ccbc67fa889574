//! Crate-wide error types.
//!
//! Library modules return [`Error`] via `thiserror`, while the CLI edge uses
//! `anyhow` for convenient propagation.
//!
//! Most problems inside a document never become errors at all: a missing or
//! unparseable field degrades to an empty value and extraction carries on.
//! The variants here cover what is left:
//!
//! - [`Error::UnsupportedOperation`]: an adapter was asked to produce a record
//!   without a pre-fetched document. Always fatal.
//! - [`Error::Query`]: a selector failed to parse. Raised by the query layer
//!   and swallowed (with a warning) by the record assembler.
//! - I/O, config and registry lookups for the CLI.

use std::path::PathBuf;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Entry point invoked without the document it needs
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A tree query could not be evaluated
    #[error("Invalid query `{selector}`: {message}")]
    Query { selector: String, message: String },

    /// No registered site adapter accepts the URL
    #[error("No site adapter matches {0}")]
    UnknownSite(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file could not be used
    #[error("Cannot read document {path}: {message}")]
    Document { path: PathBuf, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation(message.into())
    }

    pub fn query(selector: impl Into<String>, message: impl ToString) -> Self {
        Self::Query {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    pub fn document(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Document {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}
