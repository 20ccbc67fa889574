//! Parsed HTML documents and the tree queries evaluated against them.
//!
//! A [`RawDocument`] wraps a `scraper::Html` tree. Queries are CSS selector
//! lists plus one table-label lookup that CSS cannot express. Every query
//! yields plain strings in document order; a selector list such as
//! `"a.genre, div.genres a"` is a union in document order.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};

/// One way of locating raw strings in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Descendant text nodes of every element matching the selector
    Text(&'static str),
    /// The named attribute of every element matching the selector
    Attr(&'static str, &'static str),
    /// Text of the `td` cells following a `th` whose text contains the label
    LabeledCell(&'static str),
}

impl Query {
    /// Selector source, for log lines.
    pub fn describe(&self) -> String {
        match self {
            Query::Text(css) => format!("{css} ::text"),
            Query::Attr(css, attr) => format!("{css} @{attr}"),
            Query::LabeledCell(label) => format!("th:contains({label:?}) + td ::text"),
        }
    }
}

/// An already-fetched page, parsed once and queried many times.
pub struct RawDocument {
    html: Html,
}

impl RawDocument {
    /// Parse HTML source. Malformed markup is repaired by the parser, never rejected.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Evaluate a query, returning matched strings untrimmed and in document order.
    pub fn query(&self, query: &Query) -> Result<Vec<String>> {
        match *query {
            Query::Text(css) => {
                let selector = parse_selector(css)?;
                Ok(self
                    .html
                    .select(&selector)
                    .flat_map(|el| el.text())
                    .map(str::to_string)
                    .collect())
            }
            Query::Attr(css, attr) => {
                let selector = parse_selector(css)?;
                Ok(self
                    .html
                    .select(&selector)
                    .filter_map(|el| el.value().attr(attr))
                    .map(str::to_string)
                    .collect())
            }
            Query::LabeledCell(label) => {
                let headers = parse_selector("th")?;
                let mut out = Vec::new();
                for th in self.html.select(&headers) {
                    if !th.text().any(|t| t.contains(label)) {
                        continue;
                    }
                    let cells = th
                        .next_siblings()
                        .filter_map(ElementRef::wrap)
                        .filter(|el| el.value().name() == "td");
                    for cell in cells {
                        out.extend(cell.text().map(str::to_string));
                    }
                }
                Ok(out)
            }
        }
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::query(css, e))
}
