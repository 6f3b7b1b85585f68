//! Normalisation of list responses.
//!
//! List endpoints answer either with a bare JSON array or with a paginated
//! envelope `{ count, next, previous, results }`. [`Listing`] accepts both and
//! is resolved once at the client boundary so callers only ever see items.

use serde::Deserialize;

/// One page of a paginated list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages
    pub count: u64,
    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// True when another page follows this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Either shape a list endpoint may return.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    /// Paginated envelope
    Paginated(Page<T>),
    /// Bare JSON array
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    /// The items, whatever the shape.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated(page) => page.results,
            Self::Plain(items) => items,
        }
    }

    /// Views the listing as a page; a plain list is a single complete page.
    #[must_use]
    pub fn into_page(self) -> Page<T> {
        match self {
            Self::Paginated(page) => page,
            Self::Plain(items) => Page {
                count: items.len() as u64,
                next: None,
                previous: None,
                results: items,
            },
        }
    }
}
