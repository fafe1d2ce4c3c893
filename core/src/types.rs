//! Domain records handed to the host.
//!
//! # Design
//! `Article` is the flat record the list view renders. It is defined apart
//! from the Guardian wire format (see `wire`) so the JSON envelope can change
//! shape without touching the FFI surface.

use serde::{Deserialize, Serialize};

/// One news article extracted from a search result entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub section: String,
    /// Contributor name; `None` when the entry carries no contributor tag.
    pub author: Option<String>,
    /// Publication timestamp exactly as the API sent it.
    pub published: String,
    pub url: String,
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchPage {
    pub articles: Vec<Article>,
    pub total: u64,
    pub current_page: u32,
    pub pages: u32,
}

impl SearchPage {
    pub fn has_next(&self) -> bool {
        self.current_page < self.pages
    }
}
