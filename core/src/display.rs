//! Row model for one list item.

use chrono::DateTime;
use serde::Serialize;

use crate::types::Article;

/// What one list row shows. `author` is `None` when the row should hide the
/// byline field entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRow {
    pub title: String,
    pub author: Option<String>,
    pub section: String,
    pub date: String,
}

impl From<&Article> for ArticleRow {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            author: article.author.clone(),
            section: article.section.clone(),
            date: format_date(&article.published),
        }
    }
}

/// `2017-06-21T15:10:44Z` becomes `Jun 21, 2017`. Anything that is not
/// RFC 3339 is shown as sent.
pub fn format_date(published: &str) -> String {
    match DateTime::parse_from_rfc3339(published.trim()) {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(_) => published.to_string(),
    }
}
