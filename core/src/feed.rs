//! View-model behind the article list screen.
//!
//! # Design
//! `ArticleFeed` is what the list adapter and the loading/empty indicators
//! bind to. The host calls `begin_refresh` when it starts the background
//! GET, then `apply` with whatever the parse produced. Results always
//! replace the list; they are never appended.

use url::Url;

use crate::display::ArticleRow;
use crate::error::{ApiError, FeedError};
use crate::types::Article;

/// Why the list is showing its empty view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    NoArticles,
    NoConnection,
    Failed(String),
}

impl EmptyReason {
    pub fn message(&self) -> String {
        match self {
            EmptyReason::NoArticles => "No articles found.".to_string(),
            EmptyReason::NoConnection => "No internet connection.".to_string(),
            EmptyReason::Failed(msg) => msg.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    /// Nothing requested yet; the screen is blank.
    Idle,
    Loading,
    Ready,
    Empty(EmptyReason),
}

#[derive(Debug, Clone)]
pub struct ArticleFeed {
    state: FeedState,
    articles: Vec<Article>,
}

impl Default for ArticleFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleFeed {
    pub fn new() -> Self {
        Self {
            state: FeedState::Idle,
            articles: Vec::new(),
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FeedState::Loading
    }

    /// Marks a fetch as in flight. Articles already on screen stay visible
    /// until the result arrives.
    pub fn begin_refresh(&mut self) {
        self.state = FeedState::Loading;
    }

    /// The host found no usable network; nothing was fetched.
    pub fn mark_offline(&mut self) {
        self.articles.clear();
        self.state = FeedState::Empty(EmptyReason::NoConnection);
    }

    pub fn apply(&mut self, result: Result<Vec<Article>, ApiError>) {
        match result {
            Ok(articles) if articles.is_empty() => {
                self.articles.clear();
                self.state = FeedState::Empty(EmptyReason::NoArticles);
            }
            Ok(articles) => {
                self.articles = articles;
                self.state = FeedState::Ready;
            }
            Err(err) => {
                self.articles.clear();
                self.state = FeedState::Empty(EmptyReason::Failed(err.to_string()));
            }
        }
    }

    /// Drops everything, as when the screen's loader is torn down.
    pub fn reset(&mut self) {
        self.articles.clear();
        self.state = FeedState::Idle;
    }

    /// Text for the empty view, if it is showing.
    pub fn empty_message(&self) -> Option<String> {
        match &self.state {
            FeedState::Empty(reason) => Some(reason.message()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, index: usize) -> Option<&Article> {
        self.articles.get(index)
    }

    pub fn row(&self, index: usize) -> Option<ArticleRow> {
        self.get(index).map(ArticleRow::from)
    }

    pub fn rows(&self) -> Vec<ArticleRow> {
        self.articles.iter().map(ArticleRow::from).collect()
    }

    /// URL to hand to an external browser for the item at `index`.
    pub fn open(&self, index: usize) -> Result<Url, FeedError> {
        let article = self.get(index).ok_or(FeedError::OutOfRange {
            index,
            len: self.len(),
        })?;
        let url = Url::parse(article.url.trim())
            .map_err(|_| FeedError::BadUrl(article.url.clone()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(FeedError::BadUrl(article.url.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, url: &str) -> Article {
        Article {
            title: title.to_string(),
            section: "Politics".to_string(),
            author: None,
            published: "2017-06-21T15:10:44Z".to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn starts_idle_and_blank() {
        let feed = ArticleFeed::new();
        assert_eq!(feed.state(), &FeedState::Idle);
        assert!(feed.is_empty());
        assert!(feed.empty_message().is_none());
    }

    #[test]
    fn refresh_keeps_current_items_until_result() {
        let mut feed = ArticleFeed::new();
        feed.apply(Ok(vec![article("A", "https://a.example")]));
        feed.begin_refresh();
        assert!(feed.is_loading());
        assert_eq!(feed.len(), 1);
    }

    #[test]
    fn apply_replaces_instead_of_appending() {
        let mut feed = ArticleFeed::new();
        feed.apply(Ok(vec![article("A", "https://a"), article("B", "https://b")]));
        feed.apply(Ok(vec![article("C", "https://c")]));
        assert_eq!(feed.state(), &FeedState::Ready);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.get(0).unwrap().title, "C");
    }

    #[test]
    fn empty_result_shows_no_articles() {
        let mut feed = ArticleFeed::new();
        feed.apply(Ok(vec![article("A", "https://a")]));
        feed.apply(Ok(Vec::new()));
        assert!(feed.is_empty());
        assert_eq!(feed.empty_message().as_deref(), Some("No articles found."));
    }

    #[test]
    fn error_clears_list_and_explains() {
        let mut feed = ArticleFeed::new();
        feed.apply(Ok(vec![article("A", "https://a")]));
        feed.apply(Err(ApiError::Unauthorized));
        assert!(feed.is_empty());
        assert_eq!(feed.empty_message().as_deref(), Some("API key rejected"));
    }

    #[test]
    fn offline_shows_no_connection() {
        let mut feed = ArticleFeed::new();
        feed.begin_refresh();
        feed.mark_offline();
        assert!(!feed.is_loading());
        assert_eq!(
            feed.empty_message().as_deref(),
            Some("No internet connection.")
        );
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut feed = ArticleFeed::new();
        feed.apply(Ok(vec![article("A", "https://a")]));
        feed.reset();
        assert_eq!(feed.state(), &FeedState::Idle);
        assert!(feed.is_empty());
    }

    #[test]
    fn open_validates_url() {
        let mut feed = ArticleFeed::new();
        feed.apply(Ok(vec![
            article("Good", "https://www.theguardian.com/politics/x"),
            article("Bad", "not a url"),
            article("Script", "javascript:alert(1)"),
        ]));
        assert_eq!(
            feed.open(0).unwrap().as_str(),
            "https://www.theguardian.com/politics/x"
        );
        assert!(matches!(feed.open(1), Err(FeedError::BadUrl(_))));
        assert!(matches!(feed.open(2), Err(FeedError::BadUrl(_))));
        assert_eq!(
            feed.open(3).unwrap_err(),
            FeedError::OutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn rows_follow_list_order() {
        let mut feed = ArticleFeed::new();
        feed.apply(Ok(vec![article("A", "https://a"), article("B", "https://b")]));
        let titles: Vec<String> = feed.rows().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(feed.row(1).unwrap().date, "Jun 21, 2017");
        assert!(feed.row(2).is_none());
    }
}
