//! One reader session: a client, the current query, and the feed it fills.

use std::sync::Arc;

use news_core::{ArticleFeed, FeedError, GuardianClient, SearchQuery};
use tracing::{info, warn};
use url::Url;

use crate::transport::{spawn_request, Transport};

pub struct Session {
    client: GuardianClient,
    query: SearchQuery,
    transport: Arc<dyn Transport>,
    feed: ArticleFeed,
    pages: u32,
}

impl Session {
    pub fn new(client: GuardianClient, query: SearchQuery, transport: Arc<dyn Transport>) -> Self {
        Self {
            client,
            query,
            transport,
            feed: ArticleFeed::new(),
            pages: 0,
        }
    }

    pub fn feed(&self) -> &ArticleFeed {
        &self.feed
    }

    pub fn page(&self) -> u32 {
        self.query.page.unwrap_or(1)
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Fetch the current query off the calling thread and replace the feed.
    ///
    /// `on_loading` runs once the feed is in its loading state, before the
    /// result is awaited, so the caller can draw the indicator.
    pub fn refresh(&mut self, on_loading: impl FnOnce(&ArticleFeed)) {
        let req = match self.client.build_search(&self.query) {
            Ok(req) => req,
            Err(e) => {
                self.pages = 0;
                self.feed.apply(Err(e));
                return;
            }
        };

        self.feed.begin_refresh();
        on_loading(&self.feed);

        let rx = spawn_request(Arc::clone(&self.transport), req);
        match rx.recv() {
            Ok(Ok(response)) => {
                let result = self.client.parse_search(response).map(|page| {
                    self.pages = page.pages;
                    page.articles
                });
                if let Err(e) = &result {
                    warn!(error = %e, "search failed");
                    self.pages = 0;
                }
                self.feed.apply(result);
                info!(articles = self.feed.len(), page = self.page(), "feed refreshed");
            }
            Ok(Err(e)) => {
                warn!(error = %e, "no connection");
                self.pages = 0;
                self.feed.mark_offline();
            }
            Err(_) => {
                warn!("request thread exited without a result");
                self.pages = 0;
                self.feed.mark_offline();
            }
        }
    }

    /// Move to the next page if there is one. Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        if self.page() >= self.pages {
            return false;
        }
        self.query.page = Some(self.page() + 1);
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page() <= 1 {
            return false;
        }
        self.query.page = Some(self.page() - 1);
        true
    }

    /// URL for the 1-based list position the user typed.
    pub fn select(&self, position: usize) -> Result<Url, FeedError> {
        match position.checked_sub(1) {
            Some(index) => self.feed.open(index),
            None => Err(FeedError::OutOfRange {
                index: 0,
                len: self.feed.len(),
            }),
        }
    }
}
