//! Stateless request builder and response parser for the Guardian search API.
//!
//! # Design
//! `GuardianClient` holds only the base URL and the API key. Listing is split
//! into `build_search`, which produces an `HttpRequest`, and `parse_search`,
//! which consumes the `HttpResponse` the host got back. Nothing here touches
//! the network, so the mobile shell decides which thread the GET runs on.
//!
//! Parsing is lenient per entry: a result missing one of the required fields
//! is logged and dropped, and the rest of the page still comes through.

use tracing::{debug, warn};
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::query::SearchQuery;
use crate::types::{Article, SearchPage};
use crate::wire::{Envelope, ErrorBody, ResultEntry, Tag};

/// Public Guardian content API host.
pub const DEFAULT_BASE_URL: &str = "https://content.guardianapis.com";

/// Synchronous, stateless client for the Guardian search endpoint.
#[derive(Debug, Clone)]
pub struct GuardianClient {
    base_url: String,
    api_key: String,
}

impl GuardianClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_search(&self, query: &SearchQuery) -> Result<HttpRequest, ApiError> {
        let mut url = Url::parse(&format!("{}/search", self.base_url))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.params() {
                pairs.append_pair(key, &value);
            }
            pairs.append_pair("api-key", &self.api_key);
        }
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: url.into(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        })
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<SearchPage, ApiError> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Err(ApiError::EmptyBody);
        }
        let envelope: Envelope = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        let body = envelope.response;

        if let Some(status) = body.status.as_deref() {
            if status != "ok" {
                return Err(ApiError::Api {
                    status: response.status,
                    message: body.message.unwrap_or_else(|| format!("status {status}")),
                });
            }
        }

        let results = body.results.unwrap_or_default();
        let received = results.len();
        let articles: Vec<Article> = results
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| match extract_article(raw) {
                Ok(article) => Some(article),
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed result entry");
                    None
                }
            })
            .collect();
        debug!(received, kept = articles.len(), "parsed search page");

        Ok(SearchPage {
            total: body.total.unwrap_or(0),
            current_page: body.current_page.unwrap_or(1),
            pages: body.pages.unwrap_or(1),
            articles,
        })
    }

    pub fn parse_articles(&self, response: HttpResponse) -> Result<Vec<Article>, ApiError> {
        self.parse_search(response).map(|page| page.articles)
    }
}

/// Turn one raw result entry into an `Article`.
///
/// The author is the last contributor tag's name; tags with another `type`
/// and blank names are ignored.
fn extract_article(raw: serde_json::Value) -> Result<Article, serde_json::Error> {
    let entry: ResultEntry = serde_json::from_value(raw)?;
    let author = entry
        .tags
        .unwrap_or_default()
        .into_iter()
        .filter_map(|tag| serde_json::from_value::<Tag>(tag).ok())
        .filter(|tag| tag.tag_type.as_deref().map_or(true, |t| t == "contributor"))
        .filter_map(|tag| tag.web_title)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .last();

    Ok(Article {
        title: entry.web_title,
        section: entry.section_name,
        author,
        published: entry.web_publication_date,
        url: entry.web_url,
    })
}

/// Map non-200 status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        401 | 403 => Err(ApiError::Unauthorized),
        status => {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(ErrorBody::into_message);
            Err(match message {
                Some(message) => ApiError::Api { status, message },
                None => ApiError::HttpError {
                    status,
                    body: response.body.clone(),
                },
            })
        }
    }
}
