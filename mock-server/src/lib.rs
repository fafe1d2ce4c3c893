use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

pub mod fixture;

use fixture::StoredArticle;

/// Key accepted by `app()`; the binary reads `MOCK_API_KEY` instead.
pub const DEFAULT_API_KEY: &str = "test";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 200;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub id: String,
    #[serde(rename = "type")]
    pub tag_type: String,
    pub web_title: String,
    pub web_url: String,
    pub api_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub section_id: String,
    pub section_name: String,
    pub web_publication_date: String,
    pub web_title: String,
    pub web_url: String,
    pub api_url: String,
    pub is_hosted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Contributor>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub status: String,
    pub user_tier: String,
    pub total: usize,
    pub start_index: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub pages: usize,
    pub order_by: String,
    pub results: Vec<ContentItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchEnvelope {
    pub response: SearchResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub section: Option<String>,
    #[serde(rename = "show-tags")]
    pub show_tags: Option<String>,
    pub page: Option<usize>,
    #[serde(rename = "page-size")]
    pub page_size: Option<usize>,
    #[serde(rename = "order-by")]
    pub order_by: Option<String>,
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
}

#[derive(Clone)]
pub struct MockState {
    api_key: Arc<str>,
    articles: Arc<Vec<StoredArticle>>,
}

impl MockState {
    pub fn new(api_key: &str, articles: Vec<StoredArticle>) -> Self {
        Self {
            api_key: Arc::from(api_key),
            articles: Arc::new(articles),
        }
    }

    pub fn seeded(api_key: &str) -> Self {
        Self::new(api_key, fixture::seed())
    }
}

pub fn app() -> Router {
    router(MockState::seeded(DEFAULT_API_KEY))
}

pub fn router(state: MockState) -> Router {
    Router::new().route("/search", get(search)).with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, router(state)).await
}

fn api_error(message: &str) -> Response {
    warn!(message, "rejecting search request");
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"response": {"status": "error", "message": message}})),
    )
        .into_response()
}

async fn search(State(state): State<MockState>, Query(params): Query<SearchParams>) -> Response {
    if params.api_key.as_deref() != Some(&*state.api_key) {
        warn!("missing or unknown api-key");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Unauthorized"})),
        )
            .into_response();
    }

    let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    if page_size > MAX_PAGE_SIZE {
        return api_error("page-size must be an integer between 0 and 200");
    }
    let page = params.page.unwrap_or(1);
    if page == 0 {
        return api_error("page must be greater than 0");
    }

    let sections: Vec<&str> = params
        .section
        .as_deref()
        .map(|s| s.split('|').map(str::trim).filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();
    let mut matching: Vec<&StoredArticle> = state
        .articles
        .iter()
        .filter(|a| sections.is_empty() || sections.contains(&a.item.section_id.as_str()))
        .collect();

    let order_by = params.order_by.as_deref().unwrap_or("newest");
    match order_by {
        "newest" => matching.sort_by(|a, b| {
            b.item.web_publication_date.cmp(&a.item.web_publication_date)
        }),
        "oldest" => matching.sort_by(|a, b| {
            a.item.web_publication_date.cmp(&b.item.web_publication_date)
        }),
        "relevance" => {}
        _ => return api_error("order-by must be one of newest, oldest, relevance"),
    }

    let total = matching.len();
    let pages = if page_size == 0 { 0 } else { total.div_ceil(page_size) };
    if page > pages.max(1) {
        return api_error("requested page is beyond the number of available pages");
    }

    let with_tags = params
        .show_tags
        .as_deref()
        .is_some_and(|tags| tags.split(',').any(|t| matches!(t.trim(), "contributor" | "all")));

    let results: Vec<ContentItem> = matching
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .map(|stored| {
            let mut item = stored.item.clone();
            if with_tags {
                item.tags = Some(stored.contributors.clone());
            }
            item
        })
        .collect();

    info!(
        section = params.section.as_deref().unwrap_or("*"),
        page,
        page_size,
        returned = results.len(),
        "search"
    );
    debug!(total, pages, with_tags, "search paging");

    Json(SearchEnvelope {
        response: SearchResponse {
            status: "ok".to_string(),
            user_tier: "developer".to_string(),
            total,
            start_index: (page - 1) * page_size + 1,
            page_size,
            current_page: page,
            pages,
            order_by: order_by.to_string(),
            results,
        },
    })
    .into_response()
}
