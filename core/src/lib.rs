//! Synchronous client core for a Guardian-backed news reader.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), then feeds the parsed
//! articles into `ArticleFeed`, the view-model a list screen binds to.
//!
//! # Design
//! - `GuardianClient` is stateless: it holds only `base_url` and the API key.
//! - Listing is split into `build_search` and `parse_search`, so the I/O
//!   boundary is explicit and the host picks the thread.
//! - Types use owned `String` / `Vec` fields to keep FFI mapping simple.

pub mod client;
pub mod display;
pub mod error;
pub mod feed;
pub mod http;
pub mod query;
pub mod types;
mod wire;

pub use client::{GuardianClient, DEFAULT_BASE_URL};
pub use display::ArticleRow;
pub use error::{ApiError, FeedError};
pub use feed::{ArticleFeed, EmptyReason, FeedState};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::{OrderBy, SearchQuery};
pub use types::{Article, SearchPage};
