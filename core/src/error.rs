//! Error types for the news API client and the feed view-model.
//!
//! # Design
//! `Unauthorized` gets its own variant because a bad or missing API key is
//! the one failure a host can act on (prompt for a key). Errors the Guardian
//! API explains in its body land in `Api`; anything else non-200 keeps the raw
//! status and body in `HttpError`.

use std::fmt;

/// Errors returned by `GuardianClient` build and parse methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the API key (401 or 403).
    Unauthorized,

    /// The server returned an error message in its JSON body.
    Api { status: u16, message: String },

    /// The server returned a non-200 status without a readable message.
    HttpError { status: u16, body: String },

    /// The server answered 200 with nothing in the body.
    EmptyBody,

    /// The response body is not the expected search envelope.
    DeserializationError(String),

    /// The base URL could not be turned into a request URL.
    InvalidUrl(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "API key rejected"),
            ApiError::Api { status, message } => write!(f, "API error ({status}): {message}"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::EmptyBody => write!(f, "empty response body"),
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Errors returned when selecting an item of an `ArticleFeed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// No article at the requested position.
    OutOfRange { index: usize, len: usize },

    /// The article's URL is malformed or not http(s).
    BadUrl(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::OutOfRange { index, len } => {
                write!(f, "no article at position {index} (feed has {len})")
            }
            FeedError::BadUrl(url) => write!(f, "cannot open article URL: {url}"),
        }
    }
}

impl std::error::Error for FeedError {}
