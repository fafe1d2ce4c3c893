//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with C-compatible representations:
//! `*mut c_char` instead of `String` (null for `None`), raw pointer plus
//! length instead of `Vec`, and enums with explicit discriminants.
//! Conversions live here to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use news_core::error::ApiError;
use news_core::feed::{EmptyReason, FeedState};
use news_core::http::HttpMethod;
use news_core::{Article, ArticleRow, SearchPage};

/// Opaque handle to a `GuardianClient`.
pub struct FfiNewsClient {
    pub(crate) inner: news_core::GuardianClient,
}

/// Opaque handle to an `ArticleFeed`, the list screen's view-model.
pub struct FfiArticleFeed {
    pub(crate) inner: news_core::ArticleFeed,
}

/// Interior NULs cannot cross as C strings; they are dropped instead.
pub(crate) fn to_c_string(s: String) -> *mut c_char {
    let s = if s.contains('\0') { s.replace('\0', "") } else { s };
    CString::new(s).unwrap_or_default().into_raw()
}

pub(crate) fn to_c_string_opt(s: Option<String>) -> *mut c_char {
    s.map(to_c_string).unwrap_or(std::ptr::null_mut())
}

/// Free a C string produced by `to_c_string`. Null is ignored.
pub(crate) fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Hand a `Vec` to C as pointer + length; empty vectors become null.
pub(crate) fn into_raw_parts<T>(items: Vec<T>) -> (*mut T, u32) {
    if items.is_empty() {
        return (std::ptr::null_mut(), 0);
    }
    let len = items.len() as u32;
    let mut boxed = items.into_boxed_slice();
    let ptr = boxed.as_mut_ptr();
    std::mem::forget(boxed);
    (ptr, len)
}

/// Take back a pointer + length produced by `into_raw_parts`.
pub(crate) fn from_raw_parts<T>(ptr: *mut T, len: u32) -> Vec<T> {
    if ptr.is_null() || len == 0 {
        return Vec::new();
    }
    unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len as usize)) }.into_vec()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `news_build_search`. The host executes the request off its UI
/// thread and passes the response back through `news_parse_search` or
/// `news_feed_apply_response`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    pub(crate) fn from_core(req: news_core::HttpRequest) -> *mut Self {
        let headers: Vec<FfiHeader> = req
            .headers
            .into_iter()
            .map(|(k, v)| FfiHeader {
                key: to_c_string(k),
                value: to_c_string(v),
            })
            .collect();
        let (headers, headers_len) = into_raw_parts(headers);

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            path: to_c_string(req.path),
            headers,
            headers_len,
            body: to_c_string_opt(req.body),
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The host builds this on its own stack; the FFI layer reads but never
/// frees these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiNewsResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    Unauthorized = 1,
    Http = 2,
    Api = 3,
    EmptyBody = 4,
    Deserialization = 5,
    InvalidUrl = 6,
    Panic = 7,
    NullArg = 8,
}

/// Tag that tells `news_free_result` what `FfiNewsResult::data` points to.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    ArticlePage = 1,
}

/// A single article exposed to C. `author` is null when there is none.
#[repr(C)]
pub struct FfiArticle {
    pub title: *mut c_char,
    pub section: *mut c_char,
    pub author: *mut c_char,
    pub published: *mut c_char,
    pub url: *mut c_char,
}

impl FfiArticle {
    fn from_core(article: Article) -> Self {
        FfiArticle {
            title: to_c_string(article.title),
            section: to_c_string(article.section),
            author: to_c_string_opt(article.author),
            published: to_c_string(article.published),
            url: to_c_string(article.url),
        }
    }

    /// Free the string fields (but not the struct itself).
    pub(crate) fn free_fields(&self) {
        free_c_string(self.title);
        free_c_string(self.section);
        free_c_string(self.author);
        free_c_string(self.published);
        free_c_string(self.url);
    }
}

/// One page of articles exposed to C.
#[repr(C)]
pub struct FfiArticlePage {
    pub items: *mut FfiArticle,
    pub len: u32,
    pub total: u64,
    pub current_page: u32,
    pub pages: u32,
}

/// Result envelope for parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null and `data`
/// points to the payload named by `data_tag`. On failure `error_code` gives
/// the category, `error_message` is a human-readable C string and `data` is
/// null.
#[repr(C)]
pub struct FfiNewsResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiNewsResult {
    pub(crate) fn ok_page(page: SearchPage) -> *mut Self {
        let items: Vec<FfiArticle> = page.articles.into_iter().map(FfiArticle::from_core).collect();
        let (items, len) = into_raw_parts(items);
        let ffi_page = Box::new(FfiArticlePage {
            items,
            len,
            total: page.total,
            current_page: page.current_page,
            pages: page.pages,
        });
        Box::into_raw(Box::new(FfiNewsResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 200,
            data_tag: FfiDataTag::ArticlePage,
            data: Box::into_raw(ffi_page) as *mut std::ffi::c_void,
        }))
    }

    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let (error_code, http_status) = error_parts(&err);
        Box::into_raw(Box::new(FfiNewsResult {
            error_code,
            error_message: to_c_string(err.to_string()),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }))
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::failure(FfiErrorCode::NullArg, &format!("null argument: {name}"))
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::failure(FfiErrorCode::Panic, msg)
    }

    fn failure(error_code: FfiErrorCode, msg: &str) -> *mut Self {
        Box::into_raw(Box::new(FfiNewsResult {
            error_code,
            error_message: to_c_string(msg.to_string()),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }))
    }
}

pub(crate) fn error_parts(err: &ApiError) -> (FfiErrorCode, u16) {
    match err {
        ApiError::Unauthorized => (FfiErrorCode::Unauthorized, 401),
        ApiError::Api { status, .. } => (FfiErrorCode::Api, *status),
        ApiError::HttpError { status, .. } => (FfiErrorCode::Http, *status),
        ApiError::EmptyBody => (FfiErrorCode::EmptyBody, 200),
        ApiError::DeserializationError(_) => (FfiErrorCode::Deserialization, 200),
        ApiError::InvalidUrl(_) => (FfiErrorCode::InvalidUrl, 0),
    }
}

// ---------------------------------------------------------------------------
// Feed types
// ---------------------------------------------------------------------------

/// What the list screen should show. `Ready` means rows; the rest select the
/// loading indicator or the empty view.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiFeedStatus {
    Idle = 0,
    Loading = 1,
    Ready = 2,
    NoArticles = 3,
    NoConnection = 4,
    Failed = 5,
    NullArg = 6,
}

impl From<&FeedState> for FfiFeedStatus {
    fn from(state: &FeedState) -> Self {
        match state {
            FeedState::Idle => FfiFeedStatus::Idle,
            FeedState::Loading => FfiFeedStatus::Loading,
            FeedState::Ready => FfiFeedStatus::Ready,
            FeedState::Empty(EmptyReason::NoArticles) => FfiFeedStatus::NoArticles,
            FeedState::Empty(EmptyReason::NoConnection) => FfiFeedStatus::NoConnection,
            FeedState::Empty(EmptyReason::Failed(_)) => FfiFeedStatus::Failed,
        }
    }
}

/// One list row. `author` is null when the byline should be hidden.
#[repr(C)]
pub struct FfiArticleRow {
    pub title: *mut c_char,
    pub author: *mut c_char,
    pub section: *mut c_char,
    pub date: *mut c_char,
}

impl FfiArticleRow {
    pub(crate) fn from_core(row: ArticleRow) -> *mut Self {
        Box::into_raw(Box::new(FfiArticleRow {
            title: to_c_string(row.title),
            author: to_c_string_opt(row.author),
            section: to_c_string(row.section),
            date: to_c_string(row.date),
        }))
    }
}
