//! C-ABI wrapper around `news-core`.
//!
//! # Overview
//! Exposes request building, response parsing and the article list
//! view-model through `extern "C"` functions, so the mobile shell only has
//! to run the GET on a background thread and bind its list view to the feed.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A single `FfiNewsResult` envelope with `FfiDataTag` + `void* data`
//!   carries parse payloads and errors uniformly.
//! - The caller owns all returned pointers and releases them with the
//!   matching `news_free_*` function.

pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};

use news_core::http::HttpResponse;
use news_core::query::SearchQuery;

use types::*;

/// Borrow a C string as `&str`. Invalid UTF-8 reads as empty.
fn read_c_str<'a>(s: *const c_char) -> &'a str {
    unsafe { CStr::from_ptr(s) }.to_str().unwrap_or("")
}

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new client bound to `base_url` and `api_key`.
///
/// Returns null if either argument is null or if an internal panic occurs.
/// The caller must free the returned pointer with `news_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn news_client_new(
    base_url: *const c_char,
    api_key: *const c_char,
) -> *mut FfiNewsClient {
    catch_unwind(|| {
        if base_url.is_null() || api_key.is_null() {
            return std::ptr::null_mut();
        }
        let client = news_core::GuardianClient::new(read_c_str(base_url), read_c_str(api_key));
        Box::into_raw(Box::new(FfiNewsClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `news_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn news_client_free(client: *mut FfiNewsClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build / parse
// ---------------------------------------------------------------------------

/// Build the search request.
///
/// `section` may be null for no section filter. `page` and `page_size` use
/// 0 for "API default". Returns null if `client` is null or the base URL is
/// unusable. Free with `news_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn news_build_search(
    client: *const FfiNewsClient,
    section: *const c_char,
    page: u32,
    page_size: u32,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let mut query = if section.is_null() {
            SearchQuery::default().without_section()
        } else {
            SearchQuery::default().with_section(read_c_str(section))
        };
        if page > 0 {
            query = query.with_page(page);
        }
        if page_size > 0 {
            query = query.with_page_size(page_size);
        }
        match client.inner.build_search(&query) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        // Non-UTF-8 bytes must surface as a parse failure, not an empty body.
        String::from_utf8_lossy(unsafe { CStr::from_ptr(resp.body) }.to_bytes()).into_owned()
    };
    HttpResponse::new(resp.status, body)
}

/// Parse the response to a search request.
///
/// Returns a result with `data_tag = ArticlePage` on success.
#[unsafe(no_mangle)]
pub extern "C" fn news_parse_search(
    client: *const FfiNewsClient,
    response: *const FfiHttpResponse,
) -> *mut FfiNewsResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiNewsResult::null_arg("client");
        }
        if response.is_null() {
            return FfiNewsResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let core_resp = ffi_response_to_core(unsafe { &*response });
        match client.inner.parse_search(core_resp) {
            Ok(page) => FfiNewsResult::ok_page(page),
            Err(e) => FfiNewsResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiNewsResult::panic("panic in news_parse_search"))
}

// ---------------------------------------------------------------------------
// Feed view-model
// ---------------------------------------------------------------------------

/// Create an empty feed in the `Idle` state. Free with `news_feed_free`.
#[unsafe(no_mangle)]
pub extern "C" fn news_feed_new() -> *mut FfiArticleFeed {
    catch_unwind(|| {
        Box::into_raw(Box::new(FfiArticleFeed {
            inner: news_core::ArticleFeed::new(),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a feed created by `news_feed_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn news_feed_free(feed: *mut FfiArticleFeed) {
    if !feed.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(feed) });
        });
    }
}

/// Run `f` against the feed behind `feed`, or return `default` when null.
fn with_feed_mut<T>(feed: *mut FfiArticleFeed, default: T, f: impl FnOnce(&mut FfiArticleFeed) -> T) -> T {
    if feed.is_null() {
        return default;
    }
    let feed = unsafe { &mut *feed };
    f(feed)
}

/// Mark a fetch as started; current rows stay until the result is applied.
#[unsafe(no_mangle)]
pub extern "C" fn news_feed_begin_refresh(feed: *mut FfiArticleFeed) -> FfiFeedStatus {
    catch_unwind(AssertUnwindSafe(|| {
        with_feed_mut(feed, FfiFeedStatus::NullArg, |feed| {
            feed.inner.begin_refresh();
            feed.inner.state().into()
        })
    }))
    .unwrap_or(FfiFeedStatus::NullArg)
}

/// The host has no network; clears the rows and shows "No internet connection."
#[unsafe(no_mangle)]
pub extern "C" fn news_feed_mark_offline(feed: *mut FfiArticleFeed) -> FfiFeedStatus {
    catch_unwind(AssertUnwindSafe(|| {
        with_feed_mut(feed, FfiFeedStatus::NullArg, |feed| {
            feed.inner.mark_offline();
            feed.inner.state().into()
        })
    }))
    .unwrap_or(FfiFeedStatus::NullArg)
}

/// Clear rows and return to `Idle`, e.g. when the screen is torn down.
#[unsafe(no_mangle)]
pub extern "C" fn news_feed_reset(feed: *mut FfiArticleFeed) -> FfiFeedStatus {
    catch_unwind(AssertUnwindSafe(|| {
        with_feed_mut(feed, FfiFeedStatus::NullArg, |feed| {
            feed.inner.reset();
            feed.inner.state().into()
        })
    }))
    .unwrap_or(FfiFeedStatus::NullArg)
}

/// Parse a search response and replace the feed's rows with the result.
#[unsafe(no_mangle)]
pub extern "C" fn news_feed_apply_response(
    feed: *mut FfiArticleFeed,
    client: *const FfiNewsClient,
    response: *const FfiHttpResponse,
) -> FfiFeedStatus {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() || response.is_null() {
            return FfiFeedStatus::NullArg;
        }
        let client = unsafe { &*client };
        let core_resp = ffi_response_to_core(unsafe { &*response });
        with_feed_mut(feed, FfiFeedStatus::NullArg, |feed| {
            feed.inner.apply(client.inner.parse_articles(core_resp));
            feed.inner.state().into()
        })
    }))
    .unwrap_or(FfiFeedStatus::NullArg)
}

#[unsafe(no_mangle)]
pub extern "C" fn news_feed_status(feed: *const FfiArticleFeed) -> FfiFeedStatus {
    catch_unwind(|| {
        if feed.is_null() {
            return FfiFeedStatus::NullArg;
        }
        let feed = unsafe { &*feed };
        feed.inner.state().into()
    })
    .unwrap_or(FfiFeedStatus::NullArg)
}

/// Number of rows currently in the feed; 0 for null.
#[unsafe(no_mangle)]
pub extern "C" fn news_feed_len(feed: *const FfiArticleFeed) -> u32 {
    catch_unwind(|| {
        if feed.is_null() {
            return 0;
        }
        let feed = unsafe { &*feed };
        feed.inner.len() as u32
    })
    .unwrap_or(0)
}

/// Text for the empty view, or null while loading / showing rows.
/// Free with `news_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn news_feed_empty_message(feed: *const FfiArticleFeed) -> *mut c_char {
    catch_unwind(|| {
        if feed.is_null() {
            return std::ptr::null_mut();
        }
        let feed = unsafe { &*feed };
        to_c_string_opt(feed.inner.empty_message())
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Row model for `index`, or null when out of range. Free with `news_free_row`.
#[unsafe(no_mangle)]
pub extern "C" fn news_feed_row(feed: *const FfiArticleFeed, index: u32) -> *mut FfiArticleRow {
    catch_unwind(|| {
        if feed.is_null() {
            return std::ptr::null_mut();
        }
        let feed = unsafe { &*feed };
        match feed.inner.row(index as usize) {
            Some(row) => FfiArticleRow::from_core(row),
            None => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Validated http(s) URL for the row at `index`, ready to hand to the
/// system browser. Null when out of range or the URL is unusable.
/// Free with `news_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn news_feed_open_url(feed: *const FfiArticleFeed, index: u32) -> *mut c_char {
    catch_unwind(|| {
        if feed.is_null() {
            return std::ptr::null_mut();
        }
        let feed = unsafe { &*feed };
        match feed.inner.open(index as usize) {
            Ok(url) => to_c_string(url.into()),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by `news_build_search`. Safe with null.
#[unsafe(no_mangle)]
pub extern "C" fn news_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.path);
        free_c_string(req.body);
        for h in from_raw_parts(req.headers, req.headers_len) {
            free_c_string(h.key);
            free_c_string(h.value);
        }
    });
}

/// Free an `FfiNewsResult` returned by `news_parse_search`. Safe with null.
/// Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn news_free_result(result: *mut FfiNewsResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::ArticlePage => {
                let page = unsafe { Box::from_raw(result.data as *mut FfiArticlePage) };
                for item in &from_raw_parts(page.items, page.len) {
                    item.free_fields();
                }
            }
            FfiDataTag::None => {}
        }
    });
}

/// Free a row returned by `news_feed_row`. Safe with null.
#[unsafe(no_mangle)]
pub extern "C" fn news_free_row(row: *mut FfiArticleRow) {
    if row.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let row = unsafe { Box::from_raw(row) };
        free_c_string(row.title);
        free_c_string(row.author);
        free_c_string(row.section);
        free_c_string(row.date);
    });
}

/// Free a C string allocated by this library. Safe with null.
#[unsafe(no_mangle)]
pub extern "C" fn news_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| free_c_string(s));
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
