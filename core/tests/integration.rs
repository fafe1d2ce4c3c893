//! Fetch, parse and display against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, executes every built request over
//! real HTTP with ureq, and drives an `ArticleFeed` with the results the way
//! a list screen would.

use news_core::{
    ApiError, ArticleFeed, FeedState, GuardianClient, HttpMethod, HttpResponse, SearchQuery,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// ureq's status-as-error behaviour is disabled so 4xx/5xx responses come
/// back as data and the core decides what they mean.
fn execute(req: news_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut call = match req.method {
        HttpMethod::Get => agent.get(&req.path),
    };
    for (key, value) in &req.headers {
        call = call.header(key, value);
    }
    let mut response = call.call().expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    HttpResponse::new(status, body)
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });
    addr
}

#[test]
fn fetch_parse_display_lifecycle() {
    let addr = start_server();
    let client = GuardianClient::new(&format!("http://{addr}"), mock_server::DEFAULT_API_KEY);
    let mut feed = ArticleFeed::new();

    // Step 1: default politics listing fills the feed.
    feed.begin_refresh();
    assert!(feed.is_loading());
    let req = client.build_search(&SearchQuery::default()).unwrap();
    feed.apply(client.parse_articles(execute(req)));
    assert_eq!(feed.state(), &FeedState::Ready);
    assert_eq!(feed.len(), 8);
    assert!(feed.articles().iter().all(|a| a.section == "Politics"));

    // Newest first; the two-byline article shows its last contributor.
    let first = feed.get(0).unwrap();
    assert_eq!(first.title, "Brexit talks: what happened on the first day");
    assert_eq!(first.author.as_deref(), Some("Jennifer Rankin"));
    let row = feed.row(0).unwrap();
    assert_eq!(row.date, "Jun 21, 2017");

    // Articles without contributor tags have no author.
    let live = feed
        .articles()
        .iter()
        .find(|a| a.title.starts_with("Politics live"))
        .unwrap();
    assert!(live.author.is_none());

    // Step 2: selecting an item yields a browsable URL.
    let url = feed.open(0).unwrap();
    assert_eq!(url.host_str(), Some("www.theguardian.com"));

    // Step 3: refresh with a section that has nothing replaces the list.
    feed.begin_refresh();
    let req = client
        .build_search(&SearchQuery::default().with_section("sport"))
        .unwrap();
    feed.apply(client.parse_articles(execute(req)));
    assert!(feed.is_empty());
    assert_eq!(feed.empty_message().as_deref(), Some("No articles found."));
}

#[test]
fn paging_walks_every_result_once() {
    let addr = start_server();
    let client = GuardianClient::new(&format!("http://{addr}"), mock_server::DEFAULT_API_KEY);

    let mut titles = Vec::new();
    let mut page_number = 1;
    loop {
        let query = SearchQuery::default().with_page(page_number).with_page_size(3);
        let page = client
            .parse_search(execute(client.build_search(&query).unwrap()))
            .unwrap();
        assert_eq!(page.current_page, page_number);
        titles.extend(page.articles.iter().map(|a| a.title.clone()));
        if !page.has_next() {
            break;
        }
        page_number += 1;
    }

    assert_eq!(page_number, 3);
    assert_eq!(titles.len(), 8);
    let mut deduped = titles.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 8);

    // One past the end is an API error, not an empty page.
    let query = SearchQuery::default().with_page(4).with_page_size(3);
    let err = client
        .parse_search(execute(client.build_search(&query).unwrap()))
        .unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 400, .. }));
}

#[test]
fn wrong_key_surfaces_in_feed() {
    let addr = start_server();
    let client = GuardianClient::new(&format!("http://{addr}"), "wrong");
    let mut feed = ArticleFeed::new();

    feed.begin_refresh();
    let req = client.build_search(&SearchQuery::default()).unwrap();
    let result = client.parse_articles(execute(req));
    assert_eq!(result.clone().unwrap_err(), ApiError::Unauthorized);

    feed.apply(result);
    assert!(feed.is_empty());
    assert_eq!(feed.empty_message().as_deref(), Some("API key rejected"));
}
