//! Plain-text rendering of the feed.

use std::fmt::Write;

use news_core::{ArticleFeed, FeedState};

pub fn render(feed: &ArticleFeed, page: u32, pages: u32) -> String {
    let mut out = String::new();
    match feed.state() {
        FeedState::Idle => {}
        FeedState::Loading if feed.is_empty() => out.push_str("Loading...\n"),
        FeedState::Empty(reason) => {
            let _ = writeln!(out, "{}", reason.message());
        }
        FeedState::Loading | FeedState::Ready => {
            for (i, row) in feed.rows().iter().enumerate() {
                let _ = writeln!(out, "{:>3}. {}", i + 1, row.title);
                let _ = write!(out, "     {} | {}", row.section, row.date);
                if let Some(author) = &row.author {
                    let _ = write!(out, " | {author}");
                }
                out.push('\n');
            }
            if pages > 1 {
                let _ = writeln!(out, "page {page} of {pages}");
            }
        }
    }
    out
}

pub const HELP: &str = "[number] open  r refresh  n next page  p previous page  q quit";

#[cfg(test)]
mod tests {
    use super::*;
    use news_core::{ApiError, Article};

    fn article(title: &str, author: Option<&str>) -> Article {
        Article {
            title: title.to_string(),
            section: "Politics".to_string(),
            author: author.map(str::to_string),
            published: "2017-06-21T15:10:44Z".to_string(),
            url: "https://www.theguardian.com/x".to_string(),
        }
    }

    #[test]
    fn renders_rows_with_optional_author() {
        let mut feed = ArticleFeed::new();
        feed.apply(Ok(vec![article("First", Some("Anne Author")), article("Second", None)]));
        let out = render(&feed, 1, 1);
        assert_eq!(
            out,
            "  1. First\n     Politics | Jun 21, 2017 | Anne Author\n  2. Second\n     Politics | Jun 21, 2017\n"
        );
    }

    #[test]
    fn shows_page_counter_when_paged() {
        let mut feed = ArticleFeed::new();
        feed.apply(Ok(vec![article("First", None)]));
        assert!(render(&feed, 2, 3).ends_with("page 2 of 3\n"));
    }

    #[test]
    fn loading_and_empty_states() {
        let mut feed = ArticleFeed::new();
        assert_eq!(render(&feed, 1, 0), "");
        feed.begin_refresh();
        assert_eq!(render(&feed, 1, 0), "Loading...\n");
        feed.apply(Ok(Vec::new()));
        assert_eq!(render(&feed, 1, 0), "No articles found.\n");
        feed.apply(Err(ApiError::EmptyBody));
        assert_eq!(render(&feed, 1, 0), "empty response body\n");
    }
}
