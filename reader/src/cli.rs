//! Command-line arguments for the terminal reader.
//!
//! Every option can also come from the environment, so the API key never has
//! to appear in shell history.

use clap::Parser;
use news_core::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse Guardian headlines in the terminal")]
pub struct Cli {
    /// Base URL of the content API
    #[arg(long, env = "GUARDIAN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Guardian content API key
    #[arg(long, env = "GUARDIAN_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Section to list; an empty value lists every section
    #[arg(short, long, default_value = "politics")]
    pub section: String,

    /// Page to start on (1-based)
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Open the Nth article (1-based) in the browser after loading, then exit
    #[arg(long, value_name = "N")]
    pub open: Option<usize>,

    /// Print the list once and exit
    #[arg(long)]
    pub once: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_command_line() {
        let cli = Cli::parse_from([
            "news-reader",
            "--base-url",
            "http://localhost:3000",
            "--api-key",
            "test",
            "--section",
            "world",
            "--page",
            "2",
            "--page-size",
            "5",
            "--open",
            "1",
        ]);
        assert_eq!(cli.base_url, "http://localhost:3000");
        assert_eq!(cli.api_key, "test");
        assert_eq!(cli.section, "world");
        assert_eq!(cli.page, Some(2));
        assert_eq!(cli.page_size, Some(5));
        assert_eq!(cli.open, Some(1));
        assert!(!cli.once);
    }

    #[test]
    fn defaults_to_politics() {
        let cli = Cli::parse_from(["news-reader", "--api-key", "k", "--once"]);
        assert_eq!(cli.section, "politics");
        assert!(cli.once);
        assert!(cli.page.is_none());
    }
}
