//! # news-reader
//!
//! Terminal host for `news-core`: lists Guardian articles for a section,
//! refreshes on demand and opens a chosen article in the system browser.
//!
//! ```sh
//! GUARDIAN_API_KEY=... news-reader --section politics
//! ```
//!
//! The network call runs on a background thread while the main thread shows
//! the loading state, mirroring how the mobile shell drives the same core.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;
use news_core::{GuardianClient, SearchQuery};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod browser;
mod cli;
mod commands;
mod render;
mod session;
mod transport;

use cli::Cli;
use commands::Command;
use render::{render, HELP};
use session::Session;
use transport::UreqTransport;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Cli::parse();
    debug!(base_url = %args.base_url, section = %args.section, "starting");

    let mut query = SearchQuery::default().with_section(&args.section);
    if let Some(page) = args.page {
        query = query.with_page(page);
    }
    if let Some(page_size) = args.page_size {
        query = query.with_page_size(page_size);
    }

    let client = GuardianClient::new(&args.base_url, &args.api_key);
    let mut session = Session::new(client, query, Arc::new(UreqTransport::new()));
    let stdout = io::stdout();

    refresh(&mut session, &mut stdout.lock())?;

    if let Some(position) = args.open {
        let url = session.select(position)?;
        info!(%url, "opening article");
        browser::open_url(&url)?;
        return Ok(());
    }
    if args.once {
        return Ok(());
    }

    let mut out = stdout.lock();
    writeln!(out, "{HELP}")?;
    prompt(&mut out)?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            None => {}
            Some(Command::Quit) => break,
            Some(Command::Refresh) => refresh(&mut session, &mut out)?,
            Some(Command::NextPage) => {
                if session.next_page() {
                    refresh(&mut session, &mut out)?;
                } else {
                    writeln!(out, "already on the last page")?;
                }
            }
            Some(Command::PreviousPage) => {
                if session.previous_page() {
                    refresh(&mut session, &mut out)?;
                } else {
                    writeln!(out, "already on the first page")?;
                }
            }
            Some(Command::Open(position)) => match session.select(position) {
                Ok(url) => {
                    if let Err(e) = browser::open_url(&url) {
                        error!(error = %e, "could not launch browser");
                        writeln!(out, "{url}")?;
                    }
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            Some(Command::Help) => writeln!(out, "{HELP}")?,
            Some(Command::Unknown(input)) => writeln!(out, "unknown command: {input}")?,
        }
        prompt(&mut out)?;
    }
    Ok(())
}

fn refresh(session: &mut Session, out: &mut impl Write) -> io::Result<()> {
    let mut loading = Ok(());
    session.refresh(|_| {
        loading = writeln!(out, "Loading...").and_then(|_| out.flush());
    });
    loading?;
    write!(out, "{}", render(session.feed(), session.page(), session.pages()))
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
