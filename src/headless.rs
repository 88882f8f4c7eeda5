//! Headless listing: one blog page printed to a writer, no terminal UI.
//!
//! The load runs through the same [`HomeView`] and [`Loader`] the TUI uses,
//! so normalisation, the total-count fallback and the error message are
//! identical. Output is one line per article:
//!
//! ```text
//! Jan 1 | Building a TUI blog reader | rust, tui | https://dev.to/...
//! page 1 of 17 | 1 2 3 4 5 … 17
//! ```

use folio_core::{
    config::Config, Article, ArticleSource, FetchState, HomeView, Loader, PaginationWindow, View,
};
use std::io::Write;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessOptions {
    /// Page to print. `None` prints page 1.
    pub page: Option<u32>,
}

/// How the listing ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The page loaded; this many articles were printed.
    Printed(usize),
    /// The load failed with this user-facing message.
    Failed(String),
}

/// Load one page of articles from `source` and print it to `out`.
///
/// Blocks on a private current-thread runtime until the single request
/// finishes.
pub fn run(
    config: &Config,
    source: Arc<dyn ArticleSource>,
    options: HeadlessOptions,
    out: &mut dyn Write,
) -> anyhow::Result<Listing> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let (loader, mut completions) = Loader::new(source, runtime.handle().clone());

    let mut home = HomeView::from_config(&config.home).starting_at(options.page.unwrap_or(1));
    home.mount(&loader);

    let completion = runtime
        .block_on(completions.recv())
        .ok_or_else(|| anyhow::anyhow!("loader stopped before the page arrived"))?;
    let resolution = home.apply(completion);
    tracing::debug!(?resolution, "headless: page resolved");
    home.unmount();

    match home.state() {
        FetchState::Success { articles, .. } => {
            for article in articles.iter() {
                writeln!(out, "{}", article_line(article, config.ui.tag_limit))?;
            }
            writeln!(out, "{}", summary_line(&home.window()))?;
            Ok(Listing::Printed(articles.len()))
        }
        FetchState::Error { message } => Ok(Listing::Failed(message.clone())),
        other => anyhow::bail!("page load did not finish (state: {})", other.label()),
    }
}

/// `date | title | tags | url`
pub fn article_line(article: &Article, tag_limit: usize) -> String {
    format!(
        "{} | {} | {} | {}",
        article.published(),
        article.title(),
        article.display_tags(tag_limit).join(", "),
        article.url()
    )
}

/// `page C of T | <window>`, the current page in brackets.
pub fn summary_line(window: &PaginationWindow) -> String {
    let mut pages: Vec<String> = window
        .pages
        .iter()
        .map(|p| {
            if window.is_current(*p) {
                format!("[{p}]")
            } else {
                p.to_string()
            }
        })
        .collect();
    if window.show_last {
        pages.push("…".to_string());
        pages.push(window.total.to_string());
    }
    format!("page {} of {} | {}", window.current, window.total, pages.join(" "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
