//! folio TUI: ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use app::AppState;
use folio_core::{config::Config, preference::FileBackend, ArticleSource, Loader, ThemeStore};
use std::sync::Arc;

/// Launch options that do not live in the config file.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Blog page to open on. `None` opens page 1.
    pub start_page: Option<u32>,
}

/// Start the TUI against `source`.
///
/// Builds the tokio runtime the fetches run on, the shared theme store
/// (persisted next to the config file) and the app state, then blocks until
/// the user quits.
pub fn run(config: Config, source: Arc<dyn ArticleSource>, options: RunOptions) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .thread_name("folio-fetch")
        .build()?;
    let (loader, completions) = Loader::new(source, runtime.handle().clone());

    let store = ThemeStore::open(FileBackend::default_location());
    let mut state = AppState::new(config, store);
    if let Some(page) = options.start_page {
        state = state.starting_at(page);
    }

    let result = App::new(state, loader, completions).run();
    runtime.shutdown_background();
    result
}
