use clap::Parser;
use folio::headless::{self, HeadlessOptions, Listing};
use folio_api::DevToClient;
use folio_core::config::Config;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "folio", about = "Blog and portfolio reader for the terminal")]
struct Cli {
    /// Write debug logs to --log-file (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Debug log destination.
    #[arg(long, default_value = "/tmp/folio-debug.log")]
    log_file: PathBuf,

    /// Article API base URL, overriding `[api] base_url`.
    #[arg(long)]
    api_url: Option<String>,

    /// Print one blog page to stdout instead of starting the TUI.
    #[arg(long)]
    headless: bool,

    /// Blog page to open on.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    page: Option<u32>,

    /// Articles per blog page, overriding `[home] per_page`.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    per_page: Option<u32>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&cli.log_file)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(log_file = %cli.log_file.display(), "folio debug log started");
    }

    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unreadable, using defaults");
        Config::defaults()
    });
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if let Some(per_page) = cli.per_page {
        config.home.per_page = per_page;
    }

    let source = Arc::new(DevToClient::from_config(&config.api)?);
    tracing::info!(base_url = source.base_url(), headless = cli.headless, "starting");

    if cli.headless {
        let options = HeadlessOptions { page: cli.page };
        let mut stdout = std::io::stdout().lock();
        return match headless::run(&config, source, options, &mut stdout)? {
            Listing::Printed(_) => Ok(ExitCode::SUCCESS),
            Listing::Failed(message) => {
                eprintln!("{message}");
                Ok(ExitCode::FAILURE)
            }
        };
    }

    folio_tui::run(config, source, folio_tui::RunOptions { start_page: cli.page })?;
    Ok(ExitCode::SUCCESS)
}
