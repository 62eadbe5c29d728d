use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use scrollspy_engine::EngineConfig;
use scrollspy_types::Page;
use tracing::Level;

/// JSON for the built-in demo page shown when no document is given.
const DEMO_PAGE: &str = include_str!("../demo_page.json");

#[derive(Debug, Parser)]
#[command(name = "scrollspy", version, about = "Terminal viewer for sectioned pages with scroll-spy navigation")]
struct Cli {
    /// Page document (JSON). Shows the built-in demo page when omitted.
    page: Option<PathBuf>,

    /// Settle delay after a nav-triggered smooth scroll, in milliseconds.
    #[arg(long, value_name = "MS")]
    settle_ms: Option<u64>,

    /// Quiet period before the nav bar auto-hides, in milliseconds.
    #[arg(long, value_name = "MS")]
    quiet_ms: Option<u64>,

    /// Scroll offset (rows) past which the scroll-to-top control shows.
    #[arg(long, value_name = "ROWS")]
    top_threshold: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let page = match &cli.page {
        Some(path) => Page::from_path(path).with_context(|| format!("loading page {}", path.display()))?,
        None => Page::from_json(DEMO_PAGE).context("parsing built-in demo page")?,
    };

    let mut config = EngineConfig::default();
    if let Some(ms) = cli.settle_ms {
        config.settle_delay = Duration::from_millis(ms);
    }
    if let Some(ms) = cli.quiet_ms {
        config.nav_quiet = Duration::from_millis(ms);
    }
    if let Some(rows) = cli.top_threshold {
        config.top_threshold = rows;
    }

    scrollspy_tui::run(page, config).await
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .try_init();
}
