//! Terminal front end for the scrollspy viewer.
//!
//! This crate owns everything host-side: terminal lifecycle, the event loop,
//! input routing, layout measurement (wrapping section bodies and deriving
//! section document rows), the smooth-scroll offset tween, and rendering.
//! All interaction decisions live in `scrollspy-engine`; this crate feeds it
//! events and draws whatever state it reports.

mod app;
mod layout;
mod runtime;
mod ui;

use anyhow::Result;
use scrollspy_engine::EngineConfig;
use scrollspy_types::Page;

pub use app::App;

/// Runs the viewer until the user quits.
pub async fn run(page: Page, config: EngineConfig) -> Result<()> {
    runtime::run_app(page, config).await
}
