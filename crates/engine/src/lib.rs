//! Headless page-interaction engine for the scrollspy viewer.
//!
//! The engine owns all interaction state for a single page: the section
//! registry, the navigation menu built from it, the active-section highlight,
//! the smooth-scroll suppression window, and the transient visibility of the
//! nav bar and the scroll-to-top control.
//!
//! It is deliberately host-agnostic. The front end feeds it plain events
//! (`on_scroll`, `on_nav_activated`, `on_top_activated`, `on_tick`) with a
//! caller-supplied `Instant`, and reads state back through accessors when
//! rendering. All timing goes through cancellable one-shot deadline timers,
//! so tests drive the engine with a simulated clock and synthetic viewports
//! instead of a real event loop.

pub mod detector;
pub mod nav;
pub mod page_engine;
pub mod registry;
pub mod scroller;
pub mod timer;
pub mod visibility;

pub use nav::{NavBar, NavEntry};
pub use page_engine::{EngineConfig, PageEngine};
pub use registry::SectionRegistry;
pub use scroller::SmoothScroll;
pub use timer::OneShot;
pub use visibility::TransientUi;
