//! Shell crate for the cinema catalog.
//!
//! This crate mounts the catalog, the search box and the top-rated
//! carousel behind a single event queue, and turns their state into view
//! models a renderer can draw.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod runtime;
pub mod view;

pub use app::{CinemaApp, Notice};
pub use config::{DEFAULT_FEED_URL, ShellConfig};
pub use error::{Result, ShellError};
pub use events::{AppEvent, EventKind};
pub use runtime::AppRuntime;
pub use view::{CarouselView, MovieCard, SlideView, ToggleButton};
