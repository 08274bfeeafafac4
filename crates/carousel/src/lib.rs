//! # Carousel Crate
//!
//! The "top rated" slideshow: a ranked subset of the catalog that
//! advances on its own and can be jumped around by the user.
//!
//! ## Components
//!
//! ### Ranking
//! Stable sort by `total_rating`, highest first, unrated last, top N.
//!
//! ### CarouselEngine
//! Pure state: ranked slides, the active index, and everything derived
//! from it (strip offset, wrap copies, indicators).
//!
//! ### CarouselTimer
//! A repeating Tokio task that posts `Tick`s to an event queue and is
//! cancelled when dropped.
//!
//! ## Example Usage
//!
//! ```ignore
//! use carousel::{CarouselEngine, CarouselTimer, DEFAULT_ROTATION_INTERVAL};
//!
//! let mut engine = CarouselEngine::default();
//! engine.on_catalog_change(store.records());
//!
//! let timer = CarouselTimer::spawn(DEFAULT_ROTATION_INTERVAL, events_tx)?;
//! // ... on every Tick event:
//! engine.tick();
//! ```

// Public modules
pub mod engine;
pub mod error;
pub mod ranking;
pub mod timer;

// Re-export commonly used types
pub use engine::{
    CarouselConfig, CarouselEngine, DEFAULT_ROTATION_INTERVAL, DEFAULT_TOP_N,
    DEFAULT_VISIBLE_SLIDES, Indicator, Slide,
};
pub use error::CarouselError;
pub use ranking::rank_top;
pub use timer::{CarouselTimer, Tick};
