//! # Catalog Crate
//!
//! This crate owns the in-memory movie catalog: the record model, the
//! normalizer that builds it from the feed, and the store that holds it.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord` and its display helpers
//! - **normalizer**: raw feed JSON into fully-defaulted records
//! - **store**: `CatalogStore`, the Empty/Loading/Ready/Error state machine
//! - **screenings**: per-record expand/collapse of showtimes
//! - **assets**: logo and brand lookups for reviewers and cinemas
//! - **error**: `FeedError`, the load failure taxonomy
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogStore, normalizer};
//!
//! let mut store = CatalogStore::new();
//! store.begin_load();
//! store.finish_load(normalizer::load_feed(&body));
//!
//! store.toggle_screenings("Oppenheimer");
//! for record in store.records() {
//!     println!("{} ({})", record.title, record.total_rating_label());
//! }
//! ```

// Public modules
pub mod assets;
pub mod error;
pub mod normalizer;
pub mod screenings;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use assets::{KnownCinema, KnownReviewer};
pub use error::{FeedError, Result};
pub use store::{CatalogStore, LoadPhase};
pub use types::{
    // Type aliases
    BrandName,
    CinemaName,
    ReviewerName,
    SharedRecord,
    // Core types
    MovieRecord,
    // Constants
    NOT_AVAILABLE,
    PLACEHOLDER_IMAGE_URL,
};
