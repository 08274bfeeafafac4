//! Core domain types for the cinema catalog.
//!
//! A `MovieRecord` is the canonical, fully-defaulted shape of one feed
//! entry. Everything downstream (search, carousel, views) reads records
//! through these types and never touches raw JSON.

use indexmap::IndexMap;
use std::sync::Arc;

// =============================================================================
// Type Aliases
// =============================================================================

/// Name of an individual scoring source, e.g. "IMDB Audience Score"
pub type ReviewerName = String;

/// Name of a cinema chain, e.g. "Yes Planet"
pub type CinemaName = String;

/// Coarse brand used to pick an outbound link, e.g. "IMDB"
pub type BrandName = String;

/// Records are shared between the store, search results and the carousel.
///
/// Snapshots are `Vec<SharedRecord>`: producing a new snapshot clones the
/// pointers, so records that did not change keep the same allocation and
/// can be compared with `Arc::ptr_eq`.
pub type SharedRecord = Arc<MovieRecord>;

// =============================================================================
// Display constants
// =============================================================================

/// Shown wherever an optional field is missing
pub const NOT_AVAILABLE: &str = "N/A";

/// Poster used when the feed has no image for a movie
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x450?text=No+Image";

// =============================================================================
// MovieRecord
// =============================================================================

/// One movie as held by the Catalog Store.
///
/// Identity is `title`. The four mappings are always present, possibly
/// empty, and keep the feed's key order: search and the card lists both
/// depend on it. Only `screenings_visible` ever changes after a load.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub genre: Vec<String>,
    pub duration: Option<String>,
    pub image: Option<String>,
    /// Aggregate score on a 0-100 scale
    pub total_rating: Option<f64>,
    pub rating: IndexMap<ReviewerName, f64>,
    /// Only key presence matters; values are kept as the feed sent them
    pub origin: IndexMap<CinemaName, serde_json::Value>,
    pub screenings: IndexMap<CinemaName, Vec<String>>,
    pub links: IndexMap<BrandName, String>,
    pub trailer: Option<String>,

    /// UI-only state, reset to `false` by every load
    pub screenings_visible: bool,
}

impl MovieRecord {
    /// Create a record with the given title and every other field defaulted
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            genre: Vec::new(),
            duration: None,
            image: None,
            total_rating: None,
            rating: IndexMap::new(),
            origin: IndexMap::new(),
            screenings: IndexMap::new(),
            links: IndexMap::new(),
            trailer: None,
            screenings_visible: false,
        }
    }

    /// Poster URL, falling back to the placeholder
    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    pub fn duration_label(&self) -> &str {
        self.duration.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Total rating as text, "N/A" when the feed had none
    pub fn total_rating_label(&self) -> String {
        match self.total_rating {
            Some(value) => value.to_string(),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// Genres joined with ", ", or "N/A" for an empty list
    pub fn genre_label(&self) -> String {
        if self.genre.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            self.genre.join(", ")
        }
    }

    /// True when at least one cinema lists at least one showtime.
    ///
    /// This decides whether the screenings toggle is offered at all.
    pub fn has_screenings(&self) -> bool {
        self.screenings.values().any(|times| !times.is_empty())
    }

    /// Is the movie showing at this cinema chain?
    pub fn is_showing_at(&self, cinema: &str) -> bool {
        self.origin.contains_key(cinema)
    }
}
