//! # Cinema App
//!
//! This module composes the catalog, the search pipeline and the carousel
//! into the state a renderer reads:
//! 1. The Catalog Store (load lifecycle, records, screenings flags)
//! 2. The current search query and the grid it filters down to
//! 3. The carousel over the top-rated records
//!
//! All mutation goes through [`CinemaApp::handle`], one event at a time.
//! Nothing here is async; the runtime module feeds it.

use carousel::{CarouselConfig, CarouselEngine};
use catalog::{CatalogStore, LoadPhase, SharedRecord};
use pipeline::{Filter, FilterPipeline, SearchQuery};
use tracing::{debug, info, warn};

use crate::events::AppEvent;
use crate::view::{CarouselView, MovieCard};

/// Neutral notice shown instead of (or above) the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Loading,
    /// Nothing to show, either because the feed is empty or it failed
    NoData,
    /// Records exist but none match the query
    NoMatches,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Loading => "Loading movies...",
            Notice::NoData => "No movies available right now",
            Notice::NoMatches => "No movies match your search",
        }
    }
}

/// Presentation state for the whole page
pub struct CinemaApp {
    store: CatalogStore,
    query: SearchQuery,
    search: FilterPipeline,
    carousel: CarouselEngine,
}

impl CinemaApp {
    pub fn new(carousel: CarouselConfig) -> Self {
        Self {
            store: CatalogStore::new(),
            query: SearchQuery::default(),
            search: FilterPipeline::search(),
            carousel: CarouselEngine::new(carousel),
        }
    }

    /// Narrow the grid further, after the search filter
    pub fn with_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.search = self.search.add_filter(filter);
        self
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn carousel(&self) -> &CarouselEngine {
        &self.carousel
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Mark the catalog fetch as in flight
    pub fn begin_load(&mut self) {
        self.store.begin_load();
    }

    /// Apply one event.
    ///
    /// Events never fail; anything invalid (an out-of-range indicator, a
    /// completion with no load in flight) is logged and ignored.
    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::FetchCompleted(outcome) => {
                if self.store.finish_load(outcome) {
                    self.carousel.on_catalog_change(self.store.records());
                }
            }
            AppEvent::Tick => {
                let index = self.carousel.tick();
                debug!("Carousel advanced to {}", index);
            }
            AppEvent::SelectSlide(index) => {
                if let Err(err) = self.carousel.select(index) {
                    warn!("Ignoring slide selection: {}", err);
                }
            }
            AppEvent::QueryChanged(text) => {
                self.query = SearchQuery::new(text);
            }
            AppEvent::ToggleScreenings(title) => {
                self.store.toggle_screenings(&title);
                // Same ratings in the same order, so the ranking and the
                // index are unchanged; this only refreshes the Arcs
                self.carousel.on_catalog_change(self.store.records());
            }
        }
    }

    /// Records matching the current query, in catalog order
    pub fn visible_records(&self) -> Vec<SharedRecord> {
        self.search.apply(self.store.records().to_vec(), &self.query)
    }

    /// The filtered grid
    pub fn cards(&self) -> Vec<MovieCard> {
        self.visible_records()
            .iter()
            .map(|record| MovieCard::from_record(record))
            .collect()
    }

    /// One card by title, ignoring the search query
    pub fn card(&self, title: &str) -> Option<MovieCard> {
        self.store
            .get(title)
            .map(|record| MovieCard::from_record(record))
    }

    pub fn carousel_view(&self) -> CarouselView {
        CarouselView::from_engine(&self.carousel)
    }

    /// What to tell the user when the grid alone is not enough
    pub fn notice(&self) -> Option<Notice> {
        if self.store.is_empty() {
            return match self.store.phase() {
                LoadPhase::Empty | LoadPhase::Loading => Some(Notice::Loading),
                LoadPhase::Ready | LoadPhase::Error => Some(Notice::NoData),
            };
        }
        if self.visible_records().is_empty() {
            return Some(Notice::NoMatches);
        }
        None
    }

    /// Log a one-line summary of the current state
    pub fn log_summary(&self) {
        info!(
            "{:?}: {} records, {} visible for {:?}, slide {}/{}",
            self.store.phase(),
            self.store.len(),
            self.visible_records().len(),
            self.query.raw(),
            self.carousel.current_index() + 1,
            self.carousel.ranked().len()
        );
    }
}

impl Default for CinemaApp {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}
