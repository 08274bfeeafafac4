//! The Catalog Store.
//!
//! Holds the records of the most recent successful load and tracks where
//! the load lifecycle currently is:
//!
//! ```text
//! Empty ──begin_load──> Loading ──Ok──> Ready
//!                          │
//!                          └──Err──> Error   (records untouched)
//! ```
//!
//! Loads replace the whole snapshot; there is no merging.

use crate::error::{FeedError, Result};
use crate::screenings;
use crate::types::{MovieRecord, SharedRecord};
use std::sync::Arc;
use tracing::{info, warn};

/// Where the store is in its load lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing requested yet
    Empty,
    /// A fetch is in flight; previous records (if any) stay visible
    Loading,
    /// The last load succeeded
    Ready,
    /// The last load failed; records are whatever was there before
    Error,
}

/// Owned catalog state with exactly one writer role.
#[derive(Debug)]
pub struct CatalogStore {
    phase: LoadPhase,
    records: Vec<SharedRecord>,
    last_error: Option<FeedError>,
}

impl CatalogStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Empty,
            records: Vec::new(),
            last_error: None,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Current snapshot, in feed order
    pub fn records(&self) -> &[SharedRecord] {
        &self.records
    }

    /// The error from the most recent failed load, cleared by a success
    pub fn last_error(&self) -> Option<&FeedError> {
        self.last_error.as_ref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by title (first match)
    pub fn get(&self, title: &str) -> Option<&SharedRecord> {
        self.records.iter().find(|r| r.title == title)
    }

    /// Mark a fetch as in flight
    pub fn begin_load(&mut self) {
        if self.phase == LoadPhase::Loading {
            warn!("begin_load called while a load is already in flight");
        }
        self.phase = LoadPhase::Loading;
    }

    /// Apply the outcome of the in-flight fetch.
    ///
    /// Returns `false` (and changes nothing) when no load was in flight,
    /// so a stray completion can never overwrite the catalog.
    pub fn finish_load(&mut self, outcome: Result<Vec<MovieRecord>>) -> bool {
        if self.phase != LoadPhase::Loading {
            warn!("Ignoring load completion while {:?}", self.phase);
            return false;
        }

        match outcome {
            Ok(records) => {
                info!("Catalog ready with {} records", records.len());
                self.records = records
                    .into_iter()
                    .map(|record| {
                        Arc::new(MovieRecord {
                            screenings_visible: false,
                            ..record
                        })
                    })
                    .collect();
                self.last_error = None;
                self.phase = LoadPhase::Ready;
            }
            Err(err) => {
                warn!(
                    "Catalog load failed, keeping {} existing records: {}",
                    self.records.len(),
                    err
                );
                self.last_error = Some(err);
                self.phase = LoadPhase::Error;
            }
        }
        true
    }

    /// Flip screenings visibility for `title` (see [`screenings::toggle`])
    pub fn toggle_screenings(&mut self, title: &str) {
        self.records = screenings::toggle(&self.records, title);
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(titles: &[&str]) -> Vec<MovieRecord> {
        titles.iter().map(|t| MovieRecord::new(*t)).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = CatalogStore::new();
        assert_eq!(store.phase(), LoadPhase::Empty);
        assert!(store.is_empty());
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_successful_load() {
        let mut store = CatalogStore::new();
        store.begin_load();
        assert_eq!(store.phase(), LoadPhase::Loading);

        assert!(store.finish_load(Ok(records(&["A", "B"]))));
        assert_eq!(store.phase(), LoadPhase::Ready);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].title, "A");
    }

    #[test]
    fn test_failed_first_load_stays_empty() {
        let mut store = CatalogStore::new();
        store.begin_load();
        store.finish_load(Err(FeedError::HttpStatus { status: 500 }));

        assert_eq!(store.phase(), LoadPhase::Error);
        assert!(store.is_empty());
        assert_eq!(
            store.last_error(),
            Some(&FeedError::HttpStatus { status: 500 })
        );
    }

    #[test]
    fn test_failed_reload_keeps_previous_records() {
        let mut store = CatalogStore::new();
        store.begin_load();
        store.finish_load(Ok(records(&["A", "B"])));

        store.begin_load();
        assert_eq!(store.len(), 2);
        store.finish_load(Err(FeedError::Network("connection refused".to_string())));

        assert_eq!(store.phase(), LoadPhase::Error);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_reload_replaces_and_resets_visibility() {
        let mut store = CatalogStore::new();
        store.begin_load();
        store.finish_load(Ok(records(&["A", "B"])));
        store.toggle_screenings("A");
        assert!(store.get("A").unwrap().screenings_visible);

        store.begin_load();
        store.finish_load(Ok(records(&["A", "C"])));

        assert!(!store.get("A").unwrap().screenings_visible);
        assert!(store.get("B").is_none());
        assert!(store.get("C").is_some());
    }

    #[test]
    fn test_completion_without_load_is_ignored() {
        let mut store = CatalogStore::new();
        assert!(!store.finish_load(Ok(records(&["A"]))));
        assert_eq!(store.phase(), LoadPhase::Empty);
        assert!(store.is_empty());
    }

    #[test]
    fn test_incoming_visibility_flag_is_reset() {
        let mut record = MovieRecord::new("A");
        record.screenings_visible = true;

        let mut store = CatalogStore::new();
        store.begin_load();
        store.finish_load(Ok(vec![record]));
        assert!(!store.records()[0].screenings_visible);
    }
}
