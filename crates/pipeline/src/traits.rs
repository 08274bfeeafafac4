//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a catalog snapshot.

use crate::query::SearchQuery;
use catalog::SharedRecord;

/// Core trait for filtering catalog records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared with the runtime task
/// - Filters take ownership of the Vec and return a subsequence of it,
///   in the same order; they never re-sort
/// - Filtering cannot fail: an empty catalog just yields an empty result
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of records.
    ///
    /// # Arguments
    /// * `records` - The records to filter (takes ownership)
    /// * `query` - The user's current search text
    fn apply(&self, records: Vec<SharedRecord>, query: &SearchQuery) -> Vec<SharedRecord>;
}
