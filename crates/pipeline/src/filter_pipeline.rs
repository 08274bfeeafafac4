//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::query::SearchQuery;
use crate::traits::Filter;
use catalog::SharedRecord;
use tracing::{debug, instrument};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ShowingAtFilter::new("Yes Planet"))
///     .add_filter(SearchFilter);
///
/// let visible = pipeline.apply(store.records().to_vec(), &query);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline the browse grid uses: free-text search only
    pub fn search() -> Self {
        Self::new().add_filter(crate::filters::SearchFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the records.
    ///
    /// Each filter keeps a subsequence of its input, so the result is
    /// always in catalog order.
    #[instrument(skip_all, fields(query = query.raw(), input = records.len()))]
    pub fn apply(&self, records: Vec<SharedRecord>, query: &SearchQuery) -> Vec<SharedRecord> {
        let mut current = records;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, query);
            debug!("{}: {} -> {}", filter.name(), before, current.len());
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{SearchFilter, ShowingAtFilter};
    use catalog::MovieRecord;
    use std::sync::Arc;

    fn catalog() -> Vec<SharedRecord> {
        let mut heat = MovieRecord::new("Heat");
        heat.genre = vec!["Crime".to_string()];
        heat.origin
            .insert("Yes Planet".to_string(), serde_json::Value::Bool(true));

        let mut ronin = MovieRecord::new("Ronin");
        ronin.genre = vec!["Crime".to_string()];

        let up = MovieRecord::new("Up");

        vec![Arc::new(heat), Arc::new(ronin), Arc::new(up)]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let filtered = pipeline.apply(catalog(), &SearchQuery::new("zzz"));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_search_pipeline() {
        let pipeline = FilterPipeline::search();
        assert_eq!(pipeline.len(), 1);

        let filtered = pipeline.apply(catalog(), &SearchQuery::new("crime"));
        let titles: Vec<_> = filtered.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Heat", "Ronin"]);
    }

    #[test]
    fn test_chained_filters() {
        let pipeline = FilterPipeline::new()
            .add_filter(ShowingAtFilter::new("Yes Planet"))
            .add_filter(SearchFilter);

        let filtered = pipeline.apply(catalog(), &SearchQuery::new("crime"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Heat");
    }
}
