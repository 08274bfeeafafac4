//! Free-text search over a record's searchable fields.
//!
//! Each record gets one lower-cased haystack built from, in order:
//! title, genres, rating keys, rating values, screening cinemas, and every
//! showtime (cinema grouping dropped), joined with single spaces. A record
//! matches when the query is a contiguous substring of that haystack.
//!
//! Matching is deliberately not tokenized: "com ant" does not match
//! "romantic comedy". The haystack is rebuilt on every pass, which is fine
//! for catalogs of a few hundred records.

use crate::query::SearchQuery;
use crate::traits::Filter;
use catalog::{MovieRecord, SharedRecord};

/// Keeps records whose haystack contains the query.
pub struct SearchFilter;

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply(&self, records: Vec<SharedRecord>, query: &SearchQuery) -> Vec<SharedRecord> {
        if query.is_empty() {
            return records;
        }

        records
            .into_iter()
            .filter(|record| matches(record, query))
            .collect()
    }
}

/// Does `record` match `query`?
pub fn matches(record: &MovieRecord, query: &SearchQuery) -> bool {
    haystack(record).contains(query.needle())
}

/// Build the lower-cased search text for one record
pub fn haystack(record: &MovieRecord) -> String {
    let rating_values: Vec<String> = record.rating.values().map(f64::to_string).collect();

    let parts = std::iter::once(record.title.as_str())
        .chain(record.genre.iter().map(String::as_str))
        .chain(record.rating.keys().map(String::as_str))
        .chain(rating_values.iter().map(String::as_str))
        .chain(record.screenings.keys().map(String::as_str))
        .chain(record.screenings.values().flatten().map(String::as_str));

    parts.collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Convenience wrapper: filter a snapshot by raw query text
pub fn filter(records: &[SharedRecord], query: &str) -> Vec<SharedRecord> {
    SearchFilter.apply(records.to_vec(), &SearchQuery::new(query))
}
