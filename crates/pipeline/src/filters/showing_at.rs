//! Filter to keep movies playing at one cinema chain.

use crate::query::SearchQuery;
use crate::traits::Filter;
use catalog::SharedRecord;

/// Keeps records whose `origin` lists the given cinema.
///
/// Cinema names are compared exactly, the same way the feed keys them.
pub struct ShowingAtFilter {
    cinema: String,
}

impl ShowingAtFilter {
    pub fn new(cinema: impl Into<String>) -> Self {
        Self {
            cinema: cinema.into(),
        }
    }
}

impl Filter for ShowingAtFilter {
    fn name(&self) -> &str {
        "ShowingAtFilter"
    }

    fn apply(&self, records: Vec<SharedRecord>, _query: &SearchQuery) -> Vec<SharedRecord> {
        records
            .into_iter()
            .filter(|record| record.is_showing_at(&self.cinema))
            .collect()
    }
}
