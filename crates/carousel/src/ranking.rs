//! Ranking of the catalog for the carousel.
//!
//! ## Algorithm
//! 1. Stable-sort the catalog by `total_rating`, highest first
//! 2. Records without a rating go after every rated record
//! 3. Equal ratings keep their catalog order
//! 4. Take the first N

use catalog::{MovieRecord, SharedRecord};
use std::cmp::Ordering;

/// Descending by total rating, missing last
pub fn by_total_rating_desc(a: &MovieRecord, b: &MovieRecord) -> Ordering {
    match (a.total_rating, b.total_rating) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The `n` highest-rated records, ties in catalog order
pub fn rank_top(records: &[SharedRecord], n: usize) -> Vec<SharedRecord> {
    let mut ranked = records.to_vec();
    // sort_by is stable, which is what keeps ties in catalog order
    ranked.sort_by(|a, b| by_total_rating_desc(a, b));
    ranked.truncate(n);
    ranked
}
