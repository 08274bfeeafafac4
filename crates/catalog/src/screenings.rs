//! Screenings visibility tracking.
//!
//! Each record carries a `screenings_visible` flag that the detail panel
//! reads. Flipping it produces a new snapshot; records that were not
//! toggled are the same `Arc` as before.

use crate::types::{MovieRecord, SharedRecord};
use std::sync::Arc;
use tracing::{debug, warn};

/// Flip `screenings_visible` on the record titled `title`.
///
/// Always returns a new snapshot. If no record or more than one record
/// has that title, the snapshot is returned with every record unchanged.
pub fn toggle(records: &[SharedRecord], title: &str) -> Vec<SharedRecord> {
    let matches = records.iter().filter(|r| r.title == title).count();

    match matches {
        1 => {}
        0 => {
            debug!("No record titled {:?} to toggle", title);
            return records.to_vec();
        }
        n => {
            warn!("Refusing to toggle {:?}: {} records share that title", title, n);
            return records.to_vec();
        }
    }

    records
        .iter()
        .map(|record| {
            if record.title == title {
                Arc::new(MovieRecord {
                    screenings_visible: !record.screenings_visible,
                    ..MovieRecord::clone(record)
                })
            } else {
                Arc::clone(record)
            }
        })
        .collect()
}
