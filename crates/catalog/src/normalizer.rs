//! Normalizer for raw feed entries.
//!
//! The feed is loosely typed: `genre` can be a string or a list, numbers
//! sometimes arrive as strings, and any optional field can be missing.
//! This module turns each entry into a `MovieRecord` with every mapping
//! present, and never fails on a single entry.
//!
//! Only the envelope can fail: a body that is not JSON, or that has no
//! `Movies` list, is a `FeedError::MalformedResponse`.

use crate::error::{FeedError, Result};
use crate::types::*;
use rayon::prelude::*;
use serde_json::{Map, Value};
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Key of the movie list in the feed envelope
pub const MOVIES_KEY: &str = "Movies";

/// Parse a response body and return the raw `Movies` entries
pub fn parse_feed(body: &[u8]) -> Result<Vec<Value>> {
    let document: Value = serde_json::from_slice(body)?;

    let movies = match document {
        Value::Object(mut fields) => fields.remove(MOVIES_KEY),
        _ => None,
    };

    match movies {
        Some(Value::Array(entries)) => Ok(entries),
        Some(other) => Err(FeedError::MalformedResponse(format!(
            "`{}` is not a list (found {})",
            MOVIES_KEY,
            json_kind(&other)
        ))),
        None => Err(FeedError::MalformedResponse(format!(
            "missing `{}` field",
            MOVIES_KEY
        ))),
    }
}

/// Parse a body and normalize every entry in it
pub fn load_feed(body: &[u8]) -> Result<Vec<MovieRecord>> {
    let entries = parse_feed(body)?;
    Ok(normalize_all(&entries))
}

/// Normalize a batch of entries, keeping feed order.
///
/// Duplicate titles are kept (see DESIGN.md) but reported, since toggling
/// by title will refuse to act on them.
pub fn normalize_all(entries: &[Value]) -> Vec<MovieRecord> {
    // par_iter + collect preserves input order
    let records: Vec<MovieRecord> = entries.par_iter().map(normalize).collect();

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.title.as_str()) {
            warn!("Duplicate title in feed: {:?}", record.title);
        }
    }

    debug!("Normalized {} feed entries", records.len());
    records
}

/// Convert one raw entry into a `MovieRecord`.
///
/// Missing or ill-typed fields fall back to their documented defaults.
pub fn normalize(entry: &Value) -> MovieRecord {
    let Some(fields) = entry.as_object() else {
        warn!("Feed entry is not an object (found {})", json_kind(entry));
        return MovieRecord::new("");
    };

    let title = fields
        .get("title")
        .and_then(coerce_string)
        .unwrap_or_else(|| {
            warn!("Feed entry without a title");
            String::new()
        });

    let rating = object_field(fields, "rating")
        .filter_map(|(reviewer, value)| match coerce_number(value) {
            Some(score) => Some((reviewer.clone(), score)),
            None => {
                debug!("Dropping non-numeric rating {:?} for {:?}", reviewer, title);
                None
            }
        })
        .collect();

    let origin = object_field(fields, "origin")
        .map(|(cinema, value)| (cinema.clone(), value.clone()))
        .collect();

    let screenings = object_field(fields, "screenings")
        .map(|(cinema, times)| (cinema.clone(), string_list(times)))
        .collect();

    let links: IndexMap<BrandName, String> = object_field(fields, "links")
        .filter_map(|(brand, url)| coerce_string(url).map(|url| (brand.clone(), url)))
        .collect();

    MovieRecord {
        genre: fields.get("genre").map(string_list).unwrap_or_default(),
        duration: fields.get("duration").and_then(coerce_string),
        image: fields.get("image").and_then(coerce_string),
        total_rating: fields.get("total_rating").and_then(coerce_number),
        rating,
        origin,
        screenings,
        links,
        trailer: fields.get("trailer").and_then(coerce_string),
        screenings_visible: false,
        title,
    }
}

// =============================================================================
// Coercion helpers
// =============================================================================

/// Iterate the entries of a nested object, or nothing if absent/not an object
fn object_field<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
) -> impl Iterator<Item = (&'a String, &'a Value)> + use<'a> {
    fields
        .get(key)
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|map| map.iter())
}

/// Non-empty string, or a number rendered as text
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Number, or a string that parses as one
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// A list of strings from either a scalar or an array
fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(coerce_string).collect(),
        scalar => coerce_string(scalar).into_iter().collect(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
