//! Pipeline for filtering the movie catalog.
//!
//! This crate provides:
//! - Filter trait and implementations for record filtering
//! - FilterPipeline for composing filters
//! - SearchQuery, the lower-cased free-text query
//!
//! ## Architecture
//! Filters take a catalog snapshot and keep a subsequence of it. They are
//! pure: the same snapshot and query always give the same result, and
//! records are never reordered or copied (only their `Arc`s are).
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, SearchQuery};
//!
//! let pipeline = FilterPipeline::search();
//! let visible = pipeline.apply(store.records().to_vec(), &SearchQuery::new("drama"));
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod query;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use filters::search::{filter, haystack};
pub use query::SearchQuery;
pub use traits::Filter;
