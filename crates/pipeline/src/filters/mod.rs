//! Filter implementations for the catalog pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod search;
pub mod showing_at;

// Re-export for convenience
pub use search::SearchFilter;
pub use showing_at::ShowingAtFilter;
