//! Error types for the catalog crate.
//!
//! Every way a catalog load can fail ends up as a `FeedError`. The store
//! treats all variants the same way (report, keep the current snapshot),
//! but callers still get to see which stage broke.

use thiserror::Error;

/// Errors that can occur while obtaining the movie feed
///
/// Variants only hold owned strings and numbers so the error is `Clone`.
/// The Catalog Store keeps the last one around for the "no data" banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// Transport-level failure to reach the endpoint
    #[error("Network failure: {0}")]
    Network(String),

    /// A response arrived, but its status is outside 200-299
    #[error("Feed endpoint answered with HTTP {status}")]
    HttpStatus { status: u16 },

    /// The body is not JSON, or it has no `Movies` list
    #[error("Malformed feed: {0}")]
    MalformedResponse(String),

    /// A local feed file could not be read
    #[error("Failed to read feed file {path}: {reason}")]
    Io { path: String, reason: String },
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::MalformedResponse(err.to_string())
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FeedError>;
