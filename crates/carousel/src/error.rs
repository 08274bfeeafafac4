//! Error types for the carousel crate.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A position indicator pointed past the ranked slides
    #[error("Slide {index} is out of range (carousel has {len} slides)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The rotation timer cannot run with this period
    #[error("Invalid rotation interval: {0:?}")]
    InvalidInterval(Duration),
}
