//! Errors raised while mounting the shell.

use carousel::CarouselError;
use thiserror::Error;

/// Catalog load failures are not here: they become store state, not errors.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Failed to start carousel: {0}")]
    Carousel(#[from] CarouselError),
}

pub type Result<T> = std::result::Result<T, ShellError>;
