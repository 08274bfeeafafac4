//! Events applied by the shell's single event queue.

use carousel::Tick;
use catalog::{FeedError, MovieRecord};

/// Everything that can change shell state, in the order it arrives
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The one-shot catalog fetch finished
    FetchCompleted(Result<Vec<MovieRecord>, FeedError>),
    /// The rotation timer fired
    Tick,
    /// A carousel position indicator was clicked
    SelectSlide(usize),
    /// The search box changed
    QueryChanged(String),
    /// A card's screenings button was pressed
    ToggleScreenings(String),
}

/// Payload-free tag of an [`AppEvent`], for callers that only need to know
/// what just happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    FetchCompleted,
    Tick,
    SelectSlide,
    QueryChanged,
    ToggleScreenings,
}

impl AppEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            AppEvent::FetchCompleted(_) => EventKind::FetchCompleted,
            AppEvent::Tick => EventKind::Tick,
            AppEvent::SelectSlide(_) => EventKind::SelectSlide,
            AppEvent::QueryChanged(_) => EventKind::QueryChanged,
            AppEvent::ToggleScreenings(_) => EventKind::ToggleScreenings,
        }
    }
}

impl From<Tick> for AppEvent {
    fn from(_: Tick) -> Self {
        AppEvent::Tick
    }
}
