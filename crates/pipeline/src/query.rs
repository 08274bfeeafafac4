//! The search query as typed by the user.

/// Free-text search, lower-cased once when it is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The text exactly as entered
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lower-cased text used for matching
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// An empty query matches everything
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}
