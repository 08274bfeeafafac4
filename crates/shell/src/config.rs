//! Shell configuration.

use carousel::CarouselConfig;
use feed_client::FeedSource;
use std::path::PathBuf;
use std::time::Duration;

/// Where the feed lives unless told otherwise
pub const DEFAULT_FEED_URL: &str = "http://localhost:3000/movies.json";

/// Everything the shell needs to mount
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub feed: FeedSource,
    pub carousel: CarouselConfig,
}

impl ShellConfig {
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed = FeedSource::Http(url.into());
        self
    }

    pub fn with_feed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.feed = FeedSource::File(path.into());
        self
    }

    pub fn with_rotation_interval(mut self, interval: Duration) -> Self {
        self.carousel = self.carousel.with_rotation_interval(interval);
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.carousel = self.carousel.with_top_n(top_n);
        self
    }

    pub fn with_visible_slides(mut self, visible: usize) -> Self {
        self.carousel = self.carousel.with_visible_slides(visible);
        self
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            feed: FeedSource::Http(DEFAULT_FEED_URL.to_string()),
            carousel: CarouselConfig::default(),
        }
    }
}
