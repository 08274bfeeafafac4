//! The carousel state machine.
//!
//! Two things move `current_index`: the rotation timer (`tick`) and the
//! position indicators (`select`). Both run on the same event queue, so
//! whichever event is handled last wins. A manual selection does not
//! reset or pause the timer.
//!
//! The strip offset is derived from `current_index` every time it is
//! asked for and is never stored.

use crate::error::CarouselError;
use crate::ranking::rank_top;
use catalog::SharedRecord;
use std::time::Duration;
use tracing::debug;

/// How often the carousel advances on its own
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_millis(4000);

/// How many of the top-rated movies the carousel shows
pub const DEFAULT_TOP_N: usize = 5;

/// Slides visible side by side
pub const DEFAULT_VISIBLE_SLIDES: usize = 3;

/// Ranked slides repeated at the end of the strip so the last positions
/// still show a full row
pub const WRAP_COPIES: usize = 2;

/// Tunables for the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    pub top_n: usize,
    pub visible_slides: usize,
    pub rotation_interval: Duration,
}

impl CarouselConfig {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// At least one slide is always visible
    pub fn with_visible_slides(mut self, visible: usize) -> Self {
        self.visible_slides = visible.max(1);
        self
    }

    pub fn with_rotation_interval(mut self, interval: Duration) -> Self {
        self.rotation_interval = interval;
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            visible_slides: DEFAULT_VISIBLE_SLIDES,
            rotation_interval: DEFAULT_ROTATION_INTERVAL,
        }
    }
}

/// One slide in the rendered strip
#[derive(Debug, Clone)]
pub struct Slide {
    pub record: SharedRecord,
    /// Position of the record in the ranked list
    pub rank: usize,
    /// True for the copies appended after the ranked slides
    pub is_wrap_copy: bool,
}

/// One clickable position indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Autonomous, interruptible slideshow over the top-rated records.
#[derive(Debug, Clone)]
pub struct CarouselEngine {
    config: CarouselConfig,
    ranked: Vec<SharedRecord>,
    current_index: usize,
}

impl CarouselEngine {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            ranked: Vec::new(),
            current_index: 0,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The ranked top-N records
    pub fn ranked(&self) -> &[SharedRecord] {
        &self.ranked
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The record on the active slide, if there is one
    pub fn current(&self) -> Option<&SharedRecord> {
        self.ranked.get(self.current_index)
    }

    /// Re-rank after the catalog changed.
    ///
    /// The index is kept when it is still in range, otherwise it goes
    /// back to the first slide.
    pub fn on_catalog_change(&mut self, records: &[SharedRecord]) {
        self.ranked = rank_top(records, self.config.top_n);
        if self.current_index >= self.ranked.len() {
            self.current_index = 0;
        }
        debug!(
            "Carousel ranked {} of {} records, index {}",
            self.ranked.len(),
            records.len(),
            self.current_index
        );
    }

    /// Advance one slide, wrapping at the end. Does nothing when empty.
    pub fn tick(&mut self) -> usize {
        if self.ranked.is_empty() {
            return self.current_index;
        }
        self.current_index = (self.current_index + 1) % self.ranked.len();
        self.current_index
    }

    /// Jump to a slide from its position indicator
    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.ranked.len() {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.ranked.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Horizontal offset of the strip, in percent of its width
    pub fn offset_percent(&self) -> f64 {
        let visible = self.config.visible_slides.max(1) as f64;
        // 0.0 - x keeps the first slide at +0 rather than -0
        0.0 - (self.current_index as f64 * 100.0) / visible
    }

    /// The offset as a CSS transform
    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }

    /// The rendered strip: ranked slides then up to two wrap copies
    pub fn slides(&self) -> Vec<Slide> {
        let ranked = self.ranked.iter().enumerate().map(|(rank, record)| Slide {
            record: record.clone(),
            rank,
            is_wrap_copy: false,
        });
        let copies = self
            .ranked
            .iter()
            .take(WRAP_COPIES)
            .enumerate()
            .map(|(rank, record)| Slide {
                record: record.clone(),
                rank,
                is_wrap_copy: true,
            });
        ranked.chain(copies).collect()
    }

    /// One indicator per ranked slide
    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.ranked.len())
            .map(|index| Indicator {
                index,
                active: index == self.current_index,
            })
            .collect()
    }
}

impl Default for CarouselEngine {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}
