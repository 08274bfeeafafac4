//! View models for the browse grid and the carousel.
//!
//! These are plain data: what a renderer shows for a record, with every
//! fallback already applied. Building them never fails, whatever the
//! record contains.

use carousel::{CarouselEngine, Indicator, Slide};
use catalog::assets::{KnownCinema, logo_for, reviewer_link};
use catalog::{MovieRecord, NOT_AVAILABLE};
use serde::Serialize;

pub const NO_RATINGS: &str = "No ratings available";
pub const NO_CINEMAS: &str = "No origin cinemas available";
pub const NO_SCREENINGS: &str = "No screenings available";

/// One reviewer score on a card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingLine {
    pub reviewer: String,
    /// e.g. "84 %"
    pub score: String,
    pub logo: Option<&'static str>,
    /// Where the logo links to, via the reviewer's brand
    pub link: Option<String>,
}

/// A cinema the movie is showing at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CinemaBadge {
    pub name: String,
    pub logo: Option<&'static str>,
}

/// Showtimes at one cinema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningRow {
    pub cinema: String,
    pub times: Vec<String>,
}

/// The screenings button, when it is offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToggleButton {
    Show,
    Hide,
}

impl ToggleButton {
    pub fn label(self) -> &'static str {
        match self {
            ToggleButton::Show => "Show Screenings",
            ToggleButton::Hide => "Hide Screenings",
        }
    }
}

/// Everything one grid card displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCard {
    pub title: String,
    pub image_url: String,
    pub genre: String,
    pub total_rating: String,
    pub ratings: Vec<RatingLine>,
    pub cinemas: Vec<CinemaBadge>,
    pub trailer: Option<String>,
    /// `None` when no cinema has any showtime
    pub toggle: Option<ToggleButton>,
    /// The detail panel; `Some` only while expanded
    pub screenings: Option<Vec<ScreeningRow>>,
}

impl MovieCard {
    pub fn from_record(record: &MovieRecord) -> Self {
        let ratings = record
            .rating
            .iter()
            .map(|(reviewer, score)| RatingLine {
                reviewer: reviewer.clone(),
                score: format!("{} %", score),
                logo: logo_for(reviewer),
                link: reviewer_link(record, reviewer).map(str::to_string),
            })
            .collect();

        let cinemas = record
            .origin
            .keys()
            .map(|name| CinemaBadge {
                name: name.clone(),
                logo: logo_for(name),
            })
            .collect();

        let toggle = match (record.has_screenings(), record.screenings_visible) {
            (false, _) => None,
            (true, false) => Some(ToggleButton::Show),
            (true, true) => Some(ToggleButton::Hide),
        };

        let screenings = record.screenings_visible.then(|| {
            record
                .screenings
                .iter()
                .map(|(cinema, times)| ScreeningRow {
                    cinema: cinema.clone(),
                    times: times.clone(),
                })
                .collect()
        });

        Self {
            title: record.title.clone(),
            image_url: record.image_url().to_string(),
            genre: record.genre_label(),
            total_rating: record.total_rating_label(),
            ratings,
            cinemas,
            trailer: record.trailer.clone(),
            toggle,
            screenings,
        }
    }

    /// Every showtime in the open detail panel, empty when collapsed
    pub fn visible_showtimes(&self) -> Vec<&str> {
        self.screenings
            .iter()
            .flatten()
            .flat_map(|row| row.times.iter().map(String::as_str))
            .collect()
    }
}

/// Overlay of one carousel slide
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideView {
    pub title: String,
    pub image_url: String,
    /// e.g. "Rating: 90%"
    pub rating: String,
    pub duration: String,
    pub genre: String,
    /// Logos of origin cinemas we have artwork for
    pub cinema_logos: Vec<&'static str>,
    pub rank: usize,
    pub is_wrap_copy: bool,
}

impl SlideView {
    pub fn from_slide(slide: &Slide) -> Self {
        let record = &slide.record;
        let rating = match record.total_rating {
            Some(value) => format!("Rating: {}%", value),
            None => format!("Rating: {}", NOT_AVAILABLE),
        };

        Self {
            title: record.title.clone(),
            image_url: record.image_url().to_string(),
            rating,
            duration: record.duration_label().to_string(),
            genre: record.genre_label(),
            cinema_logos: record
                .origin
                .keys()
                .filter_map(|name| KnownCinema::from_name(name).map(KnownCinema::logo))
                .collect(),
            rank: slide.rank,
            is_wrap_copy: slide.is_wrap_copy,
        }
    }
}

/// The whole carousel as rendered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselView {
    pub slides: Vec<SlideView>,
    #[serde(skip)]
    pub indicators: Vec<Indicator>,
    pub current_index: usize,
    /// CSS transform for the slide strip
    pub transform: String,
}

impl CarouselView {
    pub fn from_engine(engine: &CarouselEngine) -> Self {
        Self {
            slides: engine.slides().iter().map(SlideView::from_slide).collect(),
            indicators: engine.indicators(),
            current_index: engine.current_index(),
            transform: engine.transform(),
        }
    }

    /// The slide the active indicator points at
    pub fn current(&self) -> Option<&SlideView> {
        self.slides
            .iter()
            .find(|s| !s.is_wrap_copy && s.rank == self.current_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::PLACEHOLDER_IMAGE_URL;
    use serde_json::Value;
    use std::sync::Arc;

    fn detailed_record() -> MovieRecord {
        let mut record = MovieRecord::new("Heat");
        record.genre = vec!["Crime".to_string(), "Thriller".to_string()];
        record.total_rating = Some(89.0);
        record.rating.insert("IMDB Audience Score".to_string(), 83.0);
        record.rating.insert("Some Blog".to_string(), 70.0);
        record
            .links
            .insert("IMDB".to_string(), "https://imdb.example/heat".to_string());
        record.origin.insert("Yes Planet".to_string(), Value::Bool(true));
        record.origin.insert("Drive-In".to_string(), Value::Null);
        record.screenings.insert(
            "Yes Planet".to_string(),
            vec!["18:00".to_string(), "20:30".to_string()],
        );
        record
    }

    #[test]
    fn test_card_fields() {
        let card = MovieCard::from_record(&detailed_record());

        assert_eq!(card.title, "Heat");
        assert_eq!(card.genre, "Crime, Thriller");
        assert_eq!(card.total_rating, "89");
        assert_eq!(card.image_url, PLACEHOLDER_IMAGE_URL);

        let imdb = &card.ratings[0];
        assert_eq!(imdb.reviewer, "IMDB Audience Score");
        assert_eq!(imdb.score, "83 %");
        assert_eq!(imdb.logo, Some("logos/6C7nVMS.png"));
        assert_eq!(imdb.link.as_deref(), Some("https://imdb.example/heat"));

        let blog = &card.ratings[1];
        assert_eq!(blog.logo, None);
        assert_eq!(blog.link, None);

        // Feed order, not alphabetical
        assert_eq!(card.cinemas.len(), 2);
        assert_eq!(card.cinemas[0].name, "Yes Planet");
        assert_eq!(card.cinemas[0].logo, Some("logos/fRW7ZRr.png"));
        assert_eq!(card.cinemas[1].name, "Drive-In");
        assert_eq!(card.cinemas[1].logo, None);
    }

    #[test]
    fn test_toggle_offered_only_with_showtimes() {
        let mut record = MovieRecord::new("Bare");
        assert_eq!(MovieCard::from_record(&record).toggle, None);

        record.screenings.insert("Cinema X".to_string(), vec![]);
        assert_eq!(MovieCard::from_record(&record).toggle, None);

        let card = MovieCard::from_record(&detailed_record());
        assert_eq!(card.toggle, Some(ToggleButton::Show));
        assert_eq!(card.toggle.map(ToggleButton::label), Some("Show Screenings"));
    }

    #[test]
    fn test_expanded_card_shows_showtimes() {
        let mut record = detailed_record();
        assert!(MovieCard::from_record(&record).visible_showtimes().is_empty());

        record.screenings_visible = true;
        let card = MovieCard::from_record(&record);
        assert_eq!(card.toggle, Some(ToggleButton::Hide));
        assert_eq!(card.visible_showtimes(), vec!["18:00", "20:30"]);
    }

    #[test]
    fn test_slide_overlay() {
        let mut engine = CarouselEngine::default();
        let mut rated = detailed_record();
        rated.duration = Some("2h 50m".to_string());
        engine.on_catalog_change(&[Arc::new(rated), Arc::new(MovieRecord::new("Unrated"))]);

        let view = CarouselView::from_engine(&engine);
        assert_eq!(view.slides.len(), 4);

        let heat = &view.slides[0];
        assert_eq!(heat.rating, "Rating: 89%");
        assert_eq!(heat.duration, "2h 50m");
        assert_eq!(heat.cinema_logos, vec!["logos/fRW7ZRr.png"]);

        let unrated = &view.slides[1];
        assert_eq!(unrated.rating, "Rating: N/A");
        assert_eq!(unrated.duration, "N/A");
        assert_eq!(unrated.genre, "N/A");

        assert_eq!(view.current().map(|s| s.title.as_str()), Some("Heat"));
        assert_eq!(view.indicators.len(), 2);
    }
}
