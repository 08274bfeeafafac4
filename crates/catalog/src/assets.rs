//! Static logo and brand lookups.
//!
//! Reviewer and cinema names arrive as free text in the feed. The known
//! ones map to a logo resource, and reviewers additionally map to the
//! coarser brand used as the key into a record's `links`. Unknown names
//! simply have no logo and no link.

use crate::types::MovieRecord;

/// A scoring source we have artwork for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownReviewer {
    ImdbAudience,
    TheMovieDbAudience,
    MetacriticAudience,
    MetacriticCritic,
    LetterboxdAudience,
    TomatometerAudience,
    TomatometerCritic,
}

/// A cinema chain we have artwork for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownCinema {
    YesPlanet,
    HotCinema,
    CinemaCity,
    LevCinema,
}

impl KnownReviewer {
    #[cfg(test)]
    pub const ALL: [KnownReviewer; 7] = [
        KnownReviewer::ImdbAudience,
        KnownReviewer::TheMovieDbAudience,
        KnownReviewer::MetacriticAudience,
        KnownReviewer::MetacriticCritic,
        KnownReviewer::LetterboxdAudience,
        KnownReviewer::TomatometerAudience,
        KnownReviewer::TomatometerCritic,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "IMDB Audience Score" => Some(KnownReviewer::ImdbAudience),
            "TheMovieDB Audience Score" => Some(KnownReviewer::TheMovieDbAudience),
            "Metacritic Audience Score" => Some(KnownReviewer::MetacriticAudience),
            "Metacritic Critic Score" => Some(KnownReviewer::MetacriticCritic),
            "Letterboxd Audience Score" => Some(KnownReviewer::LetterboxdAudience),
            "Tomatometer Audience Score" => Some(KnownReviewer::TomatometerAudience),
            "Tomatometer Critic Score" => Some(KnownReviewer::TomatometerCritic),
            _ => None,
        }
    }

    /// The reviewer key as it appears in the feed
    #[cfg(test)]
    pub fn name(self) -> &'static str {
        match self {
            KnownReviewer::ImdbAudience => "IMDB Audience Score",
            KnownReviewer::TheMovieDbAudience => "TheMovieDB Audience Score",
            KnownReviewer::MetacriticAudience => "Metacritic Audience Score",
            KnownReviewer::MetacriticCritic => "Metacritic Critic Score",
            KnownReviewer::LetterboxdAudience => "Letterboxd Audience Score",
            KnownReviewer::TomatometerAudience => "Tomatometer Audience Score",
            KnownReviewer::TomatometerCritic => "Tomatometer Critic Score",
        }
    }

    /// Brand key into `MovieRecord::links`
    pub fn brand(self) -> &'static str {
        match self {
            KnownReviewer::ImdbAudience => "IMDB",
            KnownReviewer::TheMovieDbAudience => "TheMovieDB",
            KnownReviewer::MetacriticAudience | KnownReviewer::MetacriticCritic => "Metacritic",
            KnownReviewer::LetterboxdAudience => "Letterboxd",
            KnownReviewer::TomatometerAudience | KnownReviewer::TomatometerCritic => {
                "Tomatometer"
            }
        }
    }

    pub fn logo(self) -> &'static str {
        match self {
            KnownReviewer::ImdbAudience => "logos/6C7nVMS.png",
            KnownReviewer::TheMovieDbAudience => "logos/M63ZHXb.png",
            KnownReviewer::MetacriticAudience | KnownReviewer::MetacriticCritic => {
                "logos/Agep5Se.png"
            }
            KnownReviewer::LetterboxdAudience => "logos/7Nt6BUb.png",
            KnownReviewer::TomatometerAudience | KnownReviewer::TomatometerCritic => {
                "logos/AGJ7mEy.png"
            }
        }
    }
}

impl KnownCinema {
    #[cfg(test)]
    pub const ALL: [KnownCinema; 4] = [
        KnownCinema::YesPlanet,
        KnownCinema::HotCinema,
        KnownCinema::CinemaCity,
        KnownCinema::LevCinema,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Yes Planet" => Some(KnownCinema::YesPlanet),
            "Hot Cinema" => Some(KnownCinema::HotCinema),
            "Cinema City" => Some(KnownCinema::CinemaCity),
            "Lev Cinema" => Some(KnownCinema::LevCinema),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn name(self) -> &'static str {
        match self {
            KnownCinema::YesPlanet => "Yes Planet",
            KnownCinema::HotCinema => "Hot Cinema",
            KnownCinema::CinemaCity => "Cinema City",
            KnownCinema::LevCinema => "Lev Cinema",
        }
    }

    pub fn logo(self) -> &'static str {
        match self {
            KnownCinema::YesPlanet => "logos/fRW7ZRr.png",
            KnownCinema::HotCinema => "logos/eMeib2P.png",
            KnownCinema::CinemaCity => "logos/dHSZEvt.png",
            KnownCinema::LevCinema => "logos/PZhmbnM.png",
        }
    }
}

/// Logo for a reviewer or cinema name, if we have one
pub fn logo_for(name: &str) -> Option<&'static str> {
    KnownReviewer::from_name(name)
        .map(KnownReviewer::logo)
        .or_else(|| KnownCinema::from_name(name).map(KnownCinema::logo))
}

/// Outbound link for a reviewer's logo, via the reviewer's brand
pub fn reviewer_link<'a>(record: &'a MovieRecord, reviewer: &str) -> Option<&'a str> {
    let brand = KnownReviewer::from_name(reviewer)?.brand();
    record.links.get(brand).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for reviewer in KnownReviewer::ALL {
            assert_eq!(KnownReviewer::from_name(reviewer.name()), Some(reviewer));
        }
        for cinema in KnownCinema::ALL {
            assert_eq!(KnownCinema::from_name(cinema.name()), Some(cinema));
        }
    }

    #[test]
    fn test_critic_and_audience_share_brand_and_logo() {
        let audience = KnownReviewer::MetacriticAudience;
        let critic = KnownReviewer::MetacriticCritic;
        assert_eq!(audience.brand(), critic.brand());
        assert_eq!(audience.logo(), critic.logo());
    }

    #[test]
    fn test_unknown_names_have_no_logo() {
        assert_eq!(logo_for("Some Blog Score"), None);
        assert_eq!(logo_for("Drive-In 7"), None);
        assert_eq!(logo_for("Yes Planet"), Some("logos/fRW7ZRr.png"));
    }

    #[test]
    fn test_reviewer_link_uses_brand() {
        let mut record = MovieRecord::new("A");
        record
            .links
            .insert("Tomatometer".to_string(), "https://rt.example/a".to_string());

        assert_eq!(
            reviewer_link(&record, "Tomatometer Critic Score"),
            Some("https://rt.example/a")
        );
        assert_eq!(reviewer_link(&record, "IMDB Audience Score"), None);
        assert_eq!(reviewer_link(&record, "Unknown Score"), None);
    }
}
