//! Movie entity and genre classification

use chrono::{Datelike, Utc};
use core_kernel::{DirectorId, MovieId, StudioId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of genres a movie can be catalogued under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieGenre {
    Action,
    Comedy,
    Drama,
    Horror,
    SciFi,
    Thriller,
    Animation,
    Documentary,
}

impl MovieGenre {
    /// Every genre, in display order
    pub const ALL: [MovieGenre; 8] = [
        MovieGenre::Action,
        MovieGenre::Comedy,
        MovieGenre::Drama,
        MovieGenre::Horror,
        MovieGenre::SciFi,
        MovieGenre::Thriller,
        MovieGenre::Animation,
        MovieGenre::Documentary,
    ];

    /// Stable string form used by persistent storage
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieGenre::Action => "action",
            MovieGenre::Comedy => "comedy",
            MovieGenre::Drama => "drama",
            MovieGenre::Horror => "horror",
            MovieGenre::SciFi => "sci_fi",
            MovieGenre::Thriller => "thriller",
            MovieGenre::Animation => "animation",
            MovieGenre::Documentary => "documentary",
        }
    }
}

impl Default for MovieGenre {
    fn default() -> Self {
        MovieGenre::Action
    }
}

impl fmt::Display for MovieGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown genre string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown movie genre: {0}")]
pub struct UnknownGenre(pub String);

impl FromStr for MovieGenre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MovieGenre::ALL
            .iter()
            .copied()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

/// A movie catalogued by the system
///
/// A movie owns its relationships: `director_id` must resolve to an existing
/// director at add/update time, and `studio_id`, when present, must resolve
/// to an existing studio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Storage-assigned identity; `UNASSIGNED` until persisted
    pub id: MovieId,
    /// Non-empty title
    pub title: String,
    /// Release year
    pub year: i32,
    pub genre: MovieGenre,
    /// Directing credit; foreign reference to an existing director
    pub director_id: DirectorId,
    /// Producing studio, if catalogued
    pub studio_id: Option<StudioId>,
}

impl Movie {
    /// Creates an unpersisted movie with the given fields
    pub fn new(
        title: impl Into<String>,
        year: i32,
        genre: MovieGenre,
        director_id: DirectorId,
    ) -> Self {
        Self {
            id: MovieId::UNASSIGNED,
            title: title.into(),
            year,
            genre,
            director_id,
            studio_id: None,
        }
    }

    /// Defaulted blank record backing the repository `create_new` factories;
    /// the release year defaults to the current year
    pub fn blank() -> Self {
        Self {
            id: MovieId::UNASSIGNED,
            title: String::new(),
            year: Utc::now().year(),
            genre: MovieGenre::default(),
            director_id: DirectorId::UNASSIGNED,
            studio_id: None,
        }
    }

    /// Attaches a producing studio
    pub fn with_studio(mut self, studio_id: StudioId) -> Self {
        self.studio_id = Some(studio_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_string_round_trip() {
        for genre in MovieGenre::ALL {
            let parsed: MovieGenre = genre.as_str().parse().unwrap();
            assert_eq!(parsed, genre);
        }
    }

    #[test]
    fn test_unknown_genre_rejected() {
        let result = "musical".parse::<MovieGenre>();
        assert_eq!(result, Err(UnknownGenre("musical".to_string())));
    }

    #[test]
    fn test_blank_defaults() {
        let movie = Movie::blank();
        assert_eq!(movie.id, MovieId::UNASSIGNED);
        assert_eq!(movie.year, Utc::now().year());
        assert_eq!(movie.genre, MovieGenre::Action);
        assert!(movie.studio_id.is_none());
    }
}
