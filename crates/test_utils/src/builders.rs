//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults; tests
//! specify only the fields they care about.

use core_kernel::{DirectorId, StudioId};
use domain_catalogue::{Director, Movie, MovieGenre};

/// Builder for test directors
pub struct TestDirectorBuilder {
    name: String,
    birth_year: i32,
}

impl Default for TestDirectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDirectorBuilder {
    pub fn new() -> Self {
        Self {
            name: "Ann Lee".to_string(),
            birth_year: 1970,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_birth_year(mut self, birth_year: i32) -> Self {
        self.birth_year = birth_year;
        self
    }

    pub fn build(self) -> Director {
        Director::new(self.name, self.birth_year)
    }
}

/// Builder for test movies
pub struct TestMovieBuilder {
    title: String,
    year: i32,
    genre: MovieGenre,
    director_id: DirectorId,
    studio_id: Option<StudioId>,
}

impl Default for TestMovieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMovieBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test".to_string(),
            year: 2020,
            genre: MovieGenre::Drama,
            director_id: DirectorId::new(1),
            studio_id: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_genre(mut self, genre: MovieGenre) -> Self {
        self.genre = genre;
        self
    }

    pub fn with_director(mut self, director_id: DirectorId) -> Self {
        self.director_id = director_id;
        self
    }

    pub fn with_studio(mut self, studio_id: StudioId) -> Self {
        self.studio_id = Some(studio_id);
        self
    }

    pub fn build(self) -> Movie {
        let mut movie = Movie::new(self.title, self.year, self.genre, self.director_id);
        movie.studio_id = self.studio_id;
        movie
    }
}
