//! Demo fixture data seeded by the memory module

use core_kernel::{DirectorId, MovieId, StudioId};
use domain_catalogue::{Director, Movie, MovieGenre, Studio};

pub(crate) fn directors() -> Vec<(i64, Director)> {
    seed_directors()
        .into_iter()
        .map(|d| (d.id.value(), d))
        .collect()
}

pub(crate) fn studios() -> Vec<(i64, Studio)> {
    seed_studios().into_iter().map(|s| (s.id.value(), s)).collect()
}

pub(crate) fn movies() -> Vec<(i64, Movie)> {
    seed_movies().into_iter().map(|m| (m.id.value(), m)).collect()
}

fn director(id: i64, name: &str, birth_year: i32) -> Director {
    Director {
        id: DirectorId::new(id),
        name: name.to_string(),
        birth_year,
    }
}

fn studio(id: i64, name: &str) -> Studio {
    Studio {
        id: StudioId::new(id),
        name: name.to_string(),
    }
}

fn movie(
    id: i64,
    title: &str,
    year: i32,
    genre: MovieGenre,
    director_id: i64,
    studio_id: Option<i64>,
) -> Movie {
    Movie {
        id: MovieId::new(id),
        title: title.to_string(),
        year,
        genre,
        director_id: DirectorId::new(director_id),
        studio_id: studio_id.map(StudioId::new),
    }
}

fn seed_directors() -> Vec<Director> {
    vec![
        director(1, "Lana & Lilly Wachowski", 1965),
        director(2, "Andrew Adamson", 1966),
        director(3, "Quentin Tarantino", 1963),
        director(4, "Christopher Nolan", 1970),
    ]
}

fn seed_studios() -> Vec<Studio> {
    vec![
        studio(1, "Warner Bros."),
        studio(2, "DreamWorks Pictures"),
        studio(3, "Miramax"),
    ]
}

fn seed_movies() -> Vec<Movie> {
    vec![
        movie(1, "The Matrix", 1999, MovieGenre::SciFi, 1, Some(1)),
        movie(2, "Shrek", 2001, MovieGenre::Animation, 2, Some(2)),
        movie(3, "Pulp Fiction", 1994, MovieGenre::Drama, 3, Some(3)),
        movie(4, "Inception", 2010, MovieGenre::SciFi, 4, Some(1)),
        movie(5, "The Dark Knight", 2008, MovieGenre::Action, 4, Some(1)),
    ]
}
