//! In-memory movie repository
//!
//! Besides the field-level checks, `add`/`update` verify the movie's
//! references against the neighbouring tables: the director must exist and
//! the studio, when given, must exist. The violations are merged into the
//! same validation error so a caller sees every problem at once.

use async_trait::async_trait;

use core_kernel::{DirectorId, DomainPort, MovieId, PortError};
use domain_catalogue::validation::{MovieValidator, ValidationResult};
use domain_catalogue::{Director, Movie, MovieRepository, Studio};

use crate::table::SharedTable;

/// Movie repository backed by a locked in-process table, with read access to
/// the director and studio tables for reference checks
#[derive(Clone)]
pub struct MemoryMovieRepository {
    movies: SharedTable<Movie>,
    directors: SharedTable<Director>,
    studios: SharedTable<Studio>,
}

impl MemoryMovieRepository {
    pub(crate) fn new(
        movies: SharedTable<Movie>,
        directors: SharedTable<Director>,
        studios: SharedTable<Studio>,
    ) -> Self {
        Self {
            movies,
            directors,
            studios,
        }
    }

    /// Field validation plus reference checks; lock order is directors,
    /// studios, movies
    async fn validate(&self, movie: &Movie) -> Result<(), PortError> {
        let mut result = MovieValidator::validate(movie);
        self.check_references(movie, &mut result).await;
        result.into_result()
    }

    async fn check_references(&self, movie: &Movie, result: &mut ValidationResult) {
        if !self
            .directors
            .read()
            .await
            .contains(movie.director_id.value())
        {
            result.add(
                "director_id",
                format!("No director with id {}", movie.director_id),
            );
        }

        if let Some(studio_id) = movie.studio_id {
            if !self.studios.read().await.contains(studio_id.value()) {
                result.add("studio_id", format!("No studio with id {}", studio_id));
            }
        }
    }
}

impl DomainPort for MemoryMovieRepository {}

#[async_trait]
impl MovieRepository for MemoryMovieRepository {
    async fn get_all(&self) -> Result<Vec<Movie>, PortError> {
        Ok(self.movies.read().await.all())
    }

    async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>, PortError> {
        Ok(self.movies.read().await.get(id.value()))
    }

    async fn get_by_director_id(
        &self,
        director_id: DirectorId,
    ) -> Result<Vec<Movie>, PortError> {
        Ok(self
            .movies
            .read()
            .await
            .filter(|m| m.director_id == director_id))
    }

    fn create_new(&self) -> Movie {
        Movie::blank()
    }

    async fn add(&self, movie: Movie) -> Result<Movie, PortError> {
        self.validate(&movie).await?;

        let mut table = self.movies.write().await;
        Ok(table.insert_next(movie, |row, id| row.id = MovieId::new(id)))
    }

    async fn update(&self, movie: Movie) -> Result<Movie, PortError> {
        self.validate(&movie).await?;

        let mut table = self.movies.write().await;
        if !table.contains(movie.id.value()) {
            return Err(PortError::not_found("Movie", movie.id));
        }
        table.replace(movie.id.value(), movie.clone());
        Ok(movie)
    }

    async fn delete(&self, id: MovieId) -> Result<(), PortError> {
        self.movies
            .write()
            .await
            .remove(id.value())
            .map(|_| ())
            .ok_or_else(|| PortError::not_found("Movie", id))
    }
}
