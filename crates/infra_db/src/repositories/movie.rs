//! Movie repository implementation
//!
//! `add`/`update` verify the movie's references with `SELECT EXISTS` probes
//! before writing, merging any misses into the field validation result, so
//! this module reports the same combined violations as the in-memory module.
//! The schema's foreign keys remain as a backstop for writes that race past
//! the probes.

use async_trait::async_trait;
use sqlx::PgPool;
use std::str::FromStr;

use core_kernel::{DirectorId, DomainPort, MovieId, PortError, StudioId};
use domain_catalogue::validation::{MovieValidator, ValidationResult};
use domain_catalogue::{Movie, MovieGenre, MovieRepository};

use crate::error::{is_pg_violation, port_error_from_sqlx, FOREIGN_KEY_VIOLATION};

/// Movie repository backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Field validation plus reference probes against the neighbouring tables
    async fn validate(&self, movie: &Movie) -> Result<(), PortError> {
        let mut result = MovieValidator::validate(movie);
        self.check_references(movie, &mut result).await?;
        result.into_result()
    }

    async fn check_references(
        &self,
        movie: &Movie,
        result: &mut ValidationResult,
    ) -> Result<(), PortError> {
        let director_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM directors WHERE id = $1)")
                .bind(movie.director_id.value())
                .fetch_one(&self.pool)
                .await
                .map_err(port_error_from_sqlx)?;
        if !director_exists {
            result.add(
                "director_id",
                format!("No director with id {}", movie.director_id),
            );
        }

        if let Some(studio_id) = movie.studio_id {
            let studio_exists =
                sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM studios WHERE id = $1)")
                    .bind(studio_id.value())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(port_error_from_sqlx)?;
            if !studio_exists {
                result.add("studio_id", format!("No studio with id {}", studio_id));
            }
        }

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct MovieRow {
    id: i64,
    title: String,
    release_year: i32,
    genre: String,
    director_id: i64,
    studio_id: Option<i64>,
}

impl TryFrom<MovieRow> for Movie {
    type Error = PortError;

    fn try_from(row: MovieRow) -> Result<Self, Self::Error> {
        let genre = MovieGenre::from_str(&row.genre)
            .map_err(|e| PortError::internal(format!("Corrupt genre column: {e}")))?;

        Ok(Movie {
            id: MovieId::new(row.id),
            title: row.title,
            year: row.release_year,
            genre,
            director_id: DirectorId::new(row.director_id),
            studio_id: row.studio_id.map(StudioId::new),
        })
    }
}

/// Maps foreign-key backstop failures on movie writes into the same
/// validation violations the probes would have produced
fn map_movie_write_error(error: sqlx::Error) -> PortError {
    if is_pg_violation(&error, FOREIGN_KEY_VIOLATION, Some("movies_director_id_fkey")) {
        return PortError::validation(vec![core_kernel::ConstraintViolation::new(
            "director_id",
            "No director with this id",
        )]);
    }
    if is_pg_violation(&error, FOREIGN_KEY_VIOLATION, Some("movies_studio_id_fkey")) {
        return PortError::validation(vec![core_kernel::ConstraintViolation::new(
            "studio_id",
            "No studio with this id",
        )]);
    }
    port_error_from_sqlx(error)
}

impl DomainPort for PgMovieRepository {}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn get_all(&self) -> Result<Vec<Movie>, PortError> {
        let rows = sqlx::query_as::<_, MovieRow>(
            "SELECT id, title, release_year, genre, director_id, studio_id \
             FROM movies ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(port_error_from_sqlx)?;

        rows.into_iter().map(Movie::try_from).collect()
    }

    async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>, PortError> {
        let row = sqlx::query_as::<_, MovieRow>(
            "SELECT id, title, release_year, genre, director_id, studio_id \
             FROM movies WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(port_error_from_sqlx)?;

        row.map(Movie::try_from).transpose()
    }

    async fn get_by_director_id(
        &self,
        director_id: DirectorId,
    ) -> Result<Vec<Movie>, PortError> {
        let rows = sqlx::query_as::<_, MovieRow>(
            "SELECT id, title, release_year, genre, director_id, studio_id \
             FROM movies WHERE director_id = $1 ORDER BY id",
        )
        .bind(director_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(port_error_from_sqlx)?;

        rows.into_iter().map(Movie::try_from).collect()
    }

    fn create_new(&self) -> Movie {
        Movie::blank()
    }

    async fn add(&self, movie: Movie) -> Result<Movie, PortError> {
        self.validate(&movie).await?;

        let row = sqlx::query_as::<_, MovieRow>(
            "INSERT INTO movies (title, release_year, genre, director_id, studio_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, title, release_year, genre, director_id, studio_id",
        )
        .bind(&movie.title)
        .bind(movie.year)
        .bind(movie.genre.as_str())
        .bind(movie.director_id.value())
        .bind(movie.studio_id.map(|s| s.value()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_movie_write_error)?;

        row.try_into()
    }

    async fn update(&self, movie: Movie) -> Result<Movie, PortError> {
        self.validate(&movie).await?;

        let row = sqlx::query_as::<_, MovieRow>(
            "UPDATE movies \
             SET title = $2, release_year = $3, genre = $4, director_id = $5, studio_id = $6 \
             WHERE id = $1 \
             RETURNING id, title, release_year, genre, director_id, studio_id",
        )
        .bind(movie.id.value())
        .bind(&movie.title)
        .bind(movie.year)
        .bind(movie.genre.as_str())
        .bind(movie.director_id.value())
        .bind(movie.studio_id.map(|s| s.value()))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_movie_write_error)?
        .ok_or_else(|| PortError::not_found("Movie", movie.id))?;

        row.try_into()
    }

    async fn delete(&self, id: MovieId) -> Result<(), PortError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(port_error_from_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Movie", id));
        }
        Ok(())
    }
}
