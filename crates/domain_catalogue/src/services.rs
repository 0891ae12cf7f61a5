//! Catalogue domain services
//!
//! Services sit between the (out-of-scope) presentation layer and the
//! repository ports and enforce the invariants a single repository cannot
//! express:
//!
//! 1. No two directors share both name and birth year.
//! 2. A director referenced by at least one movie cannot be deleted.
//!
//! Storage-level errors (`NotFound`, `Validation`) propagate unchanged;
//! `Conflict` and `Integrity` originate here. Services are stateless between
//! calls; all state lives in the resolved repositories, so a service must not
//! be constructed before the module loader has produced a [`Registry`].

use std::sync::Arc;

use core_kernel::{DirectorId, MovieId, PortError, StudioId};

use crate::director::Director;
use crate::movie::Movie;
use crate::ports::{DirectorRepository, MovieRepository, StudioRepository};
use crate::registry::Registry;
use crate::studio::Studio;

/// Service for director operations, guarding the uniqueness and delete-time
/// dependency invariants
#[derive(Clone)]
pub struct DirectorService {
    directors: Arc<dyn DirectorRepository>,
    movies: Arc<dyn MovieRepository>,
}

impl DirectorService {
    pub fn new(registry: &Registry) -> Self {
        Self::from_ports(registry.directors(), registry.movies())
    }

    /// Wires the service directly to repository implementations; used by
    /// tests that bypass the loader
    pub fn from_ports(
        directors: Arc<dyn DirectorRepository>,
        movies: Arc<dyn MovieRepository>,
    ) -> Self {
        Self { directors, movies }
    }

    pub async fn get_all(&self) -> Result<Vec<Director>, PortError> {
        self.directors.get_all().await
    }

    pub async fn get_by_id(&self, id: DirectorId) -> Result<Option<Director>, PortError> {
        self.directors.get_by_id(id).await
    }

    pub fn create_new(&self) -> Director {
        self.directors.create_new()
    }

    /// Persists a new director
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` when a director with the same name and birth
    /// year is already catalogued; otherwise whatever the repository raises.
    pub async fn add(&self, director: Director) -> Result<Director, PortError> {
        if self
            .directors
            .exists(Some(&director.name), Some(director.birth_year))
            .await?
        {
            return Err(PortError::conflict(format!(
                "Director '{}' (born {}) is already in the catalogue",
                director.name, director.birth_year
            )));
        }

        self.directors.add(director).await
    }

    /// Replaces a stored director's fields
    ///
    /// The uniqueness check excludes the record's own prior state: it only
    /// runs when the (name, birth year) pair actually changed, so saving a
    /// record back unmodified never conflicts with itself.
    pub async fn update(&self, director: Director) -> Result<Director, PortError> {
        if let Some(current) = self.directors.get_by_id(director.id).await? {
            let identity_changed =
                current.name != director.name || current.birth_year != director.birth_year;
            if identity_changed
                && self
                    .directors
                    .exists(Some(&director.name), Some(director.birth_year))
                    .await?
            {
                return Err(PortError::conflict(format!(
                    "Director '{}' (born {}) is already in the catalogue",
                    director.name, director.birth_year
                )));
            }
        }

        // An absent id falls through to the repository, which raises NotFound
        self.directors.update(director).await
    }

    /// Removes a director that no movie references
    ///
    /// # Errors
    ///
    /// `PortError::Integrity` when at least one movie still credits the
    /// director; `PortError::NotFound` when the id does not exist.
    pub async fn delete(&self, id: DirectorId) -> Result<(), PortError> {
        let dependents = self.movies.get_by_director_id(id).await?;
        if !dependents.is_empty() {
            return Err(PortError::integrity(format!(
                "Cannot delete {}: {} movie(s) still reference it",
                id,
                dependents.len()
            )));
        }

        self.directors.delete(id).await
    }
}

/// Service for movie operations
///
/// Pure pass-through: the movie's director and studio references are
/// validated by the storage layer, uniformly across back-ends, so the check
/// is not duplicated here.
#[derive(Clone)]
pub struct MovieService {
    movies: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(registry: &Registry) -> Self {
        Self {
            movies: registry.movies(),
        }
    }

    pub fn from_ports(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    pub async fn get_all(&self) -> Result<Vec<Movie>, PortError> {
        self.movies.get_all().await
    }

    pub async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>, PortError> {
        self.movies.get_by_id(id).await
    }

    pub async fn get_by_director_id(
        &self,
        director_id: DirectorId,
    ) -> Result<Vec<Movie>, PortError> {
        self.movies.get_by_director_id(director_id).await
    }

    pub fn create_new(&self) -> Movie {
        self.movies.create_new()
    }

    pub async fn add(&self, movie: Movie) -> Result<Movie, PortError> {
        self.movies.add(movie).await
    }

    pub async fn update(&self, movie: Movie) -> Result<Movie, PortError> {
        self.movies.update(movie).await
    }

    pub async fn delete(&self, id: MovieId) -> Result<(), PortError> {
        self.movies.delete(id).await
    }
}

/// Service for studio operations; pass-through, no additional invariants
#[derive(Clone)]
pub struct StudioService {
    studios: Arc<dyn StudioRepository>,
}

impl StudioService {
    pub fn new(registry: &Registry) -> Self {
        Self {
            studios: registry.studios(),
        }
    }

    pub fn from_ports(studios: Arc<dyn StudioRepository>) -> Self {
        Self { studios }
    }

    pub async fn get_all(&self) -> Result<Vec<Studio>, PortError> {
        self.studios.get_all().await
    }

    pub async fn get_by_id(&self, id: StudioId) -> Result<Option<Studio>, PortError> {
        self.studios.get_by_id(id).await
    }

    pub fn create_new(&self) -> Studio {
        self.studios.create_new()
    }

    pub async fn add(&self, studio: Studio) -> Result<Studio, PortError> {
        self.studios.add(studio).await
    }

    pub async fn update(&self, studio: Studio) -> Result<Studio, PortError> {
        self.studios.update(studio).await
    }

    pub async fn delete(&self, id: StudioId) -> Result<(), PortError> {
        self.studios.delete(id).await
    }
}
