//! Catalogue repository ports
//!
//! This module defines the port interfaces the catalogue domain needs from
//! its data source, one per entity. Multiple storage modules implement these
//! traits:
//!
//! - **Memory module** (`infra_mem`): seeded in-process tables for demos and
//!   tests
//! - **PostgreSQL module** (`infra_db`): persistent storage via SQLx
//!
//! Callers must observe identical externally visible behaviour regardless of
//! which module is active; the contracts below are the single source of truth
//! for that behaviour.
//!
//! # Usage
//!
//! Application services receive the port traits behind `Arc`:
//!
//! ```rust,ignore
//! use domain_catalogue::ports::DirectorRepository;
//! use std::sync::Arc;
//!
//! pub struct DirectorService {
//!     directors: Arc<dyn DirectorRepository>,
//! }
//! ```
//!
//! The concrete implementation behind the `Arc` is chosen once at startup by
//! the module loader, never by the consuming code.

use async_trait::async_trait;

use core_kernel::{DirectorId, DomainPort, MovieId, PortError, StudioId};

use crate::director::Director;
use crate::movie::Movie;
use crate::studio::Studio;

/// Port trait for director storage
///
/// # Contract
///
/// - `add` validates the record, assigns the next identity, and returns the
///   persisted record; callers never pick identities.
/// - `update` requires the identity to exist and re-validates before
///   replacing fields in place; on validation failure the stored record is
///   left unchanged.
/// - `get_all` returns directors ordered by ascending identity.
#[async_trait]
pub trait DirectorRepository: DomainPort {
    async fn get_all(&self) -> Result<Vec<Director>, PortError>;

    async fn get_by_id(&self, id: DirectorId) -> Result<Option<Director>, PortError>;

    /// Defaulted blank record, not yet persisted
    fn create_new(&self) -> Director;

    async fn add(&self, director: Director) -> Result<Director, PortError>;

    async fn update(&self, director: Director) -> Result<Director, PortError>;

    async fn delete(&self, id: DirectorId) -> Result<(), PortError>;

    /// True when any director matches every supplied filter; filters are
    /// AND-ed, an absent filter matches everything
    async fn exists(&self, name: Option<&str>, birth_year: Option<i32>)
        -> Result<bool, PortError>;
}

/// Port trait for movie storage
///
/// In addition to the common CRUD contract, every implementation enforces the
/// movie's references as part of `add`/`update` validation: `director_id`
/// must resolve to an existing director and `studio_id`, when present, to an
/// existing studio. Database-level foreign keys are a backstop, not the
/// primary guarantee.
#[async_trait]
pub trait MovieRepository: DomainPort {
    async fn get_all(&self) -> Result<Vec<Movie>, PortError>;

    async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>, PortError>;

    /// Movies credited to the given director, ordered by ascending identity
    async fn get_by_director_id(&self, director_id: DirectorId)
        -> Result<Vec<Movie>, PortError>;

    /// Defaulted blank record, not yet persisted
    fn create_new(&self) -> Movie;

    async fn add(&self, movie: Movie) -> Result<Movie, PortError>;

    async fn update(&self, movie: Movie) -> Result<Movie, PortError>;

    async fn delete(&self, id: MovieId) -> Result<(), PortError>;
}

/// Port trait for studio storage
#[async_trait]
pub trait StudioRepository: DomainPort {
    async fn get_all(&self) -> Result<Vec<Studio>, PortError>;

    async fn get_by_id(&self, id: StudioId) -> Result<Option<Studio>, PortError>;

    /// Defaulted blank record, not yet persisted
    fn create_new(&self) -> Studio;

    async fn add(&self, studio: Studio) -> Result<Studio, PortError>;

    async fn update(&self, studio: Studio) -> Result<Studio, PortError>;

    async fn delete(&self, id: StudioId) -> Result<(), PortError>;
}

/// Minimal in-memory mocks for exercising the domain services without a
/// storage module. The real fixture-seeded memory implementation lives in
/// `infra_mem`; these mocks only honour the parts of the contract the
/// services rely on.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use crate::validation::{DirectorValidator, MovieValidator, StudioValidator};
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[derive(Debug)]
    pub struct MockDirectorRepository {
        rows: Arc<RwLock<BTreeMap<i64, Director>>>,
        next_id: Arc<RwLock<i64>>,
    }

    impl MockDirectorRepository {
        pub fn new() -> Self {
            Self {
                rows: Arc::default(),
                next_id: Arc::new(RwLock::new(1)),
            }
        }
    }

    impl DomainPort for MockDirectorRepository {}

    #[async_trait]
    impl DirectorRepository for MockDirectorRepository {
        async fn get_all(&self) -> Result<Vec<Director>, PortError> {
            Ok(self.rows.read().await.values().cloned().collect())
        }

        async fn get_by_id(&self, id: DirectorId) -> Result<Option<Director>, PortError> {
            Ok(self.rows.read().await.get(&id.value()).cloned())
        }

        fn create_new(&self) -> Director {
            Director::blank()
        }

        async fn add(&self, mut director: Director) -> Result<Director, PortError> {
            DirectorValidator::validate(&director).into_result()?;
            let mut next_id = self.next_id.write().await;
            director.id = DirectorId::new(*next_id);
            *next_id += 1;
            self.rows
                .write()
                .await
                .insert(director.id.value(), director.clone());
            Ok(director)
        }

        async fn update(&self, director: Director) -> Result<Director, PortError> {
            DirectorValidator::validate(&director).into_result()?;
            let mut rows = self.rows.write().await;
            if !rows.contains_key(&director.id.value()) {
                return Err(PortError::not_found("Director", director.id));
            }
            rows.insert(director.id.value(), director.clone());
            Ok(director)
        }

        async fn delete(&self, id: DirectorId) -> Result<(), PortError> {
            self.rows
                .write()
                .await
                .remove(&id.value())
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Director", id))
        }

        async fn exists(
            &self,
            name: Option<&str>,
            birth_year: Option<i32>,
        ) -> Result<bool, PortError> {
            Ok(self.rows.read().await.values().any(|d| {
                name.map_or(true, |n| d.name == n)
                    && birth_year.map_or(true, |y| d.birth_year == y)
            }))
        }
    }

    #[derive(Debug)]
    pub struct MockMovieRepository {
        rows: Arc<RwLock<BTreeMap<i64, Movie>>>,
        next_id: Arc<RwLock<i64>>,
    }

    impl MockMovieRepository {
        pub fn new() -> Self {
            Self {
                rows: Arc::default(),
                next_id: Arc::new(RwLock::new(1)),
            }
        }
    }

    impl DomainPort for MockMovieRepository {}

    #[async_trait]
    impl MovieRepository for MockMovieRepository {
        async fn get_all(&self) -> Result<Vec<Movie>, PortError> {
            Ok(self.rows.read().await.values().cloned().collect())
        }

        async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>, PortError> {
            Ok(self.rows.read().await.get(&id.value()).cloned())
        }

        async fn get_by_director_id(
            &self,
            director_id: DirectorId,
        ) -> Result<Vec<Movie>, PortError> {
            Ok(self
                .rows
                .read()
                .await
                .values()
                .filter(|m| m.director_id == director_id)
                .cloned()
                .collect())
        }

        fn create_new(&self) -> Movie {
            Movie::blank()
        }

        async fn add(&self, mut movie: Movie) -> Result<Movie, PortError> {
            MovieValidator::validate(&movie).into_result()?;
            let mut next_id = self.next_id.write().await;
            movie.id = MovieId::new(*next_id);
            *next_id += 1;
            self.rows.write().await.insert(movie.id.value(), movie.clone());
            Ok(movie)
        }

        async fn update(&self, movie: Movie) -> Result<Movie, PortError> {
            MovieValidator::validate(&movie).into_result()?;
            let mut rows = self.rows.write().await;
            if !rows.contains_key(&movie.id.value()) {
                return Err(PortError::not_found("Movie", movie.id));
            }
            rows.insert(movie.id.value(), movie.clone());
            Ok(movie)
        }

        async fn delete(&self, id: MovieId) -> Result<(), PortError> {
            self.rows
                .write()
                .await
                .remove(&id.value())
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Movie", id))
        }
    }

    #[derive(Debug)]
    pub struct MockStudioRepository {
        rows: Arc<RwLock<BTreeMap<i64, Studio>>>,
        next_id: Arc<RwLock<i64>>,
    }

    impl MockStudioRepository {
        pub fn new() -> Self {
            Self {
                rows: Arc::default(),
                next_id: Arc::new(RwLock::new(1)),
            }
        }
    }

    impl DomainPort for MockStudioRepository {}

    #[async_trait]
    impl StudioRepository for MockStudioRepository {
        async fn get_all(&self) -> Result<Vec<Studio>, PortError> {
            Ok(self.rows.read().await.values().cloned().collect())
        }

        async fn get_by_id(&self, id: StudioId) -> Result<Option<Studio>, PortError> {
            Ok(self.rows.read().await.get(&id.value()).cloned())
        }

        fn create_new(&self) -> Studio {
            Studio::blank()
        }

        async fn add(&self, mut studio: Studio) -> Result<Studio, PortError> {
            StudioValidator::validate(&studio).into_result()?;
            let mut next_id = self.next_id.write().await;
            studio.id = StudioId::new(*next_id);
            *next_id += 1;
            self.rows
                .write()
                .await
                .insert(studio.id.value(), studio.clone());
            Ok(studio)
        }

        async fn update(&self, studio: Studio) -> Result<Studio, PortError> {
            StudioValidator::validate(&studio).into_result()?;
            let mut rows = self.rows.write().await;
            if !rows.contains_key(&studio.id.value()) {
                return Err(PortError::not_found("Studio", studio.id));
            }
            rows.insert(studio.id.value(), studio.clone());
            Ok(studio)
        }

        async fn delete(&self, id: StudioId) -> Result<(), PortError> {
            self.rows
                .write()
                .await
                .remove(&id.value())
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Studio", id))
        }
    }
}
