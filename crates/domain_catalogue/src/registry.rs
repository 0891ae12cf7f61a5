//! Storage module registry
//!
//! This module defines the contract between the catalogue and its swappable
//! storage back-ends. A storage module is a self-contained unit that binds
//! one concrete implementation per repository port; exactly one module is
//! active per process.
//!
//! # Architecture
//!
//! ```text
//! configuration ──▶ ModuleLoader ──▶ StorageModule::register
//!                                          │
//!                                          ▼
//!                                   RegistryBuilder ──▶ Registry
//!                                                          │
//!                                                          ▼
//!                                                   Domain Services
//! ```
//!
//! Each module exposes a single well-known entry point
//! ([`StorageModule::register`]) rather than being discovered by scanning a
//! loaded artifact; this keeps the failure modes enumerable. The builder
//! rejects incomplete registrations, and the resulting [`Registry`] is
//! immutable for the remainder of the process.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::ports::{DirectorRepository, MovieRepository, StudioRepository};

/// Errors a storage module can raise while registering its repositories
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The module could not construct its backing store (e.g. a connection
    /// pool could not be established)
    #[error("Module initialisation failed: {0}")]
    Init(String),

    /// The module registered only a subset of the repository ports
    #[error("Storage module left repository bindings incomplete: {}", .missing.join(", "))]
    IncompleteBindings { missing: Vec<&'static str> },
}

impl ModuleError {
    pub fn init(message: impl Into<String>) -> Self {
        ModuleError::Init(message.into())
    }
}

/// A swappable unit supplying concrete repository implementations
///
/// Implemented once per storage technology. The module loader resolves the
/// configured identifier to a module, then calls [`register`] exactly once to
/// populate a [`RegistryBuilder`].
///
/// [`register`]: StorageModule::register
#[async_trait]
pub trait StorageModule: Send + Sync {
    /// Identifier the loader matches against configuration
    fn name(&self) -> &'static str;

    /// Binds one concrete implementation per repository port
    async fn register(&self, builder: &mut RegistryBuilder) -> Result<(), ModuleError>;
}

/// Collects the repository bindings a storage module supplies
#[derive(Default)]
pub struct RegistryBuilder {
    directors: Option<Arc<dyn DirectorRepository>>,
    movies: Option<Arc<dyn MovieRepository>>,
    studios: Option<Arc<dyn StudioRepository>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_directors(&mut self, repository: Arc<dyn DirectorRepository>) -> &mut Self {
        self.directors = Some(repository);
        self
    }

    pub fn bind_movies(&mut self, repository: Arc<dyn MovieRepository>) -> &mut Self {
        self.movies = Some(repository);
        self
    }

    pub fn bind_studios(&mut self, repository: Arc<dyn StudioRepository>) -> &mut Self {
        self.studios = Some(repository);
        self
    }

    /// Seals the bindings into an immutable [`Registry`]
    ///
    /// # Errors
    ///
    /// `ModuleError::IncompleteBindings` naming every missing port when the
    /// module did not bind all three repositories.
    pub fn build(self, provider: impl Into<String>) -> Result<Registry, ModuleError> {
        let mut missing = Vec::new();
        if self.directors.is_none() {
            missing.push("directors");
        }
        if self.movies.is_none() {
            missing.push("movies");
        }
        if self.studios.is_none() {
            missing.push("studios");
        }

        let (Some(directors), Some(movies), Some(studios)) =
            (self.directors, self.movies, self.studios)
        else {
            return Err(ModuleError::IncompleteBindings { missing });
        };

        Ok(Registry {
            provider: provider.into(),
            directors,
            movies,
            studios,
        })
    }
}

/// Immutable, once-built mapping from repository contract to the active
/// concrete implementation
///
/// Built by the module loader during process startup and read-only
/// afterwards; cloning shares the underlying implementations.
#[derive(Clone)]
pub struct Registry {
    provider: String,
    directors: Arc<dyn DirectorRepository>,
    movies: Arc<dyn MovieRepository>,
    studios: Arc<dyn StudioRepository>,
}

impl Registry {
    /// Identifier of the storage module that produced this registry
    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn directors(&self) -> Arc<dyn DirectorRepository> {
        Arc::clone(&self.directors)
    }

    pub fn movies(&self) -> Arc<dyn MovieRepository> {
        Arc::clone(&self.movies)
    }

    pub fn studios(&self) -> Arc<dyn StudioRepository> {
        Arc::clone(&self.studios)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::{MockDirectorRepository, MockMovieRepository, MockStudioRepository};

    #[test]
    fn test_complete_builder_produces_registry() {
        let mut builder = RegistryBuilder::new();
        builder
            .bind_directors(Arc::new(MockDirectorRepository::new()))
            .bind_movies(Arc::new(MockMovieRepository::new()))
            .bind_studios(Arc::new(MockStudioRepository::new()));

        let registry = builder.build("memory").unwrap();
        assert_eq!(registry.provider(), "memory");
    }

    #[test]
    fn test_empty_builder_reports_every_missing_binding() {
        let result = RegistryBuilder::new().build("test");
        match result {
            Err(ModuleError::IncompleteBindings { missing }) => {
                assert_eq!(missing, vec!["directors", "movies", "studios"]);
            }
            other => panic!("expected IncompleteBindings, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_partial_builder_names_the_gap() {
        let mut builder = RegistryBuilder::new();
        builder.bind_directors(Arc::new(MockDirectorRepository::new()));
        builder.bind_movies(Arc::new(MockMovieRepository::new()));

        match builder.build("test") {
            Err(ModuleError::IncompleteBindings { missing }) => {
                assert_eq!(missing, vec!["studios"]);
            }
            other => panic!("expected IncompleteBindings, got {:?}", other.map(|_| ())),
        }
    }
}
