//! Catalogue Domain
//!
//! This crate holds everything the movie catalogue knows independently of
//! storage technology:
//!
//! - Entity types: [`Director`], [`Movie`] (with [`MovieGenre`]), [`Studio`]
//! - Explicit per-entity validators invoked by every storage module
//! - Repository port traits, one per entity
//! - The storage-module contract and the immutable repository [`Registry`]
//! - Domain services enforcing the cross-entity invariants
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_catalogue::{DirectorService, MovieService};
//!
//! // The loader has produced a registry at startup
//! let directors = DirectorService::new(&registry);
//!
//! let mut director = directors.create_new();
//! director.name = "Ann Lee".to_string();
//! director.birth_year = 1970;
//!
//! let persisted = directors.add(director).await?;
//! assert!(persisted.id.is_assigned());
//! ```

pub mod director;
pub mod movie;
pub mod ports;
pub mod registry;
pub mod services;
pub mod studio;
pub mod validation;

pub use director::Director;
pub use movie::{Movie, MovieGenre, UnknownGenre};
pub use ports::{DirectorRepository, MovieRepository, StudioRepository};
pub use registry::{ModuleError, Registry, RegistryBuilder, StorageModule};
pub use services::{DirectorService, MovieService, StudioService};
pub use studio::Studio;
pub use validation::{
    DirectorValidator, MovieValidator, StudioValidator, ValidationResult,
    DIRECTOR_MIN_BIRTH_YEAR, DIRECTOR_NAME_MAX_LEN, DIRECTOR_NAME_MIN_LEN,
};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockDirectorRepository, MockMovieRepository, MockStudioRepository};
