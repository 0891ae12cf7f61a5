//! Module Loader - Process-Startup Composition Root
//!
//! This crate wires the movie catalogue together at process start:
//!
//! 1. Load [`CatalogueConfig`] from the environment
//! 2. Initialise tracing
//! 3. Resolve the configured storage provider through the [`ModuleLoader`]
//!    and produce the process-wide repository [`Registry`]
//!
//! The rest of the system depends only on the repository ports; the storage
//! technology is chosen here, from configuration, without recompiling the
//! consuming services.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_catalogue::DirectorService;
//! use module_loader::bootstrap;
//!
//! let registry = bootstrap().await?;
//! let directors = DirectorService::new(&registry);
//! ```
//!
//! # Environment Variables
//!
//! * `CATALOGUE_STORAGE_PROVIDER` - storage module to activate: `memory` or
//!   `postgres` (required)
//! * `CATALOGUE_DATABASE_URL` - PostgreSQL connection string (required by
//!   the `postgres` module)
//! * `CATALOGUE_LOG_LEVEL` - log level: trace, debug, info, warn, error
//!   (default: info)

pub mod config;
pub mod loader;
pub mod telemetry;

pub use config::CatalogueConfig;
pub use loader::{LoadError, ModuleFactory, ModuleLoader};
pub use telemetry::init_tracing;

use domain_catalogue::Registry;

/// Loads configuration, initialises tracing, and resolves the storage module
///
/// The single startup entry point. Any error is fatal: the process must not
/// serve requests without a registry.
pub async fn bootstrap() -> Result<Registry, LoadError> {
    let config =
        CatalogueConfig::from_env().map_err(|e| LoadError::Configuration(e.to_string()))?;

    init_tracing(&config.log_level);

    ModuleLoader::builtin().load(&config).await
}
