//! PostgreSQL Storage Module
//!
//! This crate provides the persistent storage module for the movie catalogue,
//! registered under the identifier `"postgres"`. It implements the repository
//! ports on PostgreSQL using SQLx and ships its schema as embedded
//! migrations, applied when the module registers.
//!
//! # Architecture
//!
//! Each repository encapsulates the SQL for one entity and maps between
//! database rows and domain types. Field validation runs through the same
//! domain validators as every other storage module; the database's unique and
//! foreign-key constraints are a backstop, translated back into the shared
//! port error taxonomy when they fire.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, PostgresModule};
//! use domain_catalogue::registry::{RegistryBuilder, StorageModule};
//!
//! let module = PostgresModule::new(DatabaseConfig::new("postgres://localhost/movies"));
//! let mut builder = RegistryBuilder::new();
//! module.register(&mut builder).await?;
//! ```

pub mod error;
pub mod module;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use module::{PostgresModule, MODULE_NAME};
pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use repositories::{PgDirectorRepository, PgMovieRepository, PgStudioRepository};

/// Embedded schema migrations, applied by the module on registration
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Applies any pending embedded migrations
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))
}
