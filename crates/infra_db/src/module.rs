//! PostgreSQL storage module registration

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use domain_catalogue::registry::{ModuleError, RegistryBuilder, StorageModule};

use crate::pool::{create_pool, DatabaseConfig};
use crate::repositories::{PgDirectorRepository, PgMovieRepository, PgStudioRepository};
use crate::run_migrations;

/// Identifier the module loader resolves from configuration
pub const MODULE_NAME: &str = "postgres";

/// The PostgreSQL storage module
///
/// Registration connects the pool, applies the embedded migrations, and binds
/// one repository per port. Connection or migration failures surface as
/// `ModuleError::Init`, which the loader reports as a fatal startup error.
#[derive(Debug, Clone)]
pub struct PostgresModule {
    config: DatabaseConfig,
}

impl PostgresModule {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Module with default pool settings for the given connection URL
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::new(DatabaseConfig::new(url))
    }
}

#[async_trait]
impl StorageModule for PostgresModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    async fn register(&self, builder: &mut RegistryBuilder) -> Result<(), ModuleError> {
        let pool = create_pool(&self.config)
            .await
            .map_err(|e| ModuleError::init(e.to_string()))?;

        run_migrations(&pool)
            .await
            .map_err(|e| ModuleError::init(e.to_string()))?;

        builder
            .bind_directors(Arc::new(PgDirectorRepository::new(pool.clone())))
            .bind_movies(Arc::new(PgMovieRepository::new(pool.clone())))
            .bind_studios(Arc::new(PgStudioRepository::new(pool)));

        info!("PostgreSQL storage module registered");
        Ok(())
    }
}
