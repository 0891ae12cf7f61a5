//! Memory storage module registration

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use domain_catalogue::registry::{ModuleError, RegistryBuilder, StorageModule};

use crate::directors::MemoryDirectorRepository;
use crate::fixtures;
use crate::movies::MemoryMovieRepository;
use crate::studios::MemoryStudioRepository;
use crate::table::Table;

/// Identifier the module loader resolves from configuration
pub const MODULE_NAME: &str = "memory";

/// The in-memory storage module
///
/// By default the tables are seeded with the demo fixture set; `empty()`
/// produces blank tables for tests that want full control over the data.
#[derive(Debug, Clone)]
pub struct MemoryModule {
    seeded: bool,
}

impl MemoryModule {
    /// Module with the demo fixtures loaded
    pub fn new() -> Self {
        Self { seeded: true }
    }

    /// Module with empty tables
    pub fn empty() -> Self {
        Self { seeded: false }
    }
}

impl Default for MemoryModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageModule for MemoryModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    async fn register(&self, builder: &mut RegistryBuilder) -> Result<(), ModuleError> {
        let (directors, studios, movies) = if self.seeded {
            (
                Table::with_seed(fixtures::directors()),
                Table::with_seed(fixtures::studios()),
                Table::with_seed(fixtures::movies()),
            )
        } else {
            (Table::new(), Table::new(), Table::new())
        };

        let directors = directors.shared();
        let studios = studios.shared();
        let movies = movies.shared();

        builder
            .bind_directors(Arc::new(MemoryDirectorRepository::new(Arc::clone(
                &directors,
            ))))
            .bind_movies(Arc::new(MemoryMovieRepository::new(
                movies,
                Arc::clone(&directors),
                Arc::clone(&studios),
            )))
            .bind_studios(Arc::new(MemoryStudioRepository::new(studios)));

        info!(seeded = self.seeded, "Memory storage module registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::DirectorId;
    use domain_catalogue::{DirectorRepository, MovieRepository, StudioRepository};

    async fn registry(module: MemoryModule) -> domain_catalogue::Registry {
        let mut builder = RegistryBuilder::new();
        module.register(&mut builder).await.unwrap();
        builder.build(MODULE_NAME).unwrap()
    }

    #[tokio::test]
    async fn test_register_binds_all_three_repositories() {
        let registry = registry(MemoryModule::empty()).await;
        assert_eq!(registry.provider(), "memory");
        assert!(registry.directors().get_all().await.unwrap().is_empty());
        assert!(registry.movies().get_all().await.unwrap().is_empty());
        assert!(registry.studios().get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seeded_module_ships_demo_fixtures() {
        let registry = registry(MemoryModule::new()).await;

        let directors = registry.directors().get_all().await.unwrap();
        assert_eq!(directors.len(), 4);
        assert_eq!(directors[0].id, DirectorId::new(1));

        assert_eq!(registry.studios().get_all().await.unwrap().len(), 3);
        assert_eq!(registry.movies().get_all().await.unwrap().len(), 5);

        // The seeded movies reference seeded directors
        let nolan_movies = registry
            .movies()
            .get_by_director_id(DirectorId::new(4))
            .await
            .unwrap();
        assert_eq!(nolan_movies.len(), 2);
    }

    #[tokio::test]
    async fn test_ids_continue_after_fixtures() {
        let registry = registry(MemoryModule::new()).await;

        let added = registry
            .directors()
            .add(domain_catalogue::Director::new("Ann Lee", 1970))
            .await
            .unwrap();
        assert_eq!(added.id, DirectorId::new(5));
    }
}
