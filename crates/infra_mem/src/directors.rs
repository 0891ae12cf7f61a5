//! In-memory director repository

use async_trait::async_trait;

use core_kernel::{DirectorId, DomainPort, PortError};
use domain_catalogue::validation::DirectorValidator;
use domain_catalogue::{Director, DirectorRepository};

use crate::table::SharedTable;

/// Director repository backed by a locked in-process table
#[derive(Clone)]
pub struct MemoryDirectorRepository {
    table: SharedTable<Director>,
}

impl MemoryDirectorRepository {
    pub(crate) fn new(table: SharedTable<Director>) -> Self {
        Self { table }
    }
}

impl DomainPort for MemoryDirectorRepository {}

#[async_trait]
impl DirectorRepository for MemoryDirectorRepository {
    async fn get_all(&self) -> Result<Vec<Director>, PortError> {
        Ok(self.table.read().await.all())
    }

    async fn get_by_id(&self, id: DirectorId) -> Result<Option<Director>, PortError> {
        Ok(self.table.read().await.get(id.value()))
    }

    fn create_new(&self) -> Director {
        Director::blank()
    }

    async fn add(&self, director: Director) -> Result<Director, PortError> {
        DirectorValidator::validate(&director).into_result()?;

        // Identity assignment and insertion run under one write lock
        let mut table = self.table.write().await;
        Ok(table.insert_next(director, |row, id| row.id = DirectorId::new(id)))
    }

    async fn update(&self, director: Director) -> Result<Director, PortError> {
        DirectorValidator::validate(&director).into_result()?;

        let mut table = self.table.write().await;
        if !table.contains(director.id.value()) {
            return Err(PortError::not_found("Director", director.id));
        }
        table.replace(director.id.value(), director.clone());
        Ok(director)
    }

    async fn delete(&self, id: DirectorId) -> Result<(), PortError> {
        self.table
            .write()
            .await
            .remove(id.value())
            .map(|_| ())
            .ok_or_else(|| PortError::not_found("Director", id))
    }

    async fn exists(
        &self,
        name: Option<&str>,
        birth_year: Option<i32>,
    ) -> Result<bool, PortError> {
        Ok(self.table.read().await.any(|d| {
            name.map_or(true, |n| d.name == n) && birth_year.map_or(true, |y| d.birth_year == y)
        }))
    }
}
