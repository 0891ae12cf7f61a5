//! In-memory studio repository

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError, StudioId};
use domain_catalogue::validation::StudioValidator;
use domain_catalogue::{Studio, StudioRepository};

use crate::table::SharedTable;

/// Studio repository backed by a locked in-process table
#[derive(Clone)]
pub struct MemoryStudioRepository {
    table: SharedTable<Studio>,
}

impl MemoryStudioRepository {
    pub(crate) fn new(table: SharedTable<Studio>) -> Self {
        Self { table }
    }
}

impl DomainPort for MemoryStudioRepository {}

#[async_trait]
impl StudioRepository for MemoryStudioRepository {
    async fn get_all(&self) -> Result<Vec<Studio>, PortError> {
        Ok(self.table.read().await.all())
    }

    async fn get_by_id(&self, id: StudioId) -> Result<Option<Studio>, PortError> {
        Ok(self.table.read().await.get(id.value()))
    }

    fn create_new(&self) -> Studio {
        Studio::blank()
    }

    async fn add(&self, studio: Studio) -> Result<Studio, PortError> {
        StudioValidator::validate(&studio).into_result()?;

        let mut table = self.table.write().await;
        Ok(table.insert_next(studio, |row, id| row.id = StudioId::new(id)))
    }

    async fn update(&self, studio: Studio) -> Result<Studio, PortError> {
        StudioValidator::validate(&studio).into_result()?;

        let mut table = self.table.write().await;
        if !table.contains(studio.id.value()) {
            return Err(PortError::not_found("Studio", studio.id));
        }
        table.replace(studio.id.value(), studio.clone());
        Ok(studio)
    }

    async fn delete(&self, id: StudioId) -> Result<(), PortError> {
        self.table
            .write()
            .await
            .remove(id.value())
            .map(|_| ())
            .ok_or_else(|| PortError::not_found("Studio", id))
    }
}
