//! Studio repository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use core_kernel::{DomainPort, PortError, StudioId};
use domain_catalogue::validation::StudioValidator;
use domain_catalogue::{Studio, StudioRepository};

use crate::error::port_error_from_sqlx;

/// Studio repository backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgStudioRepository {
    pool: PgPool,
}

impl PgStudioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StudioRow {
    id: i64,
    name: String,
}

impl From<StudioRow> for Studio {
    fn from(row: StudioRow) -> Self {
        Studio {
            id: StudioId::new(row.id),
            name: row.name,
        }
    }
}

impl DomainPort for PgStudioRepository {}

#[async_trait]
impl StudioRepository for PgStudioRepository {
    async fn get_all(&self) -> Result<Vec<Studio>, PortError> {
        let rows =
            sqlx::query_as::<_, StudioRow>("SELECT id, name FROM studios ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(port_error_from_sqlx)?;

        Ok(rows.into_iter().map(Studio::from).collect())
    }

    async fn get_by_id(&self, id: StudioId) -> Result<Option<Studio>, PortError> {
        let row = sqlx::query_as::<_, StudioRow>("SELECT id, name FROM studios WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(port_error_from_sqlx)?;

        Ok(row.map(Studio::from))
    }

    fn create_new(&self) -> Studio {
        Studio::blank()
    }

    async fn add(&self, studio: Studio) -> Result<Studio, PortError> {
        StudioValidator::validate(&studio).into_result()?;

        let row = sqlx::query_as::<_, StudioRow>(
            "INSERT INTO studios (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&studio.name)
        .fetch_one(&self.pool)
        .await
        .map_err(port_error_from_sqlx)?;

        Ok(row.into())
    }

    async fn update(&self, studio: Studio) -> Result<Studio, PortError> {
        StudioValidator::validate(&studio).into_result()?;

        let row = sqlx::query_as::<_, StudioRow>(
            "UPDATE studios SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(studio.id.value())
        .bind(&studio.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(port_error_from_sqlx)?
        .ok_or_else(|| PortError::not_found("Studio", studio.id))?;

        Ok(row.into())
    }

    async fn delete(&self, id: StudioId) -> Result<(), PortError> {
        // studio_id on movies is ON DELETE SET NULL; no dependency guard here
        let result = sqlx::query("DELETE FROM studios WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(port_error_from_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Studio", id));
        }
        Ok(())
    }
}
