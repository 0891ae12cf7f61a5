//! Director repository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use core_kernel::{DirectorId, DomainPort, PortError};
use domain_catalogue::validation::DirectorValidator;
use domain_catalogue::{Director, DirectorRepository};

use crate::error::{
    is_pg_violation, port_error_from_sqlx, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION,
};

/// Director repository backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgDirectorRepository {
    pool: PgPool,
}

impl PgDirectorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DirectorRow {
    id: i64,
    name: String,
    birth_year: i32,
}

impl From<DirectorRow> for Director {
    fn from(row: DirectorRow) -> Self {
        Director {
            id: DirectorId::new(row.id),
            name: row.name,
            birth_year: row.birth_year,
        }
    }
}

impl DomainPort for PgDirectorRepository {}

#[async_trait]
impl DirectorRepository for PgDirectorRepository {
    async fn get_all(&self) -> Result<Vec<Director>, PortError> {
        let rows = sqlx::query_as::<_, DirectorRow>(
            "SELECT id, name, birth_year FROM directors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(port_error_from_sqlx)?;

        Ok(rows.into_iter().map(Director::from).collect())
    }

    async fn get_by_id(&self, id: DirectorId) -> Result<Option<Director>, PortError> {
        let row = sqlx::query_as::<_, DirectorRow>(
            "SELECT id, name, birth_year FROM directors WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(port_error_from_sqlx)?;

        Ok(row.map(Director::from))
    }

    fn create_new(&self) -> Director {
        Director::blank()
    }

    async fn add(&self, director: Director) -> Result<Director, PortError> {
        DirectorValidator::validate(&director).into_result()?;

        let row = sqlx::query_as::<_, DirectorRow>(
            "INSERT INTO directors (name, birth_year) VALUES ($1, $2) \
             RETURNING id, name, birth_year",
        )
        .bind(&director.name)
        .bind(director.birth_year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Unique (name, birth_year) backstop
            if is_pg_violation(&e, UNIQUE_VIOLATION, Some("directors_name_birth_year_key")) {
                PortError::conflict("A director with this name and birth year already exists")
            } else {
                port_error_from_sqlx(e)
            }
        })?;

        Ok(row.into())
    }

    async fn update(&self, director: Director) -> Result<Director, PortError> {
        DirectorValidator::validate(&director).into_result()?;

        let row = sqlx::query_as::<_, DirectorRow>(
            "UPDATE directors SET name = $2, birth_year = $3 WHERE id = $1 \
             RETURNING id, name, birth_year",
        )
        .bind(director.id.value())
        .bind(&director.name)
        .bind(director.birth_year)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_pg_violation(&e, UNIQUE_VIOLATION, Some("directors_name_birth_year_key")) {
                PortError::conflict("A director with this name and birth year already exists")
            } else {
                port_error_from_sqlx(e)
            }
        })?
        .ok_or_else(|| PortError::not_found("Director", director.id))?;

        Ok(row.into())
    }

    async fn delete(&self, id: DirectorId) -> Result<(), PortError> {
        let result = sqlx::query("DELETE FROM directors WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // RESTRICT backstop behind the service-level dependency check
                if is_pg_violation(&e, FOREIGN_KEY_VIOLATION, Some("movies_director_id_fkey")) {
                    PortError::integrity(format!("Movies still reference director {id}"))
                } else {
                    port_error_from_sqlx(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Director", id));
        }
        Ok(())
    }

    async fn exists(
        &self,
        name: Option<&str>,
        birth_year: Option<i32>,
    ) -> Result<bool, PortError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
                 SELECT 1 FROM directors \
                 WHERE ($1::text IS NULL OR name = $1) \
                   AND ($2::integer IS NULL OR birth_year = $2) \
             )",
        )
        .bind(name)
        .bind(birth_year)
        .fetch_one(&self.pool)
        .await
        .map_err(port_error_from_sqlx)?;

        Ok(exists)
    }
}
