//! Catalogue configuration

use serde::Deserialize;

/// Startup configuration for the catalogue
///
/// Loaded once at process start; the storage provider setting decides which
/// storage module the loader activates.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueConfig {
    /// Identifier of the storage module to activate (`memory`, `postgres`)
    pub storage_provider: String,
    /// PostgreSQL connection string; required by the `postgres` module
    #[serde(default)]
    pub database_url: Option<String>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            storage_provider: infra_mem::MODULE_NAME.to_string(),
            database_url: None,
            log_level: default_log_level(),
        }
    }
}

impl CatalogueConfig {
    /// Loads configuration from the environment under the `CATALOGUE` prefix
    /// (e.g. `CATALOGUE_STORAGE_PROVIDER=postgres`), honouring a local
    /// `.env` file
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        config::Config::builder()
            .add_source(config::Environment::with_prefix("CATALOGUE"))
            .build()?
            .try_deserialize()
    }

    /// Configuration selecting the seeded memory module
    pub fn for_memory() -> Self {
        Self::default()
    }

    /// Configuration selecting the PostgreSQL module
    pub fn for_postgres(database_url: impl Into<String>) -> Self {
        Self {
            storage_provider: infra_db::MODULE_NAME.to_string(),
            database_url: Some(database_url.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_memory() {
        let config = CatalogueConfig::default();
        assert_eq!(config.storage_provider, "memory");
        assert!(config.database_url.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_for_postgres_carries_url() {
        let config = CatalogueConfig::for_postgres("postgres://localhost/movies");
        assert_eq!(config.storage_provider, "postgres");
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/movies")
        );
    }
}
