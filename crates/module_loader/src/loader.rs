//! Storage module resolution
//!
//! The loader turns the configured provider identifier into a live
//! [`Registry`], exactly once per process. Known modules live in a
//! compiled-in table mapping identifiers to factory functions; there is no
//! artifact scanning, so every failure mode is enumerable:
//!
//! - missing/empty identifier -> [`LoadError::Configuration`]
//! - identifier not in the table -> [`LoadError::ModuleNotFound`]
//! - duplicate identifier at registration, or a module that binds only a
//!   subset of the repository ports -> [`LoadError::ModuleLoad`]
//! - a module that cannot construct its backing store ->
//!   [`LoadError::ModuleInit`]
//!
//! Startup errors are never recovered locally; the process must not serve
//! any request without a registry.

use thiserror::Error;
use tracing::info;

use domain_catalogue::registry::{ModuleError, Registry, RegistryBuilder, StorageModule};

use crate::config::CatalogueConfig;

/// Constructs a storage module from the startup configuration
pub type ModuleFactory = fn(&CatalogueConfig) -> Result<Box<dyn StorageModule>, LoadError>;

/// Fatal startup errors raised while resolving the storage module
#[derive(Debug, Error)]
pub enum LoadError {
    /// Startup configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The configured identifier names no known storage module
    #[error("Storage module '{name}' not found; available modules: {}", .available.join(", "))]
    ModuleNotFound { name: String, available: Vec<String> },

    /// The module table or the module's registration is unusable
    #[error("Storage module load failed: {0}")]
    ModuleLoad(String),

    /// The module could not be instantiated
    #[error("Storage module initialisation failed: {0}")]
    ModuleInit(String),
}

impl From<ModuleError> for LoadError {
    fn from(error: ModuleError) -> Self {
        match error {
            ModuleError::Init(message) => LoadError::ModuleInit(message),
            incomplete @ ModuleError::IncompleteBindings { .. } => {
                LoadError::ModuleLoad(incomplete.to_string())
            }
        }
    }
}

/// Resolves a configured identifier to a storage module and produces the
/// process-wide repository [`Registry`]
pub struct ModuleLoader {
    factories: Vec<(&'static str, ModuleFactory)>,
}

impl ModuleLoader {
    /// Loader with an empty module table
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Loader with the built-in modules: `memory` and `postgres`
    pub fn builtin() -> Self {
        Self {
            factories: vec![
                (infra_mem::MODULE_NAME, memory_factory as ModuleFactory),
                (infra_db::MODULE_NAME, postgres_factory),
            ],
        }
    }

    /// Adds a module factory under its identifier
    ///
    /// # Errors
    ///
    /// `LoadError::ModuleLoad` when the identifier is already registered;
    /// ambiguous tables are rejected rather than resolved by picking the
    /// first entry.
    pub fn register(
        &mut self,
        name: &'static str,
        factory: ModuleFactory,
    ) -> Result<(), LoadError> {
        if self.factories.iter().any(|(existing, _)| *existing == name) {
            return Err(LoadError::ModuleLoad(format!(
                "Duplicate storage module identifier '{name}'"
            )));
        }
        self.factories.push((name, factory));
        Ok(())
    }

    /// Identifiers of every registered module, in registration order
    pub fn available(&self) -> Vec<String> {
        self.factories
            .iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Resolves the configured module and builds the registry
    ///
    /// Runs once during process initialisation; the returned [`Registry`] is
    /// read-only for the remainder of the process.
    pub async fn load(&self, config: &CatalogueConfig) -> Result<Registry, LoadError> {
        let provider = config.storage_provider.trim();
        if provider.is_empty() {
            return Err(LoadError::Configuration(
                "No storage provider configured; set CATALOGUE_STORAGE_PROVIDER".to_string(),
            ));
        }

        let factory = self
            .factories
            .iter()
            .find(|(name, _)| *name == provider)
            .map(|(_, factory)| *factory)
            .ok_or_else(|| LoadError::ModuleNotFound {
                name: provider.to_string(),
                available: self.available(),
            })?;

        info!(provider, "Loading storage module");

        let module = factory(config)?;
        let mut builder = RegistryBuilder::new();
        module.register(&mut builder).await?;
        let registry = builder.build(module.name())?;

        info!(provider, "Storage module loaded");
        Ok(registry)
    }
}

impl Default for ModuleLoader {
    fn default() -> Self {
        Self::builtin()
    }
}

fn memory_factory(_config: &CatalogueConfig) -> Result<Box<dyn StorageModule>, LoadError> {
    Ok(Box::new(infra_mem::MemoryModule::new()))
}

fn postgres_factory(config: &CatalogueConfig) -> Result<Box<dyn StorageModule>, LoadError> {
    let url = config
        .database_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| {
            LoadError::ModuleInit(
                "The postgres module requires a connection string; set CATALOGUE_DATABASE_URL"
                    .to_string(),
            )
        })?;

    Ok(Box::new(infra_db::PostgresModule::from_url(url)))
}
