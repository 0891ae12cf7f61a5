//! In-Memory Storage Module
//!
//! This crate provides the in-process storage module for the movie catalogue,
//! registered under the identifier `"memory"`. It backs each repository port
//! with an owned, explicitly locked table (row map plus id counter) and ships
//! with a small demo fixture set so the catalogue is usable without any
//! external service.
//!
//! # Concurrency
//!
//! Each table is guarded by one `tokio::sync::RwLock`; every
//! read-modify-write sequence, including identity assignment and existence
//! scans, runs under a single write-lock acquisition. Cross-table reference
//! checks take locks in a fixed order (directors, studios, movies) so
//! concurrent callers cannot deadlock.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_catalogue::registry::{RegistryBuilder, StorageModule};
//! use infra_mem::MemoryModule;
//!
//! let mut builder = RegistryBuilder::new();
//! MemoryModule::new().register(&mut builder).await?;
//! let registry = builder.build("memory")?;
//! ```

pub mod directors;
pub mod fixtures;
pub mod module;
pub mod movies;
pub mod studios;
mod table;

pub use directors::MemoryDirectorRepository;
pub use module::{MemoryModule, MODULE_NAME};
pub use movies::MemoryMovieRepository;
pub use studios::MemoryStudioRepository;
