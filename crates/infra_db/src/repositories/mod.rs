//! Repository implementations for the catalogue entities
//!
//! Each repository encapsulates the SQL for one entity, maps between
//! database rows and domain types, and implements the corresponding port
//! trait. Field validation runs through the shared domain validators before
//! any statement executes, so this module and the in-memory module reject the
//! same records.

pub mod director;
pub mod movie;
pub mod studio;

pub use director::PgDirectorRepository;
pub use movie::PgMovieRepository;
pub use studio::PgStudioRepository;
