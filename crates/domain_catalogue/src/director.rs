//! Director entity

use chrono::{Datelike, Utc};
use core_kernel::DirectorId;
use serde::{Deserialize, Serialize};

/// A film director catalogued by the system
///
/// The set of movies attributed to a director is informational and is served
/// by the movie repository's `get_by_director_id` query rather than stored on
/// the record; a movie owns the relationship through its `director_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    /// Storage-assigned identity; `UNASSIGNED` until persisted
    pub id: DirectorId,
    /// Display name, 3-100 characters
    pub name: String,
    /// Year of birth, 1800 or later
    pub birth_year: i32,
}

impl Director {
    /// Creates an unpersisted director with the given fields
    pub fn new(name: impl Into<String>, birth_year: i32) -> Self {
        Self {
            id: DirectorId::UNASSIGNED,
            name: name.into(),
            birth_year,
        }
    }

    /// Defaulted blank record backing the repository `create_new` factories;
    /// the birth year defaults to the current year
    pub fn blank() -> Self {
        Self {
            id: DirectorId::UNASSIGNED,
            name: String::new(),
            birth_year: Utc::now().year(),
        }
    }
}
