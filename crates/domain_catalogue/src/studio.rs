//! Studio entity

use core_kernel::StudioId;
use serde::{Deserialize, Serialize};

/// A production studio catalogued by the system
///
/// The collection of movies a studio produced is the reverse of the
/// Movie→Studio reference and is a query concern, not a stored field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Studio {
    /// Storage-assigned identity; `UNASSIGNED` until persisted
    pub id: StudioId,
    /// Non-empty studio name
    pub name: String,
}

impl Studio {
    /// Creates an unpersisted studio with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: StudioId::UNASSIGNED,
            name: name.into(),
        }
    }

    /// Defaulted blank record backing the repository `create_new` factories
    pub fn blank() -> Self {
        Self {
            id: StudioId::UNASSIGNED,
            name: String::new(),
        }
    }
}
