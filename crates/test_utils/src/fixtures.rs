//! Pre-built Test Fixtures
//!
//! Ready-to-use catalogue entities, consistent and predictable across the
//! test suite. None of them carry an assigned identity; tests persist them
//! through a repository when they need one.

use domain_catalogue::{Director, Movie, MovieGenre, Studio};
use core_kernel::DirectorId;

/// Fixture directors
pub struct DirectorFixtures;

impl DirectorFixtures {
    /// The canonical test director
    pub fn ann_lee() -> Director {
        Director::new("Ann Lee", 1970)
    }

    /// A second director, distinct from `ann_lee` on both fields
    pub fn bo_chen() -> Director {
        Director::new("Bo Chen", 1985)
    }

    /// Shares the name with `ann_lee` but not the birth year
    pub fn elder_ann_lee() -> Director {
        Director::new("Ann Lee", 1954)
    }
}

/// Fixture movies
pub struct MovieFixtures;

impl MovieFixtures {
    /// A drama credited to the given director
    pub fn drama(director_id: DirectorId) -> Movie {
        Movie::new("Test", 2020, MovieGenre::Drama, director_id)
    }

    /// A movie with an empty title
    pub fn untitled(director_id: DirectorId) -> Movie {
        Movie::new("", 2020, MovieGenre::Drama, director_id)
    }
}

/// Fixture studios
pub struct StudioFixtures;

impl StudioFixtures {
    pub fn pinewood() -> Studio {
        Studio::new("Pinewood")
    }
}
