//! Entity validation rules
//!
//! Explicit validation functions per entity type, invoked uniformly by every
//! storage implementation's `add`/`update`. A failed validation reports every
//! violated constraint, not just the first.
//!
//! # Validation Rules
//!
//! ## Director
//! - Name is required, 3-100 characters
//! - Birth year must be 1800 or later
//!
//! ## Movie
//! - Title is required
//!
//! ## Studio
//! - Name is required
//!
//! Referential constraints (a movie's director and studio references) are
//! checked by the storage implementations themselves, since only they can see
//! the neighbouring tables; the violations are reported through the same
//! [`ValidationResult`] so a caller receives one combined error.

use core_kernel::{ConstraintViolation, PortError};

use crate::director::Director;
use crate::movie::Movie;
use crate::studio::Studio;

/// Minimum accepted director name length
pub const DIRECTOR_NAME_MIN_LEN: usize = 3;
/// Maximum accepted director name length
pub const DIRECTOR_NAME_MAX_LEN: usize = 100;
/// Earliest accepted director birth year
pub const DIRECTOR_MIN_BIRTH_YEAR: i32 = 1800;

/// Accumulated outcome of validating one entity
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    violations: Vec<ConstraintViolation>,
}

impl ValidationResult {
    /// Creates an empty (passing) result
    pub fn ok() -> Self {
        Self::default()
    }

    /// Records a violated constraint
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(ConstraintViolation::new(field, message));
    }

    /// True when no constraint was violated
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violated constraints, in the order they were checked
    pub fn violations(&self) -> &[ConstraintViolation] {
        &self.violations
    }

    /// Converts into `Err(PortError::Validation)` when any constraint was
    /// violated
    pub fn into_result(self) -> Result<(), PortError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(PortError::validation(self.violations))
        }
    }
}

/// Validator for director records
pub struct DirectorValidator;

impl DirectorValidator {
    pub fn validate(director: &Director) -> ValidationResult {
        let mut result = ValidationResult::ok();

        let name = director.name.trim();
        if name.is_empty() {
            result.add("name", "Director name is required");
        } else if name.chars().count() < DIRECTOR_NAME_MIN_LEN
            || name.chars().count() > DIRECTOR_NAME_MAX_LEN
        {
            result.add(
                "name",
                format!(
                    "Name must be between {} and {} characters",
                    DIRECTOR_NAME_MIN_LEN, DIRECTOR_NAME_MAX_LEN
                ),
            );
        }

        if director.birth_year < DIRECTOR_MIN_BIRTH_YEAR {
            result.add(
                "birth_year",
                format!("Year of birth must be {} or later", DIRECTOR_MIN_BIRTH_YEAR),
            );
        }

        result
    }
}

/// Validator for movie records
pub struct MovieValidator;

impl MovieValidator {
    pub fn validate(movie: &Movie) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if movie.title.trim().is_empty() {
            result.add("title", "Movie title is required");
        }

        result
    }
}

/// Validator for studio records
pub struct StudioValidator;

impl StudioValidator {
    pub fn validate(studio: &Studio) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if studio.name.trim().is_empty() {
            result.add("name", "Studio name is required");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::MovieGenre;
    use core_kernel::DirectorId;
    use proptest::prelude::*;

    #[test]
    fn test_valid_director() {
        let director = Director::new("Ann Lee", 1970);
        let result = DirectorValidator::validate(&director);
        assert!(result.is_valid(), "violations: {:?}", result.violations());
    }

    #[test]
    fn test_director_name_boundaries() {
        assert!(DirectorValidator::validate(&Director::new("Abe", 1970)).is_valid());
        assert!(DirectorValidator::validate(&Director::new("a".repeat(100), 1970)).is_valid());

        assert!(!DirectorValidator::validate(&Director::new("Al", 1970)).is_valid());
        assert!(!DirectorValidator::validate(&Director::new("a".repeat(101), 1970)).is_valid());
    }

    #[test]
    fn test_director_birth_year_boundary() {
        assert!(DirectorValidator::validate(&Director::new("Ann Lee", 1800)).is_valid());
        assert!(!DirectorValidator::validate(&Director::new("Ann Lee", 1799)).is_valid());
    }

    #[test]
    fn test_director_every_violation_reported() {
        let director = Director::new("", 1500);
        let result = DirectorValidator::validate(&director);
        assert!(!result.is_valid());

        let fields: Vec<_> = result.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "birth_year"]);
    }

    #[test]
    fn test_movie_title_required() {
        let mut movie = Movie::new("Test", 2020, MovieGenre::Drama, DirectorId::new(1));
        assert!(MovieValidator::validate(&movie).is_valid());

        movie.title = "   ".to_string();
        let result = MovieValidator::validate(&movie);
        assert!(!result.is_valid());
        assert_eq!(result.violations()[0].field, "title");
    }

    #[test]
    fn test_studio_name_required() {
        assert!(StudioValidator::validate(&Studio::new("Warner Bros.")).is_valid());
        assert!(!StudioValidator::validate(&Studio::blank()).is_valid());
    }

    #[test]
    fn test_into_result_carries_violations() {
        let director = Director::new("", 1970);
        let error = DirectorValidator::validate(&director)
            .into_result()
            .unwrap_err();
        assert!(error.is_validation());
    }

    proptest! {
        #[test]
        fn prop_names_within_bounds_are_valid(
            name in "[A-Za-z]{3,100}",
            birth_year in 1800i32..2100,
        ) {
            let director = Director::new(name, birth_year);
            prop_assert!(DirectorValidator::validate(&director).is_valid());
        }

        #[test]
        fn prop_birth_years_before_1800_are_rejected(birth_year in -3000i32..1800) {
            let director = Director::new("Ann Lee", birth_year);
            prop_assert!(!DirectorValidator::validate(&director).is_valid());
        }
    }
}
