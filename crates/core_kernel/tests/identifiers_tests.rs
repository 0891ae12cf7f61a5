//! Unit tests for the identifiers module
//!
//! Tests cover all identifier types, their creation, parsing, conversion,
//! and display formatting.

use core_kernel::{DirectorId, MovieId, StudioId};

mod director_id_tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(DirectorId::prefix(), "DIR");
    }

    #[test]
    fn test_display_format() {
        let id = DirectorId::new(12);
        assert_eq!(id.to_string(), "DIR-12");
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = DirectorId::new(12);
        let parsed: DirectorId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_str_without_prefix() {
        let parsed: DirectorId = "12".parse().unwrap();
        assert_eq!(parsed, DirectorId::new(12));
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<DirectorId, _> = "not-a-number".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_default_is_unassigned() {
        let id = DirectorId::default();
        assert_eq!(id, DirectorId::UNASSIGNED);
        assert!(!id.is_assigned());
    }
}

mod conversion_tests {
    use super::*;

    #[test]
    fn test_i64_round_trip() {
        let id = MovieId::from(7);
        let value: i64 = id.into();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_ids_of_different_entities_do_not_compare() {
        // Type safety is the point: this must stay a compile-time property.
        let movie = MovieId::new(1);
        let studio = StudioId::new(1);
        assert_eq!(movie.value(), studio.value());
    }

    #[test]
    fn test_ordering_follows_value() {
        assert!(StudioId::new(1) < StudioId::new(2));
    }
}

mod serde_tests {
    use super::*;

    #[test]
    fn test_serializes_as_transparent_integer() {
        let json = serde_json::to_string(&MovieId::new(42)).unwrap();
        assert_eq!(json, "42");

        let back: MovieId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MovieId::new(42));
    }
}
