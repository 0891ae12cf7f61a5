//! Repository contract tests for the memory storage module
//!
//! These exercise the externally visible behaviour every storage module must
//! share: identity assignment, validation on add/update, not-found handling,
//! ordering, and the movie reference checks.

use std::sync::Arc;

use core_kernel::{DirectorId, MovieId};
use domain_catalogue::registry::{RegistryBuilder, StorageModule};
use domain_catalogue::{
    DirectorRepository, MovieGenre, MovieRepository, Registry, StudioRepository,
};
use infra_mem::MemoryModule;
use test_utils::{
    assert_not_found, assert_violates_field, DirectorFixtures, MovieFixtures, StudioFixtures,
    TestDirectorBuilder, TestMovieBuilder,
};

async fn empty_registry() -> Registry {
    let module = MemoryModule::empty();
    let mut builder = RegistryBuilder::new();
    module.register(&mut builder).await.unwrap();
    builder.build(module.name()).unwrap()
}

mod director_repository {
    use super::*;

    #[tokio::test]
    async fn test_add_assigns_identity_and_preserves_fields() {
        let registry = empty_registry().await;
        let repo = registry.directors();

        let added = repo.add(DirectorFixtures::ann_lee()).await.unwrap();
        assert!(added.id.is_assigned());

        let retrieved = repo.get_by_id(added.id).await.unwrap().unwrap();
        assert_eq!(retrieved.name, "Ann Lee");
        assert_eq!(retrieved.birth_year, 1970);
        assert_eq!(retrieved, added);
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_fields_with_every_violation() {
        let registry = empty_registry().await;
        let repo = registry.directors();

        let invalid = TestDirectorBuilder::new()
            .with_name("Al")
            .with_birth_year(1750)
            .build();
        let error = repo.add(invalid).await.unwrap_err();
        assert_violates_field(&error, "name");
        assert_violates_field(&error, "birth_year");

        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let registry = empty_registry().await;
        let repo = registry.directors();

        let mut director = DirectorFixtures::ann_lee();
        director.id = DirectorId::new(9);
        assert_not_found(&repo.update(director).await.unwrap_err());
    }

    #[tokio::test]
    async fn test_failed_update_leaves_stored_record_unchanged() {
        let registry = empty_registry().await;
        let repo = registry.directors();

        let stored = repo.add(DirectorFixtures::ann_lee()).await.unwrap();

        let mut tampered = stored.clone();
        tampered.name = "Al".to_string();
        let error = repo.update(tampered).await.unwrap_err();
        assert_violates_field(&error, "name");

        let reread = repo.get_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(reread, stored);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let registry = empty_registry().await;
        assert_not_found(
            &registry
                .directors()
                .delete(DirectorId::new(1))
                .await
                .unwrap_err(),
        );
    }

    #[tokio::test]
    async fn test_exists_combines_optional_filters() {
        let registry = empty_registry().await;
        let repo = registry.directors();
        repo.add(DirectorFixtures::ann_lee()).await.unwrap();
        repo.add(DirectorFixtures::bo_chen()).await.unwrap();

        assert!(repo.exists(Some("Ann Lee"), Some(1970)).await.unwrap());
        assert!(repo.exists(None, Some(1985)).await.unwrap());
        assert!(repo.exists(None, None).await.unwrap());
        assert!(!repo.exists(Some("Ann Lee"), Some(1985)).await.unwrap());
        assert!(!repo.exists(Some("Nobody"), None).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_all_stays_ordered_by_id() {
        let registry = empty_registry().await;
        let repo = registry.directors();

        let first = repo.add(DirectorFixtures::ann_lee()).await.unwrap();
        let second = repo.add(DirectorFixtures::bo_chen()).await.unwrap();
        let third = repo.add(DirectorFixtures::elder_ann_lee()).await.unwrap();

        repo.delete(second.id).await.unwrap();
        let fourth = repo
            .add(TestDirectorBuilder::new().with_name("Cy Dee").build())
            .await
            .unwrap();

        let ids: Vec<_> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![first.id, third.id, fourth.id]);
    }

    #[tokio::test]
    async fn test_concurrent_adds_assign_distinct_ids() {
        let registry = empty_registry().await;
        let repo = registry.directors();

        let mut handles = Vec::new();
        for i in 0..10 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.add(
                    TestDirectorBuilder::new()
                        .with_name(format!("Director {i}"))
                        .build(),
                )
                .await
                .unwrap()
                .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }
}

mod movie_repository {
    use super::*;

    #[tokio::test]
    async fn test_add_requires_existing_director() {
        let registry = empty_registry().await;

        let movie = MovieFixtures::drama(DirectorId::new(42));
        let error = registry.movies().add(movie).await.unwrap_err();
        assert_violates_field(&error, "director_id");
    }

    #[tokio::test]
    async fn test_add_requires_existing_studio_when_given() {
        let registry = empty_registry().await;
        let director = registry
            .directors()
            .add(DirectorFixtures::ann_lee())
            .await
            .unwrap();

        let movie = TestMovieBuilder::new()
            .with_director(director.id)
            .with_studio(core_kernel::StudioId::new(9))
            .build();
        let error = registry.movies().add(movie).await.unwrap_err();
        assert_violates_field(&error, "studio_id");
    }

    #[tokio::test]
    async fn test_add_reports_field_and_reference_violations_together() {
        let registry = empty_registry().await;

        let movie = MovieFixtures::untitled(DirectorId::new(42));
        let error = registry.movies().add(movie).await.unwrap_err();
        assert_violates_field(&error, "title");
        assert_violates_field(&error, "director_id");
    }

    #[tokio::test]
    async fn test_add_and_query_by_director() {
        let registry = empty_registry().await;
        let directors = registry.directors();
        let movies = registry.movies();

        let ann = directors.add(DirectorFixtures::ann_lee()).await.unwrap();
        let bo = directors.add(DirectorFixtures::bo_chen()).await.unwrap();

        let studio = registry
            .studios()
            .add(StudioFixtures::pinewood())
            .await
            .unwrap();

        let added = movies
            .add(
                TestMovieBuilder::new()
                    .with_title("Test")
                    .with_genre(MovieGenre::Drama)
                    .with_director(ann.id)
                    .with_studio(studio.id)
                    .build(),
            )
            .await
            .unwrap();
        assert!(added.id.is_assigned());

        let by_ann = movies.get_by_director_id(ann.id).await.unwrap();
        assert_eq!(by_ann, vec![added]);
        assert!(movies.get_by_director_id(bo.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_revalidates_references() {
        let registry = empty_registry().await;
        let director = registry
            .directors()
            .add(DirectorFixtures::ann_lee())
            .await
            .unwrap();

        let movies = registry.movies();
        let mut movie = movies
            .add(TestMovieBuilder::new().with_director(director.id).build())
            .await
            .unwrap();

        movie.director_id = DirectorId::new(99);
        let error = movies.update(movie).await.unwrap_err();
        assert_violates_field(&error, "director_id");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let registry = empty_registry().await;
        assert_not_found(&registry.movies().delete(MovieId::new(3)).await.unwrap_err());
    }

    #[tokio::test]
    async fn test_create_new_defaults() {
        let registry = empty_registry().await;
        let blank = registry.movies().create_new();
        assert!(!blank.id.is_assigned());
        assert!(blank.title.is_empty());
        assert_eq!(blank.genre, MovieGenre::Action);
    }
}

mod studio_repository {
    use super::*;

    #[tokio::test]
    async fn test_studio_round_trip_and_validation() {
        let registry = empty_registry().await;
        let repo = registry.studios();

        let added = repo.add(StudioFixtures::pinewood()).await.unwrap();
        assert!(added.id.is_assigned());
        assert_eq!(
            repo.get_by_id(added.id).await.unwrap().unwrap().name,
            "Pinewood"
        );

        let error = repo.add(domain_catalogue::Studio::blank()).await.unwrap_err();
        assert_violates_field(&error, "name");
    }

    #[tokio::test]
    async fn test_studio_delete_has_no_dependency_guard() {
        // Studios carry no delete-time guard in this core; a referencing
        // movie does not block the delete.
        let registry = empty_registry().await;
        let director = registry
            .directors()
            .add(DirectorFixtures::ann_lee())
            .await
            .unwrap();
        let studio = registry
            .studios()
            .add(StudioFixtures::pinewood())
            .await
            .unwrap();
        registry
            .movies()
            .add(
                TestMovieBuilder::new()
                    .with_director(director.id)
                    .with_studio(studio.id)
                    .build(),
            )
            .await
            .unwrap();

        registry.studios().delete(studio.id).await.unwrap();
    }
}
