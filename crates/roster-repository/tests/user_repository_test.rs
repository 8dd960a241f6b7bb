//! Integration tests for SqlUserRepository.
//!
//! These tests run against a temporary SQLite database through the same
//! `Any` pool used in production.

mod common;

use common::TestDatabase;
use roster_core::{NewUser, RosterError, UserId};
use roster_repository::{SqlUserRepository, UserRepository};

#[tokio::test]
async fn test_list_all_empty() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    let users = repo.list_all().await.expect("Failed to list users");
    assert!(users.is_empty());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_insert_assigns_id() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    let saved = repo
        .insert(&NewUser::new("alice", "alice@example.com"))
        .await
        .expect("Failed to insert user");

    assert_eq!(saved.id, UserId::new(1));
    assert_eq!(saved.username, "alice");
    assert_eq!(saved.email, "alice@example.com");

    let users = repo.list_all().await.unwrap();
    assert_eq!(users, vec![saved]);
}

#[tokio::test]
async fn test_list_all_in_insertion_order() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    for name in ["carol", "alice", "bob"] {
        repo.insert(&NewUser::new(name, format!("{}@example.com", name)))
            .await
            .unwrap();
    }

    let names: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(names, vec!["carol", "alice", "bob"]);
}

#[tokio::test]
async fn test_insert_duplicate_username_is_integrity_error() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    repo.insert(&NewUser::new("bob", "bob@example.com"))
        .await
        .unwrap();

    let result = repo.insert(&NewUser::new("bob", "other@example.com")).await;
    assert!(matches!(result, Err(RosterError::Integrity(_))));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_insert_duplicate_email_is_integrity_error() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    repo.insert(&NewUser::new("bob", "bob@example.com"))
        .await
        .unwrap();

    let result = repo.insert(&NewUser::new("robert", "bob@example.com")).await;
    assert!(matches!(result, Err(RosterError::Integrity(_))));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_by_id() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    let alice = repo
        .insert(&NewUser::new("alice", "alice@example.com"))
        .await
        .unwrap();
    let bob = repo
        .insert(&NewUser::new("bob", "bob@example.com"))
        .await
        .unwrap();

    assert!(repo.delete_by_id(alice.id).await.unwrap());

    let users = repo.list_all().await.unwrap();
    assert_eq!(users, vec![bob]);

    // Second delete of the same id finds nothing
    assert!(!repo.delete_by_id(alice.id).await.unwrap());
}

#[tokio::test]
async fn test_delete_nonexistent_user() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    assert!(!repo.delete_by_id(UserId::new(999)).await.unwrap());
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    let first = repo
        .insert(&NewUser::new("alice", "alice@example.com"))
        .await
        .unwrap();
    repo.delete_by_id(first.id).await.unwrap();

    let second = repo
        .insert(&NewUser::new("alice", "alice@example.com"))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_bootstrap_schema_is_idempotent() {
    let db = TestDatabase::new().await;
    let pool = db.pool();
    let repo = SqlUserRepository::new(pool.clone());

    repo.insert(&NewUser::new("alice", "alice@example.com"))
        .await
        .unwrap();

    pool.bootstrap_schema().await.expect("Second bootstrap failed");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_health_check() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    repo.health_check().await.expect("Health check failed");
}

#[tokio::test]
async fn test_operations_fail_after_close() {
    let db = TestDatabase::new().await;
    let pool = db.pool();
    let repo = SqlUserRepository::new(pool.clone());

    pool.close().await;

    let result = repo.list_all().await;
    assert!(matches!(result, Err(RosterError::Database(_))));
}
