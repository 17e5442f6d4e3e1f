mod common;

use linkcut::domain::entities::NewUrlRecord;
use linkcut::domain::repositories::UrlRepository;
use linkcut::error::AppError;
use linkcut::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_record(code: &str, url: &str) -> NewUrlRecord {
    NewUrlRecord {
        original_url: url.to_string(),
        short_code: code.to_string(),
    }
}

#[sqlx::test]
async fn test_insert(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo
        .insert(new_record("aB3xY9", "https://example.com"))
        .await
        .unwrap();

    assert!(record.id > 0);
    assert_eq!(record.short_code, "aB3xY9");
    assert_eq!(record.original_url, "https://example.com");
    assert_eq!(record.access_count, 0);
}

#[sqlx::test]
async fn test_insert_duplicate_original_url(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.insert(new_record("code01", "https://example.com"))
        .await
        .unwrap();

    let result = repo.insert(new_record("code02", "https://example.com")).await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::DuplicateUrl { .. }
    ));
}

#[sqlx::test]
async fn test_insert_duplicate_short_code(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.insert(new_record("code01", "https://one.example.com"))
        .await
        .unwrap();

    let result = repo.insert(new_record("code01", "https://two.example.com")).await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::DuplicateUrl { .. }
    ));
}

#[sqlx::test]
async fn test_find_by_short_code(pool: PgPool) {
    common::create_test_url(&pool, "abc123", "https://example.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo.find_by_short_code("abc123").await.unwrap();

    assert!(record.is_some());
    assert_eq!(record.unwrap().original_url, "https://example.com");
}

#[sqlx::test]
async fn test_find_by_short_code_not_found(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo.find_by_short_code("missing").await.unwrap();

    assert!(record.is_none());
}

#[sqlx::test]
async fn test_find_by_original_url(pool: PgPool) {
    common::create_test_url(&pool, "xyz789", "https://unique.example.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo
        .find_by_original_url("https://unique.example.com")
        .await
        .unwrap();

    assert!(record.is_some());
    assert_eq!(record.unwrap().short_code, "xyz789");
}

#[sqlx::test]
async fn test_find_by_original_url_not_found(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo
        .find_by_original_url("https://absent.example.com")
        .await
        .unwrap();

    assert!(record.is_none());
}

#[sqlx::test]
async fn test_increment_access_count(pool: PgPool) {
    let id = common::create_test_url(&pool, "abc123", "https://example.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    repo.increment_access_count(id).await.unwrap();
    repo.increment_access_count(id).await.unwrap();

    assert_eq!(common::access_count(&pool, "abc123").await, 2);
}

#[sqlx::test]
async fn test_update_original_url_preserves_count(pool: PgPool) {
    let id = common::create_test_url_with_count(&pool, "abc123", "https://old.example.com", 4).await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo
        .update_original_url(id, "https://new.example.com")
        .await
        .unwrap();

    assert_eq!(record.original_url, "https://new.example.com");
    assert_eq!(record.short_code, "abc123");
    assert_eq!(record.access_count, 4);
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let id = common::create_test_url(&pool, "abc123", "https://example.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.delete(id).await.unwrap();

    let record = repo.find_by_short_code("abc123").await.unwrap();
    assert!(record.is_none());
}
