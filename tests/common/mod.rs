#![allow(dead_code)]

use alias_shortener::config::StorageConfig;
use alias_shortener::domain::repositories::MappingRepository;
use alias_shortener::infrastructure::persistence::{PgMappingRepository, SqliteMappingRepository};
use alias_shortener::state::AppState;
use sqlx::{PgPool, SqlitePool};
use std::sync::Arc;
use std::time::Duration;

pub const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Fresh embedded repository on a private in-memory database.
pub async fn embedded_repository() -> SqliteMappingRepository {
    SqliteMappingRepository::connect(&StorageConfig::embedded("sqlite::memory:"))
        .await
        .unwrap()
}

/// Pooled repository on the per-test database provided by `#[sqlx::test]`.
pub async fn pooled_repository(pool: PgPool) -> PgMappingRepository {
    let repo = PgMappingRepository::new(Arc::new(pool), QUERY_TIMEOUT);
    repo.create_schema().await.unwrap();
    repo
}

pub async fn insert_mapping(pool: &SqlitePool, alias: &str, url: &str) -> i64 {
    sqlx::query("INSERT INTO urls (alias, url) VALUES (?, ?)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// App state over a fresh embedded repository.
///
/// The returned pool shares the repository's single connection, so test
/// fixtures written through it are visible to the handlers.
pub async fn create_test_state() -> (AppState, SqlitePool) {
    let repo = embedded_repository().await;
    let pool = repo.pool().clone();
    let repo: Arc<dyn MappingRepository> = Arc::new(repo);

    (AppState::from_repository(repo, 3), pool)
}
