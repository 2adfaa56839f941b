//! PostgreSQL implementation of the mapping repository (pooled engine).

use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use super::deadline::with_deadline;
use crate::config::StorageConfig;
use crate::domain::entities::NewMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL repository for alias mappings.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
/// Callers beyond `max_connections` wait for a free connection up to the
/// acquire timeout.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
    query_timeout: Duration,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Builds the bounded pool, verifies connectivity and ensures the schema.
    ///
    /// # Errors
    ///
    /// Fails if PostgreSQL is unreachable or the schema cannot be created.
    pub async fn connect(config: &StorageConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .max_lifetime(config.max_connection_lifetime)
            .idle_timeout(config.max_connection_idle_time)
            .acquire_timeout(config.connect_timeout)
            .connect(&config.database_url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        let repository = Self::new(Arc::new(pool), config.query_timeout);
        repository
            .create_schema()
            .await
            .context("Failed to create PostgreSQL schema")?;

        Ok(repository)
    }

    /// Creates the `urls` table and its alias index if they do not exist.
    pub async fn create_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS urls (
                id BIGSERIAL PRIMARY KEY,
                alias TEXT NOT NULL UNIQUE,
                url TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_alias ON urls (alias)")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }
}

/// Maps PostgreSQL error signals onto the domain taxonomy.
fn translate_pg_error(op: &'static str, alias: &str, err: sqlx::Error) -> AppError {
    if let Some(db_err) = err.as_database_error()
        && db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
    {
        return AppError::already_exists(alias);
    }

    if matches!(err, sqlx::Error::RowNotFound) {
        return AppError::not_found(alias);
    }

    tracing::error!(op, alias, error = %err, "PostgreSQL operation failed");
    AppError::storage(format!("{}: {}", op, err))
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn save(&self, new_mapping: NewMapping) -> Result<i64, AppError> {
        const OP: &str = "storage.postgres.save";

        with_deadline(self.query_timeout, OP, async {
            sqlx::query_scalar::<_, i64>(
                r#"
                INSERT INTO urls (alias, url)
                VALUES ($1, $2)
                RETURNING id
                "#,
            )
            .bind(&new_mapping.alias)
            .bind(&new_mapping.url)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| translate_pg_error(OP, &new_mapping.alias, e))
        })
        .await
    }

    async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        const OP: &str = "storage.postgres.resolve";

        with_deadline(self.query_timeout, OP, async {
            sqlx::query_scalar::<_, String>("SELECT url FROM urls WHERE alias = $1")
                .bind(alias)
                .fetch_optional(self.pool.as_ref())
                .await
                .map_err(|e| translate_pg_error(OP, alias, e))?
                .ok_or_else(|| AppError::not_found(alias))
        })
        .await
    }

    async fn delete(&self, alias: &str) -> Result<(), AppError> {
        const OP: &str = "storage.postgres.delete";

        with_deadline(self.query_timeout, OP, async {
            let result = sqlx::query("DELETE FROM urls WHERE alias = $1")
                .bind(alias)
                .execute(self.pool.as_ref())
                .await
                .map_err(|e| translate_pg_error(OP, alias, e))?;

            if result.rows_affected() == 0 {
                return Err(AppError::not_found(alias));
            }

            Ok(())
        })
        .await
    }

    async fn ping(&self) -> Result<(), AppError> {
        const OP: &str = "storage.postgres.ping";

        with_deadline(self.query_timeout, OP, async {
            sqlx::query("SELECT 1")
                .execute(self.pool.as_ref())
                .await
                .map_err(|e| translate_pg_error(OP, "", e))?;
            Ok::<_, AppError>(())
        })
        .await
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
