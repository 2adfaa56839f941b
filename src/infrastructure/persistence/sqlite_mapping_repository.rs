//! SQLite implementation of the mapping repository (embedded engine).

use anyhow::Context;
use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use super::deadline::with_deadline;
use crate::config::StorageConfig;
use crate::domain::entities::NewMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Embedded repository backed by a single-file SQLite database.
///
/// Runs on exactly one connection: SQLite serializes writers anyway, and an
/// in-memory database only lives as long as its connection.
pub struct SqliteMappingRepository {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl SqliteMappingRepository {
    /// Wraps an existing pool. The schema is not touched.
    pub fn new(pool: SqlitePool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Opens (creating if missing) the database file and ensures the schema.
    ///
    /// # Errors
    ///
    /// Fails if the database cannot be opened or the schema cannot be created.
    pub async fn connect(config: &StorageConfig) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .with_context(|| format!("Invalid SQLite URL '{}'", config.database_url))?
            .create_if_missing(true)
            .busy_timeout(config.query_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .acquire_timeout(config.connect_timeout)
            .connect_with(options)
            .await
            .context("Failed to open SQLite database")?;

        let repository = Self::new(pool, config.query_timeout);
        repository
            .create_schema()
            .await
            .context("Failed to create SQLite schema")?;

        Ok(repository)
    }

    /// Creates the `urls` table and its alias index if they do not exist.
    ///
    /// `AUTOINCREMENT` keeps ids of deleted rows from being handed out again.
    pub async fn create_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS urls (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                alias TEXT NOT NULL UNIQUE,
                url TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_alias ON urls (alias)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Maps SQLite error signals onto the domain taxonomy.
///
/// `SQLITE_CONSTRAINT_UNIQUE` (2067) and `SQLITE_CONSTRAINT_PRIMARYKEY` (1555)
/// both surface as unique violations.
fn translate_sqlite_error(op: &'static str, alias: &str, err: sqlx::Error) -> AppError {
    if let Some(db_err) = err.as_database_error()
        && db_err.is_unique_violation()
    {
        return AppError::already_exists(alias);
    }

    if matches!(err, sqlx::Error::RowNotFound) {
        return AppError::not_found(alias);
    }

    tracing::error!(op, alias, error = %err, "SQLite operation failed");
    AppError::storage(format!("{}: {}", op, err))
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn save(&self, new_mapping: NewMapping) -> Result<i64, AppError> {
        const OP: &str = "storage.sqlite.save";

        with_deadline(self.query_timeout, OP, async {
            let result = sqlx::query("INSERT INTO urls (alias, url) VALUES (?, ?)")
                .bind(&new_mapping.alias)
                .bind(&new_mapping.url)
                .execute(&self.pool)
                .await
                .map_err(|e| translate_sqlite_error(OP, &new_mapping.alias, e))?;

            Ok::<_, AppError>(result.last_insert_rowid())
        })
        .await
    }

    async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        const OP: &str = "storage.sqlite.resolve";

        with_deadline(self.query_timeout, OP, async {
            sqlx::query_scalar::<_, String>("SELECT url FROM urls WHERE alias = ?")
                .bind(alias)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| translate_sqlite_error(OP, alias, e))?
                .ok_or_else(|| AppError::not_found(alias))
        })
        .await
    }

    async fn delete(&self, alias: &str) -> Result<(), AppError> {
        const OP: &str = "storage.sqlite.delete";

        with_deadline(self.query_timeout, OP, async {
            let result = sqlx::query("DELETE FROM urls WHERE alias = ?")
                .bind(alias)
                .execute(&self.pool)
                .await
                .map_err(|e| translate_sqlite_error(OP, alias, e))?;

            if result.rows_affected() == 0 {
                return Err(AppError::not_found(alias));
            }

            Ok(())
        })
        .await
    }

    async fn ping(&self) -> Result<(), AppError> {
        const OP: &str = "storage.sqlite.ping";

        with_deadline(self.query_timeout, OP, async {
            sqlx::query("SELECT 1")
                .execute(&self.pool)
                .await
                .map_err(|e| translate_sqlite_error(OP, "", e))?;
            Ok::<_, AppError>(())
        })
        .await
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_translates_to_alias_not_found() {
        let err = translate_sqlite_error("test.op", "ex1", sqlx::Error::RowNotFound);

        assert!(matches!(err, AppError::AliasNotFound { alias } if alias == "ex1"));
    }

    #[test]
    fn test_other_errors_translate_to_storage() {
        let err = translate_sqlite_error("test.op", "ex1", sqlx::Error::PoolTimedOut);

        assert!(matches!(err, AppError::Storage { .. }));
    }
}
