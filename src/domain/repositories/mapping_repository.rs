//! Repository trait for alias mapping storage.

use crate::domain::entities::NewMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for alias mappings.
///
/// Alias uniqueness is enforced by the engine's UNIQUE constraint, never by a
/// lookup before insert, so concurrent saves on one alias resolve to exactly
/// one success.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - embedded engine
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - pooled engine
/// - [`crate::infrastructure::persistence::MappingStore`] - engine chosen at startup
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping and returns its engine-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasAlreadyExists`] if the alias is taken.
    /// Returns [`AppError::Storage`] on any other engine failure.
    async fn save(&self, new_mapping: NewMapping) -> Result<i64, AppError>;

    /// Looks up the target URL bound to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasNotFound`] if no row matches.
    /// Returns [`AppError::Storage`] on engine failures.
    async fn resolve(&self, alias: &str) -> Result<String, AppError>;

    /// Removes the mapping bound to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasNotFound`] if no row was affected.
    /// Returns [`AppError::Storage`] on engine failures.
    async fn delete(&self, alias: &str) -> Result<(), AppError>;

    /// Round-trips a trivial query to prove the engine is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the engine does not answer.
    async fn ping(&self) -> Result<(), AppError>;

    /// Releases the underlying connections. Safe to call more than once.
    async fn close(&self);
}
