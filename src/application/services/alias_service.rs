//! Alias save, resolve and delete service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::alias_generator::{generate_alias, validate_alias};
use crate::utils::url_validator::validate_target_url;

/// Default number of generated aliases tried per save.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Stateless entry point used by the HTTP handlers and the admin CLI.
///
/// Composes alias generation with the mapping repository. The repository is
/// the single source of truth for alias uniqueness; this service never checks
/// for an existing alias before inserting.
pub struct AliasService<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    max_attempts: usize,
}

impl<R: MappingRepository + ?Sized> AliasService<R> {
    /// Creates a new alias service.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_max_attempts(repository, DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a service that tries up to `max_attempts` generated aliases
    /// per save. Values below 1 are treated as 1.
    pub fn with_max_attempts(repository: Arc<R>, max_attempts: usize) -> Self {
        Self {
            repository,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Saves a mapping under the requested alias, or a generated one.
    ///
    /// An absent or empty `requested_alias` triggers generation. A generated
    /// alias that collides is replaced and retried, up to the configured
    /// attempt count. A caller-chosen alias is never retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL or alias is malformed.
    /// Returns [`AppError::AliasAlreadyExists`] if the alias is taken (or every
    /// generated attempt collided).
    /// Returns [`AppError::Storage`] on engine failures.
    pub async fn save_mapping(
        &self,
        url: String,
        requested_alias: Option<String>,
    ) -> Result<Mapping, AppError> {
        validate_target_url(&url).map_err(|e| {
            AppError::invalid_input("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        match requested_alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => {
                validate_alias(&alias)?;
                self.insert(NewMapping::new(alias, url)).await
            }
            None => self.insert_generated(url).await,
        }
    }

    /// Returns the target URL bound to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `alias` is empty.
    /// Returns [`AppError::AliasNotFound`] if no mapping matches.
    /// Returns [`AppError::Storage`] on engine failures.
    pub async fn resolve_alias(&self, alias: &str) -> Result<String, AppError> {
        ensure_alias_present(alias)?;

        self.repository.resolve(alias).await
    }

    /// Deletes the mapping bound to `alias`.
    ///
    /// Deleting an alias that does not exist is an error, not a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `alias` is empty.
    /// Returns [`AppError::AliasNotFound`] if no mapping matches.
    /// Returns [`AppError::Storage`] on engine failures.
    pub async fn delete_mapping(&self, alias: &str) -> Result<(), AppError> {
        ensure_alias_present(alias)?;

        self.repository.delete(alias).await?;
        tracing::info!(alias, "Mapping deleted");
        Ok(())
    }

    /// Verifies that the storage engine answers.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let id = self.repository.save(new_mapping.clone()).await?;
        let mapping = new_mapping.into_mapping(id);

        tracing::info!(id = mapping.id, alias = %mapping.alias, "Mapping saved");
        Ok(mapping)
    }

    async fn insert_generated(&self, url: String) -> Result<Mapping, AppError> {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            let alias = generate_alias();

            match self.insert(NewMapping::new(alias, url.clone())).await {
                Err(AppError::AliasAlreadyExists { alias }) => {
                    tracing::warn!(alias = %alias, attempt, "Generated alias collided");
                    last_error = Some(AppError::already_exists(alias));
                }
                other => return other,
            }
        }

        Err(last_error.unwrap_or_else(|| AppError::already_exists("")))
    }
}

fn ensure_alias_present(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() {
        return Err(AppError::invalid_input("Alias must not be empty", json!({})));
    }
    Ok(())
}
