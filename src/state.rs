//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::AliasService;
use crate::domain::repositories::MappingRepository;

/// Service handle shared by every request.
///
/// Built once at startup and passed to the router; holds no mutable state of
/// its own.
#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AliasService<dyn MappingRepository>>,
}

impl AppState {
    pub fn new(alias_service: Arc<AliasService<dyn MappingRepository>>) -> Self {
        Self { alias_service }
    }

    /// Builds the state around any repository, wiring a default service.
    pub fn from_repository(repository: Arc<dyn MappingRepository>, max_attempts: usize) -> Self {
        Self::new(Arc::new(AliasService::with_max_attempts(
            repository,
            max_attempts,
        )))
    }
}
