//! Relational implementations of [`crate::domain::repositories::MappingRepository`].
//!
//! Both engines share the `urls` table layout and the same error taxonomy;
//! each owns a small function that translates its native error signals.
//!
//! # Repositories
//!
//! - [`SqliteMappingRepository`] - embedded single-file engine
//! - [`PgMappingRepository`] - pooled PostgreSQL engine
//! - [`MappingStore`] - one of the above, chosen from configuration

pub mod deadline;
pub mod mapping_store;
pub mod pg_mapping_repository;
pub mod sqlite_mapping_repository;

pub use mapping_store::MappingStore;
pub use pg_mapping_repository::PgMappingRepository;
pub use sqlite_mapping_repository::SqliteMappingRepository;
