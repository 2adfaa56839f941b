//! Core domain entities.
//!
//! - [`Mapping`] - A persisted alias to target URL binding
//! - [`NewMapping`] - Input for creating a mapping

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
