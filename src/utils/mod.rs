//! Utility functions for alias generation and URL validation.
//!
//! - [`alias_generator`] - Random alias generation and custom alias validation
//! - [`url_validator`] - Target URL validation

pub mod alias_generator;
pub mod url_validator;
