//! Alias generation and validation utilities.
//!
//! Generated aliases are short and random but not guaranteed unique; the
//! storage engine's UNIQUE constraint is the only uniqueness check.

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

use crate::error::AppError;

/// Length of a generated alias.
pub const ALIAS_LENGTH: usize = 6;

/// Maximum length of a caller-chosen alias.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Path segments owned by the HTTP router that cannot be used as aliases.
const RESERVED_ALIASES: &[&str] = &["health", "url", "api"];

static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias pattern is a valid regex")
});

/// Generates a random alias of [`ALIAS_LENGTH`] characters from `[A-Za-z0-9]`.
///
/// Uses the thread-local RNG.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias();
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(ALIAS_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a caller-chosen alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `_` and `-`
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() {
        return Err(AppError::invalid_input(
            "Alias must not be empty",
            json!({}),
        ));
    }

    if alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::invalid_input(
            format!("Alias must be at most {} characters", MAX_ALIAS_LENGTH),
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::invalid_input(
            "Alias can only contain letters, digits, '_' and '-'",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::invalid_input(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
