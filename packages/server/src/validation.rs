//! Entity-level field guards.
//!
//! These run inside the entity store immediately before a guarded column is
//! written, on insert and on update alike. A failure aborts the enclosing
//! transaction. Request handlers apply their own, stricter checks first (see
//! `models`); the two layers are evaluated independently.

use common::Strength;
use thiserror::Error;

/// Minimum length of `powers.description`, counted in characters.
pub const MIN_DESCRIPTION_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Description must be at least 10 characters long.")]
    DescriptionTooShort,

    #[error("Strength must be one of {}.", Strength::allowed())]
    InvalidStrength(String),

    #[error("{0} must not be empty.")]
    Empty(&'static str),
}

pub fn validate_description(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooShort);
    }
    Ok(())
}

/// Parse a raw strength value, rejecting anything outside the allowed set.
pub fn validate_strength(value: &str) -> Result<Strength, ValidationError> {
    value
        .parse()
        .map_err(|_| ValidationError::InvalidStrength(value.to_string()))
}

/// Reject blank text columns (`heroes.name`, `heroes.super_name`, `powers.name`).
pub fn validate_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(())
}
