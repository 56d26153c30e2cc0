//! Request bodies and the request-layer checks applied to them.
//!
//! These checks run before anything reaches the entity store and report
//! failures as `AppError::Validation` (`{"errors": [...]}`). Some are stricter
//! than the entity-level guards in `validation`; both layers always run.

pub mod hero;
pub mod hero_power;
pub mod power;

/// True for the values a client may use to mean "not provided".
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
