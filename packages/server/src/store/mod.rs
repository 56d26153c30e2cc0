//! Entity store: create, fetch, list, update and delete for each entity.
//!
//! `find_*` returns `Ok(None)` for a missing id; `get_*` turns that into
//! `AppError::NotFound`. Every write runs in its own transaction: entity-level
//! guards from `validation` are checked inline before the row is written, and
//! returning early drops the transaction, which rolls it back.

pub mod hero;
pub mod hero_power;
pub mod power;
