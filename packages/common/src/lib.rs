pub mod strength;

pub use strength::{ParseStrengthError, Strength};
