pub mod hero;
pub mod hero_power;
pub mod index;
pub mod power;
