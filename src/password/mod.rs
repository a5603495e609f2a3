// Random password generation and strength rating

pub mod error;
pub mod generator;
pub mod strength;

pub use error::PasswordError;
pub use generator::{character_pool, generate, generate_default, PasswordOptions, MAX_LENGTH};
pub use strength::{strength, Strength};
