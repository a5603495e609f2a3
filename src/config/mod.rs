pub mod error;
pub mod preferences;

pub use error::ConfigError;
pub use preferences::{Preferences, DEFAULT_CONFIG_FILE};
