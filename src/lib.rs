pub mod config;
pub mod password;
pub mod text;
pub mod time;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
