//! Configuration: TOML file types, loading and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SeedJoke, ToastConfig, ToastPosition, UiConfig};
