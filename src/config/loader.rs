use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::error::ValidationError;
use crate::ui::jokes::{validate_joke_text, MIN_RATING};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/jokerate/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("jokerate").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise behaves like [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Tick rate and toast duration are non-zero
    /// - Every seed joke has valid text and a rating no lower than the floor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.toasts.auto_close_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "toasts.auto_close_ms must be greater than zero".to_string(),
            });
        }

        for (index, seed) in self.jokes.iter().enumerate() {
            if let Err(err) = validate_joke_text(&seed.text) {
                let reason = match err {
                    ValidationError::Empty => "text is empty".to_string(),
                    ValidationError::TooLong { len, max } => {
                        format!("text is {} characters, limit is {}", len, max)
                    }
                };
                return Err(ConfigError::ValidationError {
                    message: format!("Joke #{}: {}", index + 1, reason),
                });
            }

            if seed.rating < MIN_RATING {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Joke #{}: rating {} is below the minimum of {}",
                        index + 1,
                        seed.rating,
                        MIN_RATING
                    ),
                });
            }
        }

        Ok(())
    }
}
