//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local use.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use validator::Validate;

use crate::db::keys;
use crate::models::Coords;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone, Validate)]
pub struct Config {
    /// Directory for the file-backed store
    pub storage_dir: PathBuf,
    /// Fixed key the ledger is stored under
    #[validate(length(min = 1, max = 64))]
    pub storage_key: String,
    /// Zoom level used when centering the map
    #[validate(range(min = 1, max = 19))]
    pub map_zoom_level: u8,
    /// Fallback latitude when no map location or position is known
    #[validate(range(min = -90.0, max = 90.0))]
    pub default_latitude: f64,
    /// Fallback longitude when no map location or position is known
    #[validate(range(min = -180.0, max = 180.0))]
    pub default_longitude: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".workout-ledger"),
            storage_key: keys::WORKOUTS.to_string(),
            map_zoom_level: 13,
            default_latitude: 42.0,
            default_longitude: 42.0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        let config = Self {
            storage_dir: env::var("LEDGER_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            storage_key: env::var("LEDGER_STORAGE_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.storage_key),
            map_zoom_level: parse_var("MAP_ZOOM_LEVEL")?.unwrap_or(defaults.map_zoom_level),
            default_latitude: parse_var("DEFAULT_LATITUDE")?.unwrap_or(defaults.default_latitude),
            default_longitude: parse_var("DEFAULT_LONGITUDE")?
                .unwrap_or(defaults.default_longitude),
        };

        config.validate()?;
        Ok(config)
    }

    /// Coordinates used when the user has not picked a location.
    pub fn default_coords(&self) -> Coords {
        Coords::new(self.default_latitude, self.default_longitude)
    }
}

fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("Configuration out of range: {0}")]
    OutOfRange(#[from] validator::ValidationErrors),
}
