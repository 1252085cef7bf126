//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base path prefix all routes are nested under (for non-root deployments)
    pub base_path: String,
    /// Location of the local storage database
    pub database_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a local-use default; `BASE_PATH` and `DATABASE_PATH`
    /// override it.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let base_path = env::var("BASE_PATH").unwrap_or_else(|_| "/".to_string());
        let database_path = match env::var("DATABASE_PATH") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_database_path()?,
        };

        Ok(Self {
            base_path,
            database_path,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            base_path: "/".to_string(),
            database_path: PathBuf::from(":memory:"),
        }
    }
}

/// Default database location under the platform data directory.
fn default_database_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
    Ok(dir.join("progress-tracker").join("progress-tracker.db"))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No user data directory available; set DATABASE_PATH")]
    NoDataDir,
}
