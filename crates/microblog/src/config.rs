//! Configuration file support for the microblog.
//!
//! Loads configuration from `microblog.toml` in the working directory. The
//! `MICROBLOG_SETTINGS` environment variable may name an override file,
//! which wins when it exists and is silently skipped otherwise.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The config file name
pub const CONFIG_FILE_NAME: &str = "microblog.toml";

/// Environment variable naming an override config file
pub const SETTINGS_ENV_VAR: &str = "MICROBLOG_SETTINGS";

/// Application configuration.
///
/// Every field has a built-in default, so a missing config file (or a file
/// that sets only some fields) is fine. The loaded values are handed
/// explicitly to the auth gate and database handle at construction; nothing
/// reads configuration ambiently after startup.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    /// Path to the SQLite database file
    pub database: PathBuf,
    /// Admin username
    pub username: String,
    /// Admin password
    pub password: String,
    /// Secret used to sign the session cookie
    pub secret_key: String,
    /// Address the server binds to
    pub bind: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("microblog.db"),
            username: "admin".to_string(),
            password: "default".to_string(),
            secret_key: "development key".to_string(),
            bind: "127.0.0.1:5000".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the working directory.
    ///
    /// Resolution order: the `MICROBLOG_SETTINGS` file if the variable is
    /// set and the file exists, then `microblog.toml` if present, then the
    /// built-in defaults. A file that exists but fails to parse is a hard
    /// error.
    pub fn load(working_dir: &Path) -> Result<Self> {
        if let Ok(override_path) = std::env::var(SETTINGS_ENV_VAR) {
            let path = PathBuf::from(override_path);
            if path.exists() {
                return Self::read_file(&path);
            }
        }

        let config_path = working_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::read_file(&config_path)
    }

    /// Read and parse a specific config file. Fails if the file is missing
    /// or malformed.
    pub fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }
}
