//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` inside the configuration
//! directory and includes:
//! - The notes service base URL and request timeout
//! - Titles and empty-state messages for the UI

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{NotesError, Result};
use crate::types::DEFAULT_API_URL;

/// Overrides the configuration directory (used by tests and packaging)
pub const CONFIG_DIR_ENV: &str = "NOTEBOARD_CONFIG_DIR";

/// Overrides `api.base_url` for a single invocation
pub const API_URL_ENV: &str = "NOTEBOARD_API_URL";

/// Keys accepted by `config get` / `config set`
pub const VALID_KEYS: &[&str] = &[
    "api.base_url",
    "api.timeout",
    "ui.title",
    "ui.empty_message",
    "ui.archived_empty_message",
];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default, skip_serializing_if = "UiConfig::is_default")]
    pub ui: UiConfig,
}

/// Notes service connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the notes service (default: the public Dicoding notes API)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Shown by the active notes grid when it has nothing to display
    #[serde(default = "default_empty_message")]
    pub empty_message: String,

    /// Shown by the archived notes grid when it has nothing to display
    #[serde(default = "default_archived_empty_message")]
    pub archived_empty_message: String,
}

fn default_title() -> String {
    "Notes App".to_string()
}

fn default_empty_message() -> String {
    "No notes found".to_string()
}

fn default_archived_empty_message() -> String {
    "No archived notes".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            empty_message: default_empty_message(),
            archived_empty_message: default_archived_empty_message(),
        }
    }
}

impl UiConfig {
    /// Check if this config is the default (for serialization skip)
    pub fn is_default(&self) -> bool {
        *self == UiConfig::default()
    }
}

impl Config {
    /// Directory holding `config.yaml`
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV)
            && !dir.is_empty()
        {
            return PathBuf::from(dir);
        }

        directories::ProjectDirs::from("dev", "noteboard", "noteboard")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".noteboard"))
    }

    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            NotesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        Self::parse(&content)
    }

    /// Parse `config.yaml` contents, applying the same checks as [`Self::set`]
    fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_yaml_ng::from_str(content)?;
        check_timeout(config.api.timeout)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                NotesError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            NotesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Set restrictive permissions on Unix (owner read/write only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, permissions)?;
        }

        Ok(())
    }

    /// Resolved base URL: environment override first, then the config file
    pub fn base_url(&self) -> Result<Url> {
        let raw = match env::var(API_URL_ENV) {
            Ok(url) if !url.is_empty() => url,
            _ => self.api.base_url.clone(),
        };
        parse_base_url(&raw)
    }

    /// Get the request timeout duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout)
    }

    /// Read a value by dotted key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api.base_url" => Ok(self.api.base_url.clone()),
            "api.timeout" => Ok(self.api.timeout.to_string()),
            "ui.title" => Ok(self.ui.title.clone()),
            "ui.empty_message" => Ok(self.ui.empty_message.clone()),
            "ui.archived_empty_message" => Ok(self.ui.archived_empty_message.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a value by dotted key, validating it first
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => {
                parse_base_url(value)?;
                self.api.base_url = value.trim_end_matches('/').to_string();
            }
            "api.timeout" => {
                let seconds: u64 = value.parse().map_err(|_| {
                    NotesError::Config(format!(
                        "invalid value '{value}' for api.timeout. Expected a whole number of seconds"
                    ))
                })?;
                self.api.timeout = check_timeout(seconds)?;
            }
            "ui.title" => self.ui.title = non_empty(key, value)?,
            "ui.empty_message" => self.ui.empty_message = non_empty(key, value)?,
            "ui.archived_empty_message" => {
                self.ui.archived_empty_message = non_empty(key, value)?
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(NotesError::Config(format!(
            "api.base_url must be an http(s) URL, got '{raw}'"
        )));
    }
    Ok(url)
}

fn check_timeout(seconds: u64) -> Result<u64> {
    if seconds == 0 {
        return Err(NotesError::Config(
            "api.timeout must be at least 1 second".to_string(),
        ));
    }
    Ok(seconds)
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(NotesError::Config(format!("{key} cannot be empty")));
    }
    Ok(value.to_string())
}

fn unknown_key(key: &str) -> NotesError {
    NotesError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    ))
}
