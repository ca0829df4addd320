//
//  testrail-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads and saves the CLI's TOML configuration file from the
//! platform-specific configuration directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/testrail/config.toml`
//! - **macOS**: `~/Library/Application Support/testrail/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\testrail\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [server]
//! url = "https://example.testrail.io"
//! user = "qa@example.com"
//! api_key = "your-api-key"
//!
//! [output]
//! format = "table"
//! ```
//!
//! Command-line flags and `TESTRAIL_*` environment variables take precedence
//! over the file; see [`crate::cli::GlobalOptions`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use testrail_cli::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("server.url", "https://example.testrail.io".to_string());
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::auth::AuthCredential;

/// Every key accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &[
    "server.url",
    "server.user",
    "server.password",
    "server.api_key",
    "output.format",
];

/// Global configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings for the TestRail installation.
    #[serde(default)]
    pub server: ServerConfig,

    /// Output preferences.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Connection settings for a TestRail installation.
///
/// When both `password` and `api_key` are set, the API key is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the installation, e.g. `https://example.testrail.io`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Login email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Output preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `"table"` (default) or `"json"`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "table".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined,
    /// or the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`, returning defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path` as pretty-printed TOML.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        write_config_file(path, &content)
    }

    /// Returns the path to the configuration file. The file may not exist.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "testrail")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Gets a value by dotted key (see [`KEYS`]).
    ///
    /// Returns `None` for unknown keys and unset values.
    ///
    /// ```rust
    /// use testrail_cli::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.get("output.format"), Some("table".to_string()));
    /// assert_eq!(config.get("server.url"), None);
    /// assert_eq!(config.get("unknown"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "server.url" => self.server.url.clone(),
            "server.user" => self.server.user.clone(),
            "server.password" => self.server.password.clone(),
            "server.api_key" => self.server.api_key.clone(),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }

    /// Sets a value by dotted key. Returns `false` for unknown keys.
    ///
    /// An empty value clears optional server settings. Changes are only
    /// persisted by [`save`](Self::save).
    pub fn set(&mut self, key: &str, value: String) -> bool {
        let optional = (!value.trim().is_empty()).then(|| value.clone());
        match key {
            "server.url" => self.server.url = optional,
            "server.user" => self.server.user = optional,
            "server.password" => self.server.password = optional,
            "server.api_key" => self.server.api_key = optional,
            "output.format" => self.output.format = value,
            _ => return false,
        }
        true
    }

    /// Builds the credential described by the `[server]` section.
    ///
    /// Returns `None` when no user is configured or neither a password nor
    /// an API key is set. The API key wins when both are present.
    pub fn server_credential(&self) -> Option<AuthCredential> {
        let user = self.server.user.as_deref()?;
        match (&self.server.api_key, &self.server.password) {
            (Some(key), _) => Some(AuthCredential::api_key(user, key.as_str())),
            (None, Some(password)) => Some(AuthCredential::basic(user, password.as_str())),
            (None, None) => None,
        }
    }
}
