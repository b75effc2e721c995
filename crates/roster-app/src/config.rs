//! Settings parser for the roster config file.
//!
//! Looks for `roster/config.toml` under the platform config directory
//! (`~/.config` on Linux). Every key is optional; a missing or unparsable
//! file falls back to defaults so the app always starts.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use roster_core::prelude::*;
use roster_core::Role;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "roster";

/// Application settings, loaded once at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Settings for the collection API connection.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the deployment, down to the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Records per page, sent as the `limit` query parameter.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

/// Settings for the terminal UI.
#[derive(Debug, Clone, Deserialize)]
pub struct UiSettings {
    /// Capability role the session runs under. Read-only roles never see
    /// create/edit/delete affordances.
    #[serde(default)]
    pub role: Role,

    /// Event poll interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// chrono format string for the Created column.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            role: Role::default(),
            tick_ms: default_tick_ms(),
            date_format: default_date_format(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.phyo.ai/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u64 {
    10
}

fn default_tick_ms() -> u64 {
    50
}

fn default_date_format() -> String {
    "%d %b %Y".to_string()
}

/// Default config file location under the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// A missing file is normal and silently yields defaults; a present but
/// unreadable or unparsable file logs a warning and yields defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => return Settings::default(),
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
