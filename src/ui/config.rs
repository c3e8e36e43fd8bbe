//! # Configuration Persistence
//!
//! The only persisted setting is the colour theme. It lives in
//! `config.json` under the platform config directory resolved by the
//! `directories` crate:
//!
//! ```text
//! ~/.config/read-their-sounds/config.json
//! ```
//!
//! A missing file means defaults. A file that cannot be read or parsed is
//! logged and also treated as defaults, so a broken config never stops the
//! app from starting.

use crate::ui::theme::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "read-their-sounds";
const CONFIG_FILE_NAME: &str = "config.json";

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the selected built-in theme.
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

fn default_theme_name() -> String {
    Theme::default_theme().name.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load from `path`. A missing file yields `Config::default()`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// The configured theme, or the default theme if the name is unknown.
    pub fn resolve_theme(&self) -> &'static Theme {
        Theme::by_name(&self.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %self.theme, "Unknown theme in config, using default");
            Theme::default_theme()
        })
    }

    /// Location of the config file.
    pub fn path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
