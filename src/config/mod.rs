use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::theme::{Preset, EXPORT_FILE_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPathError {
    MissingHomeDirectory,
}

pub const APP_DIR: &str = "m3-theme-editor";
const APP_CONFIG_FILE: &str = "config.json";

const DEFAULT_HEX_REVERT_DELAY_MS: u64 = 2_000;

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
    #[serde(default)]
    pub initial_preset: Option<String>,
    #[serde(default)]
    pub hex_revert_delay_ms: Option<u64>,
    #[serde(default)]
    pub export_file_name: Option<String>,
}

impl AppConfig {
    /// Unknown preset names fall back to the default preset.
    pub fn initial_preset(&self) -> Preset {
        let Some(name) = self.initial_preset.as_deref() else {
            return Preset::Default;
        };
        name.parse().unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid initial_preset in config.json; using default");
            Preset::Default
        })
    }

    pub fn hex_revert_delay(&self) -> Duration {
        Duration::from_millis(self.hex_revert_delay_ms.unwrap_or(DEFAULT_HEX_REVERT_DELAY_MS))
    }

    pub fn export_file_name(&self) -> &str {
        self.export_file_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(EXPORT_FILE_NAME)
    }

    /// Directory for persisted theme state: `storage_dir` if set, else the config directory.
    pub fn storage_dir(&self) -> Result<PathBuf, ConfigPathError> {
        if let Some(dir) = &self.storage_dir {
            return Ok(dir.clone());
        }
        let (xdg_config_home, home) = config_env_dirs();
        app_config_dir(APP_DIR, xdg_config_home.as_deref(), home.as_deref())
    }
}

pub fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return AppConfig::default(),
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_dir(
    app_dir: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    Ok(path)
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = app_config_dir(app_dir, xdg_config_home, home)?;
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
