use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::ColorError;
use crate::storage::StorageError;

pub mod derive;
pub mod hex_field;
pub mod presets;
pub mod store;
pub mod tokens;

pub use derive::{dark_rule, derive_dark, derive_dark_mapping, random_theme, DarkRule};
pub use hex_field::{HexCommit, HexField};
pub use presets::{default_dark_mapping, Preset, DEFAULT_DARK_BACKGROUND};
pub use store::ThemeStore;
pub use tokens::{ColorToken, ThemeMapping, TokenKey};

pub const EXPORT_FILE_NAME: &str = "material-theme.json";
pub const EXPORT_MIME_TYPE: &str = "application/json";

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    InvalidColor(#[from] ColorError),
    #[error("unknown preset {0:?}")]
    UnknownPreset(String),
    #[error("malformed theme JSON")]
    MalformedJson(#[source] serde_json::Error),
    #[error("theme JSON must be an object of token/color pairs")]
    NotAnObject,
    #[error("failed to serialize theme")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to read theme file: {path}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to write theme file: {path}")]
    WriteFile { path: PathBuf, source: io::Error },
    #[error("theme storage failed")]
    Storage(#[from] StorageError),
}

/// Which display modes an update touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeScope {
    Light,
    Dark,
    #[default]
    Both,
}

impl ThemeScope {
    pub const fn includes_light(self) -> bool {
        matches!(self, Self::Light | Self::Both)
    }

    pub const fn includes_dark(self) -> bool {
        matches!(self, Self::Dark | Self::Both)
    }
}

impl FromStr for ThemeScope {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "both" => Ok(Self::Both),
            other => Err(format!("unknown theme scope {other:?}; expected light, dark or both")),
        }
    }
}
