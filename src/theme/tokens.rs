use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::color::HexColor;

const CSS_VARIABLE_PREFIX: &str = "--md-sys-color-";

/// Semantic color roles of the Material 3 color scheme, in canonical export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorToken {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    Background,
    OnBackground,
    Outline,
    OutlineVariant,
}

impl ColorToken {
    pub const ALL: [ColorToken; 24] = [
        Self::Primary,
        Self::OnPrimary,
        Self::PrimaryContainer,
        Self::OnPrimaryContainer,
        Self::Secondary,
        Self::OnSecondary,
        Self::SecondaryContainer,
        Self::OnSecondaryContainer,
        Self::Tertiary,
        Self::OnTertiary,
        Self::TertiaryContainer,
        Self::OnTertiaryContainer,
        Self::Error,
        Self::OnError,
        Self::ErrorContainer,
        Self::OnErrorContainer,
        Self::Surface,
        Self::OnSurface,
        Self::SurfaceVariant,
        Self::OnSurfaceVariant,
        Self::Background,
        Self::OnBackground,
        Self::Outline,
        Self::OutlineVariant,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::OnPrimary => "on-primary",
            Self::PrimaryContainer => "primary-container",
            Self::OnPrimaryContainer => "on-primary-container",
            Self::Secondary => "secondary",
            Self::OnSecondary => "on-secondary",
            Self::SecondaryContainer => "secondary-container",
            Self::OnSecondaryContainer => "on-secondary-container",
            Self::Tertiary => "tertiary",
            Self::OnTertiary => "on-tertiary",
            Self::TertiaryContainer => "tertiary-container",
            Self::OnTertiaryContainer => "on-tertiary-container",
            Self::Error => "error",
            Self::OnError => "on-error",
            Self::ErrorContainer => "error-container",
            Self::OnErrorContainer => "on-error-container",
            Self::Surface => "surface",
            Self::OnSurface => "on-surface",
            Self::SurfaceVariant => "surface-variant",
            Self::OnSurfaceVariant => "on-surface-variant",
            Self::Background => "background",
            Self::OnBackground => "on-background",
            Self::Outline => "outline",
            Self::OutlineVariant => "outline-variant",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken(pub String);

impl FromStr for ColorToken {
    type Err = UnknownToken;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|token| token.as_str() == value)
            .ok_or_else(|| UnknownToken(value.to_string()))
    }
}

/// A token name as it appears in theme JSON. Names outside the closed
/// [`ColorToken`] set are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKey {
    Known(ColorToken),
    Custom(String),
}

impl TokenKey {
    pub fn from_name(name: &str) -> Self {
        match name.parse::<ColorToken>() {
            Ok(token) => Self::Known(token),
            Err(UnknownToken(name)) => Self::Custom(name),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Known(token) => token.as_str(),
            Self::Custom(name) => name,
        }
    }

    pub fn known(&self) -> Option<ColorToken> {
        match self {
            Self::Known(token) => Some(*token),
            Self::Custom(_) => None,
        }
    }

    pub fn css_variable(&self) -> String {
        format!("{CSS_VARIABLE_PREFIX}{}", self.name())
    }
}

impl From<ColorToken> for TokenKey {
    fn from(token: ColorToken) -> Self {
        Self::Known(token)
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Token → color assignments for one display mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeMapping {
    colors: BTreeMap<TokenKey, HexColor>,
}

impl ThemeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_table(table: &[(ColorToken, HexColor)]) -> Self {
        table.iter().map(|&(token, color)| (token.into(), color)).collect()
    }

    pub fn get(&self, key: &TokenKey) -> Option<HexColor> {
        self.colors.get(key).copied()
    }

    pub fn token(&self, token: ColorToken) -> Option<HexColor> {
        self.get(&TokenKey::Known(token))
    }

    pub fn set(&mut self, key: TokenKey, color: HexColor) -> Option<HexColor> {
        self.colors.insert(key, color)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TokenKey, HexColor)> {
        self.colors.iter().map(|(key, color)| (key, *color))
    }

    pub fn covers_all_tokens(&self) -> bool {
        ColorToken::ALL.iter().all(|token| self.token(*token).is_some())
    }
}

impl FromIterator<(TokenKey, HexColor)> for ThemeMapping {
    fn from_iter<I: IntoIterator<Item = (TokenKey, HexColor)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl Serialize for ThemeMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.colors.len()))?;
        for (key, color) in &self.colors {
            map.serialize_entry(key.name(), color)?;
        }
        map.end()
    }
}
