use std::fmt;
use std::str::FromStr;

use crate::color::HexColor;

use super::tokens::{ColorToken, ThemeMapping};
use super::ThemeError;

use ColorToken::*;

/// Built-in light-mode color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Default,
    Blue,
    Green,
    Orange,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Self::Default, Self::Blue, Self::Green, Self::Orange];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
        }
    }

    pub fn mapping(self) -> ThemeMapping {
        let table = match self {
            Self::Default => &DEFAULT_LIGHT,
            Self::Blue => &BLUE_LIGHT,
            Self::Green => &GREEN_LIGHT,
            Self::Orange => &ORANGE_LIGHT,
        };
        ThemeMapping::from_table(table)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = ThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == value)
            .ok_or_else(|| ThemeError::UnknownPreset(value.to_string()))
    }
}

/// The hand-tuned dark scheme restored by "reset dark mode". Not derived from any light scheme.
pub fn default_dark_mapping() -> ThemeMapping {
    ThemeMapping::from_table(&DEFAULT_DARK)
}

pub const DEFAULT_DARK_BACKGROUND: HexColor = HexColor::from_u32(0x000000);

const fn c(value: u32) -> HexColor {
    HexColor::from_u32(value)
}

pub(crate) const DEFAULT_LIGHT: [(ColorToken, HexColor); 24] = [
    (Primary, c(0x6750A4)),
    (OnPrimary, c(0xFFFFFF)),
    (PrimaryContainer, c(0xEADDFF)),
    (OnPrimaryContainer, c(0x21005D)),
    (Secondary, c(0x625B71)),
    (OnSecondary, c(0xFFFFFF)),
    (SecondaryContainer, c(0xE8DEF8)),
    (OnSecondaryContainer, c(0x1D192B)),
    (Tertiary, c(0x7D5260)),
    (OnTertiary, c(0xFFFFFF)),
    (TertiaryContainer, c(0xFFD8E4)),
    (OnTertiaryContainer, c(0x31111D)),
    (Error, c(0xBA1A1A)),
    (OnError, c(0xFFFFFF)),
    (ErrorContainer, c(0xFFDAD6)),
    (OnErrorContainer, c(0x410002)),
    (Surface, c(0xFFFBFE)),
    (OnSurface, c(0x1C1B1F)),
    (SurfaceVariant, c(0xE7E0EC)),
    (OnSurfaceVariant, c(0x49454F)),
    (Background, c(0xFFFBFE)),
    (OnBackground, c(0x1C1B1F)),
    (Outline, c(0x79747E)),
    (OutlineVariant, c(0xCAC4D0)),
];

const BLUE_LIGHT: [(ColorToken, HexColor); 24] = [
    (Primary, c(0x1976D2)),
    (OnPrimary, c(0xFFFFFF)),
    (PrimaryContainer, c(0xD1E7FF)),
    (OnPrimaryContainer, c(0x001F33)),
    (Secondary, c(0x536878)),
    (OnSecondary, c(0xFFFFFF)),
    (SecondaryContainer, c(0xD6E7F7)),
    (OnSecondaryContainer, c(0x0F1F2A)),
    (Tertiary, c(0x6B5B95)),
    (OnTertiary, c(0xFFFFFF)),
    (TertiaryContainer, c(0xE9DDFF)),
    (OnTertiaryContainer, c(0x251431)),
    (Error, c(0xBA1A1A)),
    (OnError, c(0xFFFFFF)),
    (ErrorContainer, c(0xFFDAD6)),
    (OnErrorContainer, c(0x410002)),
    (Surface, c(0xF8FEFF)),
    (OnSurface, c(0x191C1E)),
    (SurfaceVariant, c(0xDEE3EA)),
    (OnSurfaceVariant, c(0x42474E)),
    (Background, c(0xF8FEFF)),
    (OnBackground, c(0x191C1E)),
    (Outline, c(0x71787E)),
    (OutlineVariant, c(0xC2C7CE)),
];

const GREEN_LIGHT: [(ColorToken, HexColor); 24] = [
    (Primary, c(0x4CAF50)),
    (OnPrimary, c(0xFFFFFF)),
    (PrimaryContainer, c(0xD7F2D9)),
    (OnPrimaryContainer, c(0x0A2E0E)),
    (Secondary, c(0x52634F)),
    (OnSecondary, c(0xFFFFFF)),
    (SecondaryContainer, c(0xD4E8CF)),
    (OnSecondaryContainer, c(0x0F1F0F)),
    (Tertiary, c(0x38656B)),
    (OnTertiary, c(0xFFFFFF)),
    (TertiaryContainer, c(0xBCEBF2)),
    (OnTertiaryContainer, c(0x001F23)),
    (Error, c(0xBA1A1A)),
    (OnError, c(0xFFFFFF)),
    (ErrorContainer, c(0xFFDAD6)),
    (OnErrorContainer, c(0x410002)),
    (Surface, c(0xF7FDF7)),
    (OnSurface, c(0x191D19)),
    (SurfaceVariant, c(0xDFE4D7)),
    (OnSurfaceVariant, c(0x43483E)),
    (Background, c(0xF7FDF7)),
    (OnBackground, c(0x191D19)),
    (Outline, c(0x717970)),
    (OutlineVariant, c(0xC3C8BB)),
];

const ORANGE_LIGHT: [(ColorToken, HexColor); 24] = [
    (Primary, c(0xFF9800)),
    (OnPrimary, c(0xFFFFFF)),
    (PrimaryContainer, c(0xFFE0B3)),
    (OnPrimaryContainer, c(0x331F00)),
    (Secondary, c(0x6F5B40)),
    (OnSecondary, c(0xFFFFFF)),
    (SecondaryContainer, c(0xF8DFBC)),
    (OnSecondaryContainer, c(0x251A04)),
    (Tertiary, c(0x516440)),
    (OnTertiary, c(0xFFFFFF)),
    (TertiaryContainer, c(0xD3EABC)),
    (OnTertiaryContainer, c(0x0F1F04)),
    (Error, c(0xBA1A1A)),
    (OnError, c(0xFFFFFF)),
    (ErrorContainer, c(0xFFDAD6)),
    (OnErrorContainer, c(0x410002)),
    (Surface, c(0xFFFBF7)),
    (OnSurface, c(0x201B16)),
    (SurfaceVariant, c(0xF0E0CF)),
    (OnSurfaceVariant, c(0x504539)),
    (Background, c(0xFFFBF7)),
    (OnBackground, c(0x201B16)),
    (Outline, c(0x82786F)),
    (OutlineVariant, c(0xD4C4B5)),
];

const DEFAULT_DARK: [(ColorToken, HexColor); 24] = [
    (Primary, c(0xD0BCFF)),
    (OnPrimary, c(0x381E72)),
    (PrimaryContainer, c(0x4F378B)),
    (OnPrimaryContainer, c(0xEADDFF)),
    (Secondary, c(0xCCC2DC)),
    (OnSecondary, c(0x332D41)),
    (SecondaryContainer, c(0x4A4458)),
    (OnSecondaryContainer, c(0xE8DEF8)),
    (Tertiary, c(0xEFB8C8)),
    (OnTertiary, c(0x492532)),
    (TertiaryContainer, c(0x633B48)),
    (OnTertiaryContainer, c(0xFFD8E4)),
    (Error, c(0xFFB4AB)),
    (OnError, c(0x690005)),
    (ErrorContainer, c(0x93000A)),
    (OnErrorContainer, c(0xFFDAD6)),
    (Surface, c(0x000000)),
    (OnSurface, c(0xE6E1E5)),
    (SurfaceVariant, c(0x1A1A1A)),
    (OnSurfaceVariant, c(0xCAC4D0)),
    (Background, c(0x000000)),
    (OnBackground, c(0xE6E1E5)),
    (Outline, c(0x938F99)),
    (OutlineVariant, c(0x49454F)),
];
