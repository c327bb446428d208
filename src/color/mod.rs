//! Hex color values and the pure color math used by theme derivation.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub type ColorResult<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color {value:?}; expected #RRGGBB")]
    InvalidFormat { value: String },
    #[error("unknown accessibility level {0:?}")]
    UnknownLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A validated `#RRGGBB` color. Displays and serializes in canonical uppercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(Rgb);

impl HexColor {
    pub const BLACK: HexColor = HexColor::from_u32(0x000000);
    pub const WHITE: HexColor = HexColor::from_u32(0xFFFFFF);

    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    pub const fn from_u32(value: u32) -> Self {
        Self(Rgb::from_u32(value))
    }

    pub const fn rgb(self) -> Rgb {
        self.0
    }

    /// Strict parse: a leading `#` followed by exactly six hex digits, any case.
    pub fn parse(value: &str) -> ColorResult<Self> {
        value
            .strip_prefix('#')
            .and_then(parse_digits)
            .map(Self)
            .ok_or_else(|| ColorError::InvalidFormat {
                value: value.to_string(),
            })
    }

    fn map_channels(self, f: impl Fn(f64) -> f64) -> Self {
        let [r, g, b] = self.0.channels().map(|channel| clamp_channel(f(f64::from(channel))));
        Self(Rgb::new(r, g, b))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(value: &str) -> ColorResult<Self> {
        Self::parse(value)
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

fn parse_digits(digits: &str) -> Option<Rgb> {
    if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }

    let red = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let green = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb::new(red, green, blue))
}

fn clamp_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Parses six hex digits with or without a leading `#`.
pub fn hex_to_rgb(value: &str) -> Option<Rgb> {
    parse_digits(value.strip_prefix('#').unwrap_or(value))
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> HexColor {
    HexColor::from_rgb(Rgb::new(r, g, b))
}

/// Normalizes free text typed into a hex field: trims, adds a missing `#`
/// and expands `#RGB` shorthand before validating.
pub fn normalize_hex_input(raw: &str) -> Option<HexColor> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() == 3 && digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        return parse_digits(&expanded).map(HexColor::from_rgb);
    }

    parse_digits(digits).map(HexColor::from_rgb)
}

/// Moves each channel toward 255 by `percent` of its remaining distance.
pub fn lighten(color: HexColor, percent: f64) -> HexColor {
    let factor = percent / 100.0;
    color.map_channels(|channel| channel + (255.0 - channel) * factor)
}

/// Reduces each channel by `percent` of its own value.
pub fn darken(color: HexColor, percent: f64) -> HexColor {
    let factor = percent / 100.0;
    color.map_channels(|channel| channel * (1.0 - factor))
}

/// Adds a flat amount to every channel, saturating at 255.
pub fn brighten_flat(color: HexColor, amount: u8) -> HexColor {
    let [r, g, b] = color.rgb().channels().map(|channel| channel.saturating_add(amount));
    rgb_to_hex(r, g, b)
}

/// WCAG relative luminance in `[0, 1]`.
pub fn luminance(color: HexColor) -> f64 {
    let [r, g, b] = color.rgb().channels().map(|channel| {
        let value = f64::from(channel) / 255.0;
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    });

    0.2126 * r + 0.7152 * g + 0.0722 * b
}

pub fn contrast_ratio(first: HexColor, second: HexColor) -> f64 {
    let first = luminance(first);
    let second = luminance(second);
    let brightest = first.max(second);
    let darkest = first.min(second);
    (brightest + 0.05) / (darkest + 0.05)
}

pub fn is_accessible(background: HexColor, foreground: HexColor, level: AccessibilityLevel) -> bool {
    contrast_ratio(background, foreground) >= level.threshold()
}

/// YIQ-style brightness in `[0, 255]`.
pub fn perceived_brightness(rgb: Rgb) -> f64 {
    (f64::from(rgb.r) * 299.0 + f64::from(rgb.g) * 587.0 + f64::from(rgb.b) * 114.0) / 1000.0
}

/// Black text on bright backgrounds, white text otherwise.
pub fn contrast_text_color(background: HexColor) -> HexColor {
    if perceived_brightness(background.rgb()) > 128.0 {
        HexColor::BLACK
    } else {
        HexColor::WHITE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessibilityLevel {
    #[default]
    Aa,
    Aaa,
    AaLarge,
    AaaLarge,
}

impl AccessibilityLevel {
    pub const fn threshold(self) -> f64 {
        match self {
            Self::Aa => 4.5,
            Self::Aaa => 7.0,
            Self::AaLarge => 3.0,
            Self::AaaLarge => 4.5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
            Self::AaLarge => "AA-large",
            Self::AaaLarge => "AAA-large",
        }
    }

    /// Unknown names fall back to AA.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for AccessibilityLevel {
    type Err = ColorError;

    fn from_str(value: &str) -> ColorResult<Self> {
        match value {
            "AA" => Ok(Self::Aa),
            "AAA" => Ok(Self::Aaa),
            "AA-large" => Ok(Self::AaLarge),
            "AAA-large" => Ok(Self::AaaLarge),
            other => Err(ColorError::UnknownLevel(other.to_string())),
        }
    }
}
