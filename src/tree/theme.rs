//! Base16 color theme for the tree viewer.
//!
//! Slots `base00`..`base07` are grayscale tones from darkest to lightest,
//! `base08`..`base0F` are accents used for syntax highlighting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 24-bit color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_u32(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ThemeError::InvalidColor(s.to_string()));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| ThemeError::InvalidColor(s.to_string()))?;
        Ok(Self::from_u32(value))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ThemeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

#[cfg(feature = "tui")]
impl From<Rgb> for ratatui::style::Color {
    fn from(c: Rgb) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}

/// Sixteen named color slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Base16Theme {
    pub base00: Rgb,
    pub base01: Rgb,
    pub base02: Rgb,
    pub base03: Rgb,
    pub base04: Rgb,
    pub base05: Rgb,
    pub base06: Rgb,
    pub base07: Rgb,
    pub base08: Rgb,
    pub base09: Rgb,
    #[serde(rename = "base0A")]
    pub base0a: Rgb,
    #[serde(rename = "base0B")]
    pub base0b: Rgb,
    #[serde(rename = "base0C")]
    pub base0c: Rgb,
    #[serde(rename = "base0D")]
    pub base0d: Rgb,
    #[serde(rename = "base0E")]
    pub base0e: Rgb,
    #[serde(rename = "base0F")]
    pub base0f: Rgb,
}

impl Base16Theme {
    /// All slots in order `base00`..`base0F`.
    pub fn slots(&self) -> [Rgb; 16] {
        [
            self.base00, self.base01, self.base02, self.base03,
            self.base04, self.base05, self.base06, self.base07,
            self.base08, self.base09, self.base0a, self.base0b,
            self.base0c, self.base0d, self.base0e, self.base0f,
        ]
    }

    /// Swap light and dark: the eight base tones are reversed, accents kept.
    ///
    /// A simplification of base16 styling's inversion, which inverts the
    /// luminance of all 16 slots. Accents here keep their exact colors.
    pub fn inverted(&self) -> Self {
        Self {
            base00: self.base07,
            base01: self.base06,
            base02: self.base05,
            base03: self.base04,
            base04: self.base03,
            base05: self.base02,
            base06: self.base01,
            base07: self.base00,
            ..*self
        }
    }

    /// The theme to paint with, given the viewer's invert flag.
    pub fn effective(&self, invert: bool) -> Self {
        if invert { self.inverted() } else { *self }
    }
}

impl Default for Base16Theme {
    fn default() -> Self {
        Self {
            base00: Rgb::from_u32(0x000000),
            base01: Rgb::from_u32(0x303030),
            base02: Rgb::from_u32(0x505050),
            base03: Rgb::from_u32(0xb0b0b0),
            base04: Rgb::from_u32(0xd0d0d0),
            base05: Rgb::from_u32(0xe0e0e0),
            base06: Rgb::from_u32(0xf5f5f5),
            base07: Rgb::from_u32(0xffffff),
            base08: Rgb::from_u32(0xfb0120),
            base09: Rgb::from_u32(0xfc6d24),
            base0a: Rgb::from_u32(0xfda331),
            base0b: Rgb::from_u32(0xa1c659),
            base0c: Rgb::from_u32(0x76c7b7),
            base0d: Rgb::from_u32(0x6fb3d2),
            base0e: Rgb::from_u32(0xd381c3),
            base0f: Rgb::from_u32(0xbe643c),
        }
    }
}

/// Errors that can occur while reading a theme.
#[derive(Debug, Clone, Error)]
pub enum ThemeError {
    #[error("invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),
}
