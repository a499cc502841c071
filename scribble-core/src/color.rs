//! # Colors
//!
//! Straight (non-premultiplied) sRGB colors, one byte per channel, as picked by the user
//! and written into exported documents.

/// An sRGB color with straight alpha.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}
impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
    /// Alpha as a fraction in `[0, 1]`.
    #[must_use]
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }
    /// Format as an SVG/CSS functional color, `rgb(r,g,b)`. Alpha is not included.
    #[must_use]
    pub fn svg_rgb(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}
impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
impl From<Color> for tiny_skia::Color {
    fn from(value: Color) -> Self {
        tiny_skia::Color::from_rgba8(value.r, value.g, value.b, value.a)
    }
}

/// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#'")]
    MissingHash,
    #[error("expected 6 or 8 hex digits")]
    BadLength,
    #[error(transparent)]
    Digit(#[from] std::num::ParseIntError),
}

/// Parse from `#rrggbb` or `#rrggbbaa`, case-insensitive.
impl std::str::FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or(ColorParseError::MissingHash)?;
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(ColorParseError::BadLength);
        }
        let channel = |idx: usize| u8::from_str_radix(&hex[idx * 2..idx * 2 + 2], 16);

        let a = if hex.len() == 8 { channel(3)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(1)?, channel(2)?, a))
    }
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let str =
            <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        str.parse().map_err(serde::de::Error::custom)
    }
}
