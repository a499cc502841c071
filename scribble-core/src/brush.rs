//! # Brushes
//!
//! The pen state the user picks from the toolbar. Every point records a copy of the brush
//! it was drawn with, so changing the brush never alters existing strokes.

use crate::color::Color;

/// Stroke width in whole pixels. Never zero.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BrushSize(std::num::NonZeroU32);
impl BrushSize {
    pub const ONE: Self = Self(std::num::NonZeroU32::MIN);
    /// Sizes offered by the size picker.
    pub const UI_RANGE: std::ops::RangeInclusive<u32> = 1..=25;
    /// `None` if `px` is zero.
    #[must_use]
    pub const fn new(px: u32) -> Option<Self> {
        match std::num::NonZeroU32::new(px) {
            Some(px) => Some(Self(px)),
            None => None,
        }
    }
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
    /// Width as a float, for rasterization.
    #[must_use]
    pub fn px(self) -> f32 {
        self.0.get() as f32
    }
    /// One step larger, clamped to the top of [`Self::UI_RANGE`].
    #[must_use = "returns a new size without modifying `self`"]
    pub fn grow(self) -> Self {
        let next = self.get().saturating_add(1).min(*Self::UI_RANGE.end());
        Self::new(next.max(self.get())).unwrap_or(self)
    }
    /// One step smaller, never below one.
    #[must_use = "returns a new size without modifying `self`"]
    pub fn shrink(self) -> Self {
        Self::new(self.get() - 1).unwrap_or(Self::ONE)
    }
}
impl Default for BrushSize {
    fn default() -> Self {
        Self::ONE
    }
}
impl std::fmt::Display for BrushSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
impl From<BrushSize> for u32 {
    fn from(value: BrushSize) -> Self {
        value.get()
    }
}
impl TryFrom<u32> for BrushSize {
    type Error = std::num::TryFromIntError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        std::num::NonZeroU32::try_from(value).map(Self)
    }
}
impl serde::Serialize for BrushSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.get())
    }
}
impl<'de> serde::Deserialize<'de> for BrushSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let px = <u32 as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Self::new(px).ok_or_else(|| serde::de::Error::custom("brush size must be at least 1"))
    }
}

/// Current pen configuration, owned by the canvas controller and copied into every point.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct BrushSettings {
    pub color: Color,
    pub size: BrushSize,
}
