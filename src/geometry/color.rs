//! Color type and luminance/contrast utilities for readable overlay text.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// RGBA color with channels in [0, 1].
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(default)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from RGBA channels.
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from hue/saturation/lightness, all in [0, 1].
    #[must_use]
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        Self::rgb(r1 + m, g1 + m, b1 + m)
    }

    /// Hue in [0, 1); 0 for achromatic colors.
    #[must_use]
    pub fn hue(&self) -> f32 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let chroma = max - min;
        if chroma <= f32::EPSILON {
            return 0.0;
        }
        let h = if max == self.r {
            ((self.g - self.b) / chroma).rem_euclid(6.0)
        } else if max == self.g {
            (self.b - self.r) / chroma + 2.0
        } else {
            (self.r - self.g) / chroma + 4.0
        };
        h / 6.0
    }

    /// Channels as `[r, g, b, a]`.
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }
}

/// WCAG relative luminance of a color.
///
/// Channels are linearized from sRGB (threshold 0.03928, divisor 12.92,
/// gamma exponent 2.4) and weighted 0.2126 / 0.7152 / 0.0722.
#[must_use]
pub fn luminance(color: Color) -> f32 {
    fn linearize(c: f32) -> f32 {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linearize(color.r)
        + 0.7152 * linearize(color.g)
        + 0.0722 * linearize(color.b)
}

/// A perceptually-opposed color: hue rotated 180 degrees at full
/// saturation and mid lightness. Not a true contrast maximizer.
#[must_use]
pub fn color_with_max_contrast(color: Color) -> Color {
    let mut hue = color.hue() + 0.5;
    if hue > 1.0 {
        hue -= 1.0;
    }
    Color::from_hsl(hue, 1.0, 0.5)
}
