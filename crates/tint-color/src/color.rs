// SPDX-License-Identifier: MIT
//
// Color — an RGB value paired with its derived HSL value.
//
// The HSL side is recomputed on construction and on every
// `change_color`, inside the same `&mut self` call that replaces the
// RGB side. There is no method that touches one without the other, so
// the three string forms always describe the same color.

use std::fmt;

use serde::Serialize;

use crate::convert::rgb_to_hsl;
use crate::hsl::Hsl;
use crate::rgb::Rgb;

/// A color with cached RGB and HSL representations.
///
/// # Examples
///
/// ```
/// use tint_color::{Color, Rgb};
///
/// let mut color = Color::new(Rgb::from_u8(181, 100, 100));
/// assert_eq!(color.to_hex(), "#b56464");
/// assert_eq!(color.to_rgb_string(), "rgb(181, 100, 100)");
///
/// color.change_color(Rgb::from_u8(0, 191, 255));
/// assert_eq!(color.to_hsl_string(), "hsl(195, 100%, 50%)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    rgb: Rgb,
    hsl: Hsl,
}

impl Color {
    /// Create a color. The RGB value is already validated, so this
    /// cannot fail.
    #[must_use]
    pub fn new(rgb: Rgb) -> Self {
        Self { rgb, hsl: rgb_to_hsl(rgb) }
    }

    /// Replace the color wholesale and recompute its HSL form.
    pub fn change_color(&mut self, rgb: Rgb) {
        *self = Self::new(rgb);
        tracing::trace!(hex = %self.to_hex(), "color changed");
    }

    /// A copy of the current RGB value.
    #[inline]
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// A copy of the current HSL value.
    #[inline]
    #[must_use]
    pub const fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// `rgb(R, G, B)`.
    #[must_use]
    pub fn to_rgb_string(&self) -> String {
        self.rgb.to_string()
    }

    /// `#rrggbb`, lowercase and zero-padded.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.rgb.to_hex()
    }

    /// `hsl(H, S%, L%)`.
    #[must_use]
    pub fn to_hsl_string(&self) -> String {
        self.hsl.to_string()
    }

    /// All three string forms, taken from the same state.
    #[must_use]
    pub fn swatch(&self) -> Swatch {
        Swatch {
            hex: self.to_hex(),
            rgb: self.to_rgb_string(),
            hsl: self.to_hsl_string(),
        }
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::new(Rgb::BLACK)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The display strings of one color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Swatch {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
}
