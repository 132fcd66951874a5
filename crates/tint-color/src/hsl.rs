// SPDX-License-Identifier: MIT

use std::fmt;

use serde::Serialize;

/// A color in HSL form, as derived from an [`Rgb`](crate::Rgb).
///
/// - `hue`: whole degrees, 0 to 359
/// - `saturation`: fraction, 0.0 to 1.0
/// - `lightness`: fraction, 0.0 to 1.0
///
/// No validation happens here; values come from
/// [`rgb_to_hsl`](crate::rgb_to_hsl), which only ever sees valid RGB.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(hue: u16, saturation: f64, lightness: f64) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Saturation as a whole percentage, truncated (0.999 is 99).
    #[must_use]
    pub fn saturation_percent(self) -> i64 {
        percent(self.saturation)
    }

    /// Lightness as a whole percentage, truncated.
    #[must_use]
    pub fn lightness_percent(self) -> i64 {
        percent(self.lightness)
    }
}

/// Renders `hsl(H, S%, L%)`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue,
            self.saturation_percent(),
            self.lightness_percent()
        )
    }
}

/// Truncate toward zero, never round.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn percent(fraction: f64) -> i64 {
    (fraction * 100.0).trunc() as i64
}
