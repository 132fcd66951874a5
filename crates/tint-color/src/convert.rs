// SPDX-License-Identifier: MIT
//
// RGB → HSL conversion.
//
// Reference: https://en.wikipedia.org/wiki/HSL_and_HSV#From_RGB
//
// Hue is computed in sixths of the circle, then scaled to degrees. When
// several channels share the maximum, red wins over green, and green
// over blue. That order decides the hue for ties like yellow (255,255,0)
// and magenta (255,0,255).
//
// f64 `%` is the truncating remainder: the result takes the sign of the
// dividend. In the red branch the dividend lies in [-1, 1], so the
// remainder never changes it, and a negative hue is fixed up by the
// `+ 360` after scaling to degrees.

// Single-character names (r, g, b, h, s, l) follow color-science notation.
#![allow(clippy::many_single_char_names)]

use crate::hsl::Hsl;
use crate::rgb::Rgb;

/// Convert an RGB color to HSL.
///
/// Pure and deterministic: the same RGB always gives the same HSL.
///
/// ```
/// use tint_color::{rgb_to_hsl, Rgb};
///
/// let hsl = rgb_to_hsl(Rgb::from_u8(0, 191, 255));
/// assert_eq!(hsl.hue, 195);
/// assert_eq!(hsl.to_string(), "hsl(195, 100%, 50%)");
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.red()) / 255.0;
    let g = f64::from(rgb.green()) / 255.0;
    let b = f64::from(rgb.blue()) / 255.0;

    let value = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = value - min;

    let lightness = value - chroma / 2.0;

    let sixths = if chroma == 0.0 {
        0.0 // Achromatic — hue is undefined, default to 0
    } else if r == value {
        ((g - b) / chroma) % 6.0
    } else if g == value {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    Hsl::new(to_degrees(sixths), saturation(value, lightness), lightness)
}

/// Scale hue sixths to whole degrees in [0, 360).
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_degrees(sixths: f64) -> u16 {
    let mut degrees = sixths * 60.0;
    if degrees < 0.0 {
        degrees += 360.0;
    }
    // Safe: sixths lies in [-1, 6), so degrees lies in [0, 360).
    degrees.trunc() as u16
}

/// Black and white have no saturation; the general formula would divide
/// by zero for them.
#[inline]
#[allow(clippy::float_cmp, clippy::suboptimal_flops)]
fn saturation(value: f64, lightness: f64) -> f64 {
    if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (2.0 * (value - lightness)) / (1.0 - (2.0 * lightness - 1.0).abs())
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hsl_of(r: u8, g: u8, b: u8) -> String {
        rgb_to_hsl(Rgb::from_u8(r, g, b)).to_string()
    }

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Achromatic ───────────────────────────────────────────────────────

    #[test]
    fn black() {
        assert_eq!(hsl_of(0, 0, 0), "hsl(0, 0%, 0%)");
    }

    #[test]
    fn white_has_no_saturation() {
        let hsl = rgb_to_hsl(Rgb::WHITE);
        assert_eq!(hsl.saturation, 0.0);
        assert_eq!(hsl.lightness, 1.0);
        assert_eq!(hsl.to_string(), "hsl(0, 0%, 100%)");
    }

    #[test]
    fn gray_has_no_hue_or_saturation() {
        assert_eq!(hsl_of(128, 128, 128), "hsl(0, 0%, 50%)");
        assert_eq!(hsl_of(1, 1, 1), "hsl(0, 0%, 0%)");
    }

    // ── Primaries and ties ───────────────────────────────────────────────

    #[test]
    fn primaries() {
        assert_eq!(hsl_of(255, 0, 0), "hsl(0, 100%, 50%)");
        assert_eq!(hsl_of(0, 255, 0), "hsl(120, 100%, 50%)");
        assert_eq!(hsl_of(0, 0, 255), "hsl(240, 100%, 50%)");
    }

    #[test]
    fn red_wins_ties() {
        // Yellow: red and green share the max.
        assert_eq!(hsl_of(255, 255, 0), "hsl(60, 100%, 50%)");
        // Magenta: red and blue share the max; negative sixths wrap.
        assert_eq!(hsl_of(255, 0, 255), "hsl(300, 100%, 50%)");
    }

    #[test]
    fn green_wins_over_blue() {
        assert_eq!(hsl_of(0, 255, 255), "hsl(180, 100%, 50%)");
    }

    // ── Known values ─────────────────────────────────────────────────────

    #[test]
    fn deep_sky_blue() {
        assert_eq!(hsl_of(0, 191, 255), "hsl(195, 100%, 50%)");
    }

    #[test]
    fn muted_red() {
        let hsl = rgb_to_hsl(Rgb::from_u8(181, 100, 100));
        assert_eq!(hsl.hue, 0);
        assert!(approx_eq(hsl.lightness, 281.0 / 510.0, 1e-12));
        assert_eq!(hsl.to_string(), "hsl(0, 35%, 55%)");
    }

    #[test]
    fn teal() {
        assert_eq!(hsl_of(48, 94, 110), "hsl(195, 39%, 30%)");
    }

    #[test]
    fn hue_just_below_360() {
        // Red max, blue slightly above green: sixths is a small negative.
        assert_eq!(rgb_to_hsl(Rgb::from_u8(255, 0, 1)).hue, 359);
    }

    // ── Properties ───────────────────────────────────────────────────────

    #[test]
    fn ranges_hold_on_a_grid() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let hsl = rgb_to_hsl(Rgb::from_u8(r, g, b));
                    assert!(hsl.hue < 360, "hue {} for ({r}, {g}, {b})", hsl.hue);
                    assert!(
                        (0.0..=1.0 + 1e-12).contains(&hsl.saturation),
                        "saturation {} for ({r}, {g}, {b})",
                        hsl.saturation
                    );
                    assert!((0.0..=1.0).contains(&hsl.lightness));
                }
            }
        }
    }

    #[test]
    fn deterministic() {
        let rgb = Rgb::from_u8(12, 200, 77);
        assert_eq!(rgb_to_hsl(rgb), rgb_to_hsl(rgb));
        assert_eq!(Hsl::from(rgb), rgb_to_hsl(rgb));
    }
}
