//! Random colors — a [`Color`] paired with the generator that redraws it.

use tint_color::{Color, Rgb};

use crate::xorshift::Xorshift32;

/// A color that can be re-rolled.
///
/// Composition instead of a color subtype: the generator produces channel
/// bytes, and the resulting [`Rgb`] is handed to [`Color::change_color`]
/// like any other caller's value. Bytes are valid channels by type, so
/// there is nothing left to reject.
///
/// # Examples
///
/// ```
/// use tint_random::RandomColor;
///
/// let mut a = RandomColor::new(42);
/// let b = RandomColor::new(42);
/// assert_eq!(a.color(), b.color());
///
/// a.randomize();
/// assert!(a.color().to_hex().starts_with('#'));
/// ```
#[derive(Debug, Clone)]
pub struct RandomColor {
    rng: Xorshift32,
    color: Color,
}

impl RandomColor {
    /// Start from black and immediately draw a random color.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut this = Self { rng: Xorshift32::new(seed), color: Color::default() };
        this.randomize();
        this
    }

    /// Draw three independent channels and recolor.
    pub fn randomize(&mut self) {
        let (red, green, blue) = (self.rng.channel(), self.rng.channel(), self.rng.channel());
        self.color.change_color(Rgb::from_u8(red, green, blue));
        tracing::trace!(hex = %self.color.to_hex(), "randomized");
    }

    #[must_use]
    pub const fn color(&self) -> &Color {
        &self.color
    }

    /// Give up the generator and keep the color.
    #[must_use]
    pub const fn into_color(self) -> Color {
        self.color
    }
}

impl Iterator for RandomColor {
    type Item = Color;

    /// Yield the current color, then advance to the next one.
    fn next(&mut self) -> Option<Color> {
        let current = self.color;
        self.randomize();
        Some(current)
    }
}
