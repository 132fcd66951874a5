// SPDX-License-Identifier: MIT
//
// RGB value — three validated 8-bit channels.
//
// Fields are private. The only ways in are the validating constructor,
// the validating setters, `from_u8` (already a byte, nothing to check),
// and validated deserialization. A failed setter leaves every channel
// exactly as it was.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::channel::{self, IntoChannel};
use crate::error::{Channel, ColorError, Result};

/// An RGB color with each channel in 0..=255.
///
/// # Examples
///
/// ```
/// use tint_color::Rgb;
///
/// let mut rgb = Rgb::new(181, 100, 100.9).unwrap();
/// assert_eq!(rgb.blue(), 100);
/// assert_eq!(rgb.to_string(), "rgb(181, 100, 100)");
///
/// // A rejected value leaves the color untouched.
/// assert!(rgb.set_red(256).is_err());
/// assert_eq!(rgb.red(), 181);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawRgb")]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::from_u8(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::from_u8(255, 255, 255);

    /// Create a color from three channel values.
    ///
    /// Channels are validated red, then green, then blue; the first
    /// rejected channel is reported.
    ///
    /// # Errors
    ///
    /// [`ColorError::NotANumber`] if a value is not a number,
    /// [`ColorError::OutOfRange`] if it truncates outside 0..=255.
    pub fn new(
        red: impl IntoChannel,
        green: impl IntoChannel,
        blue: impl IntoChannel,
    ) -> Result<Self> {
        Ok(Self {
            red: channel::validate(Channel::Red, red)?,
            green: channel::validate(Channel::Green, green)?,
            blue: channel::validate(Channel::Blue, blue)?,
        })
    }

    /// Create a color from bytes. Every byte is a valid channel.
    #[inline]
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        self.red
    }

    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        self.green
    }

    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.blue
    }

    /// Read a channel by name.
    #[must_use]
    pub const fn get(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Replace the red channel.
    ///
    /// # Errors
    ///
    /// Same as [`Rgb::new`]; on error the color is unchanged.
    pub fn set_red(&mut self, value: impl IntoChannel) -> Result<()> {
        self.set(Channel::Red, value)
    }

    /// Replace the green channel.
    ///
    /// # Errors
    ///
    /// Same as [`Rgb::new`]; on error the color is unchanged.
    pub fn set_green(&mut self, value: impl IntoChannel) -> Result<()> {
        self.set(Channel::Green, value)
    }

    /// Replace the blue channel.
    ///
    /// # Errors
    ///
    /// Same as [`Rgb::new`]; on error the color is unchanged.
    pub fn set_blue(&mut self, value: impl IntoChannel) -> Result<()> {
        self.set(Channel::Blue, value)
    }

    /// Replace one channel, validating before the write.
    ///
    /// # Errors
    ///
    /// Same as [`Rgb::new`]; on error the color is unchanged.
    pub fn set(&mut self, channel: Channel, value: impl IntoChannel) -> Result<()> {
        let byte = channel::validate(channel, value)?;
        match channel {
            Channel::Red => self.red = byte,
            Channel::Green => self.green = byte,
            Channel::Blue => self.blue = byte,
        }
        Ok(())
    }

    /// The channels as a tuple.
    #[inline]
    #[must_use]
    pub const fn to_tuple(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Convert to a `#rrggbb` hex string (lowercase, zero-padded).
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { red, green, blue } = self;
        format!("#{red:02x}{green:02x}{blue:02x}")
    }
}

/// Renders `rgb(R, G, B)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::from_u8(red, green, blue)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        rgb.to_tuple()
    }
}

/// Unvalidated deserialization target. Missing fields become `Null` so
/// they fail the type check like any other non-number.
#[derive(Deserialize)]
struct RawRgb {
    #[serde(default)]
    red: Value,
    #[serde(default)]
    green: Value,
    #[serde(default)]
    blue: Value,
}

impl TryFrom<RawRgb> for Rgb {
    type Error = ColorError;

    fn try_from(raw: RawRgb) -> Result<Self> {
        Self::new(raw.red, raw.green, raw.blue)
    }
}
