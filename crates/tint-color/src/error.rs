// SPDX-License-Identifier: MIT
//
// Validation errors for color channels.
//
// There are exactly two ways a channel can be rejected: the value is not
// a number at all, or it is a number outside 0..=255 once truncated.
// Both are contract violations by the caller and are returned, never
// logged or retried.

use std::fmt;

use thiserror::Error;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, ColorError>;

/// One of the three RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Lowercase channel name, as used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Broad classification of a [`ColorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value was not a well-formed number.
    Type,
    /// The value was a number outside 0..=255 after truncation.
    Range,
}

/// A channel value was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The value was not a number (NaN, a string, `None`, `null`, ...).
    #[error("{channel} channel is not a number (got {found})")]
    NotANumber {
        channel: Channel,
        /// Short description of the rejected value.
        found: &'static str,
    },

    /// The value truncated to something outside 0..=255.
    #[error("{channel} channel must be between 0 and 255 (got {value})")]
    OutOfRange {
        channel: Channel,
        /// The value after truncation toward zero.
        value: f64,
    },
}

impl ColorError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotANumber { .. } => ErrorKind::Type,
            Self::OutOfRange { .. } => ErrorKind::Range,
        }
    }

    /// The channel whose value was rejected.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        match self {
            Self::NotANumber { channel, .. } | Self::OutOfRange { channel, .. } => *channel,
        }
    }
}
