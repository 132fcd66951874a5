// SPDX-License-Identifier: MIT
//
// Channel input — turning loosely typed caller values into channel bytes.
//
// Hosts hand us channel values of all sorts: plain integers, floats that
// may be NaN, optional values that may be missing, text from a form
// field, or JSON. `IntoChannel` is the one place those shapes are told
// apart. Validation is always two-stage: first "is this a number at
// all", then "does it truncate into 0..=255". Only after both pass is
// anything stored.

// Integer-to-float casts are lossless for every value that can pass the
// range check.
#![allow(clippy::cast_precision_loss, clippy::cast_lossless)]

use serde_json::Value;

use crate::error::{Channel, ColorError, Result};

/// A value that may be offered as an RGB channel.
///
/// Conversion yields the raw number, or a short description of what was
/// found instead (used in [`ColorError::NotANumber`]). Numbers that are
/// out of range still convert; the range check happens afterwards in
/// [`validate`].
pub trait IntoChannel {
    /// Extract the numeric value.
    ///
    /// # Errors
    ///
    /// Returns a description of the value kind if it is not a number.
    fn into_channel(self) -> std::result::Result<f64, &'static str>;
}

macro_rules! impl_into_channel_int {
    ($($t:ty),*) => {
        $(
            impl IntoChannel for $t {
                #[inline]
                fn into_channel(self) -> std::result::Result<f64, &'static str> {
                    Ok(self as f64)
                }
            }
        )*
    };
}

impl_into_channel_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl IntoChannel for f64 {
    #[inline]
    fn into_channel(self) -> std::result::Result<f64, &'static str> {
        if self.is_nan() { Err("NaN") } else { Ok(self) }
    }
}

impl IntoChannel for f32 {
    #[inline]
    fn into_channel(self) -> std::result::Result<f64, &'static str> {
        f64::from(self).into_channel()
    }
}

/// `None` is a missing value, never zero.
impl<T: IntoChannel> IntoChannel for Option<T> {
    fn into_channel(self) -> std::result::Result<f64, &'static str> {
        self.map_or(Err("undefined"), IntoChannel::into_channel)
    }
}

/// Text is rejected even when it spells a number.
impl IntoChannel for &str {
    fn into_channel(self) -> std::result::Result<f64, &'static str> {
        Err("a string")
    }
}

impl IntoChannel for String {
    fn into_channel(self) -> std::result::Result<f64, &'static str> {
        Err("a string")
    }
}

impl IntoChannel for &Value {
    fn into_channel(self) -> std::result::Result<f64, &'static str> {
        match self {
            Value::Number(n) => n.as_f64().ok_or("an unrepresentable number"),
            Value::Null => Err("null"),
            Value::Bool(_) => Err("a boolean"),
            Value::String(_) => Err("a string"),
            Value::Array(_) => Err("an array"),
            Value::Object(_) => Err("an object"),
        }
    }
}

impl IntoChannel for Value {
    fn into_channel(self) -> std::result::Result<f64, &'static str> {
        (&self).into_channel()
    }
}

/// Validate a single channel value and truncate it to a byte.
///
/// Order matters: the type check runs first, then the value is truncated
/// toward zero, then the truncated value is range checked.
///
/// # Errors
///
/// [`ColorError::NotANumber`] if `value` is not a number,
/// [`ColorError::OutOfRange`] if it truncates outside 0..=255.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn validate(channel: Channel, value: impl IntoChannel) -> Result<u8> {
    let number = value
        .into_channel()
        .map_err(|found| ColorError::NotANumber { channel, found })?;

    let truncated = number.trunc();
    if !(0.0..=255.0).contains(&truncated) {
        return Err(ColorError::OutOfRange { channel, value: truncated });
    }

    // Safe: range check guarantees 0.0 <= truncated <= 255.0.
    Ok(truncated as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn kind_of(value: impl IntoChannel) -> Option<ErrorKind> {
        validate(Channel::Red, value).err().map(|e| e.kind())
    }

    // ── Accepted ─────────────────────────────────────────────────────────

    #[test]
    fn inclusive_bounds() {
        assert_eq!(validate(Channel::Red, 0), Ok(0));
        assert_eq!(validate(Channel::Red, 255), Ok(255));
        assert_eq!(validate(Channel::Red, 255_u8), Ok(255));
    }

    #[test]
    fn fractions_truncate_toward_zero() {
        assert_eq!(validate(Channel::Green, 5.9), Ok(5));
        assert_eq!(validate(Channel::Green, 254.99_f32), Ok(254));
        assert_eq!(validate(Channel::Green, 255.5), Ok(255));
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(validate(Channel::Blue, -0.0), Ok(0));
        assert_eq!(validate(Channel::Blue, -0.5), Ok(0));
    }

    #[test]
    fn json_numbers() {
        assert_eq!(validate(Channel::Red, &json!(128)), Ok(128));
        assert_eq!(validate(Channel::Red, json!(12.7)), Ok(12));
    }

    #[test]
    fn present_option() {
        assert_eq!(validate(Channel::Red, Some(42)), Ok(42));
    }

    // ── Type errors ──────────────────────────────────────────────────────

    #[test]
    fn nan_is_not_a_number() {
        assert_eq!(kind_of(f64::NAN), Some(ErrorKind::Type));
        assert_eq!(kind_of(f32::NAN), Some(ErrorKind::Type));
        assert_eq!(kind_of(Some(f64::NAN)), Some(ErrorKind::Type));
    }

    #[test]
    fn missing_is_not_a_number() {
        assert_eq!(kind_of(None::<f64>), Some(ErrorKind::Type));
        assert_eq!(kind_of(&json!(null)), Some(ErrorKind::Type));
    }

    #[test]
    fn numeric_strings_are_rejected() {
        assert_eq!(kind_of("12"), Some(ErrorKind::Type));
        assert_eq!(kind_of(String::from("0")), Some(ErrorKind::Type));
        assert_eq!(kind_of(&json!("12")), Some(ErrorKind::Type));
    }

    #[test]
    fn other_json_values_are_rejected() {
        assert_eq!(kind_of(&json!(true)), Some(ErrorKind::Type));
        assert_eq!(kind_of(&json!([1])), Some(ErrorKind::Type));
        assert_eq!(kind_of(&json!({ "red": 1 })), Some(ErrorKind::Type));
    }

    #[test]
    fn type_error_describes_value() {
        let err = validate(Channel::Green, None::<i32>).unwrap_err();
        assert_eq!(err, ColorError::NotANumber { channel: Channel::Green, found: "undefined" });
    }

    // ── Range errors ─────────────────────────────────────────────────────

    #[test]
    fn just_outside_bounds() {
        assert_eq!(kind_of(-1), Some(ErrorKind::Range));
        assert_eq!(kind_of(256), Some(ErrorKind::Range));
        assert_eq!(kind_of(-5.9), Some(ErrorKind::Range));
        assert_eq!(kind_of(256.0), Some(ErrorKind::Range));
    }

    #[test]
    fn infinities_are_out_of_range() {
        assert_eq!(kind_of(f64::INFINITY), Some(ErrorKind::Range));
        assert_eq!(kind_of(f64::NEG_INFINITY), Some(ErrorKind::Range));
    }

    #[test]
    fn range_error_carries_truncated_value() {
        let err = validate(Channel::Blue, -5.9).unwrap_err();
        assert_eq!(err, ColorError::OutOfRange { channel: Channel::Blue, value: -5.0 });
    }

    #[test]
    fn large_integers() {
        assert_eq!(kind_of(i64::MAX), Some(ErrorKind::Range));
        assert_eq!(kind_of(u64::MAX), Some(ErrorKind::Range));
    }
}
