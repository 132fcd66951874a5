// SPDX-License-Identifier: MIT
//
// tint-color — validated RGB values and their derived HSL form.
//
// An `Rgb` can only hold channels in 0..=255: every constructor and
// every setter validates before it writes. `Hsl` is never built from
// user input; it is always derived from an `Rgb` by the converter, so
// its ranges follow from the RGB invariant. `Color` pairs the two and
// recomputes the HSL side on every change.
//
//   caller value ──▶ IntoChannel ──▶ Rgb ──▶ rgb_to_hsl ──▶ Hsl
//                                     │                      │
//                                     └──────── Color ───────┘
//                                                 │
//                                          rgb / hex / hsl strings

pub mod channel;
pub mod color;
pub mod convert;
pub mod error;
pub mod hsl;
pub mod rgb;
pub mod shared;

pub use channel::IntoChannel;
pub use color::{Color, Swatch};
pub use convert::rgb_to_hsl;
pub use error::{Channel, ColorError, ErrorKind, Result};
pub use hsl::Hsl;
pub use rgb::Rgb;
pub use shared::SharedColor;
