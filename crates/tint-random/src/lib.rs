//! # tint-random — random colors for tint
//!
//! - **[`xorshift`]** — `Xorshift32`, a minimal deterministic PRNG
//! - **[`random_color`]** — `RandomColor`, a [`Color`](tint_color::Color)
//!   that can redraw itself from the generator
//!
//! Randomness lives beside the color, not inside it: `RandomColor` owns a
//! plain `Color` and feeds it through `change_color`, the same path any
//! other caller uses.

pub mod random_color;
pub mod xorshift;

pub use random_color::RandomColor;
pub use xorshift::Xorshift32;
