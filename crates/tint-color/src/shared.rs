// SPDX-License-Identifier: MIT
//
// SharedColor — one Color shared between threads.
//
// `Color` itself needs no locking: it is a plain value and every update
// goes through `&mut self`. Once a single color is shared, a writer's
// replace and a reader's three string reads must not interleave, so
// both happen under one lock acquisition here. `recolor` holds the
// write lock across the replace and the read, giving read-your-write.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::color::{Color, Swatch};
use crate::rgb::Rgb;

/// A cloneable, thread-safe handle to a single [`Color`].
#[derive(Debug, Clone, Default)]
pub struct SharedColor {
    inner: Arc<RwLock<Color>>,
}

impl SharedColor {
    #[must_use]
    pub fn new(rgb: Rgb) -> Self {
        Self { inner: Arc::new(RwLock::new(Color::new(rgb))) }
    }

    /// Replace the color.
    pub fn change_color(&self, rgb: Rgb) {
        self.inner.write().change_color(rgb);
    }

    /// Replace the color and read back its strings atomically.
    #[must_use]
    pub fn recolor(&self, rgb: Rgb) -> Swatch {
        let mut color = self.inner.write();
        color.change_color(rgb);
        color.swatch()
    }

    /// All three strings from one consistent state.
    #[must_use]
    pub fn snapshot(&self) -> Swatch {
        self.inner.read().swatch()
    }

    /// A copy of the current color.
    #[must_use]
    pub fn get(&self) -> Color {
        *self.inner.read()
    }
}

impl From<Color> for SharedColor {
    fn from(color: Color) -> Self {
        Self { inner: Arc::new(RwLock::new(color)) }
    }
}
