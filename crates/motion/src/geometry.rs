//! # Geometry
//!
//! Viewport dimensions, colours and the wraparound helper shared by the
//! particle field.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Viewport
// ============================================================================

/// Width and height of a drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when either side is zero (surface not sized yet).
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Per-axis ratio `self / previous`.
    ///
    /// An empty `previous` means the prior size was never recorded, so it is
    /// treated as equal to `self` and the ratio is 1.
    pub fn scale_from(&self, previous: Viewport) -> (f64, f64) {
        let previous = if previous.is_empty() { *self } else { previous };
        (self.width / previous.width, self.height / previous.height)
    }
}

/// Wrap `value` into `[0, extent)`.
///
/// Exiting one edge re-enters at the opposite one. `extent <= 0` collapses
/// to 0.
pub fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    if (0.0..extent).contains(&value) {
        return value;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds tiny negatives up to `extent`
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

// ============================================================================
// Colour
// ============================================================================

/// RGBA colour; `Display` renders a CSS `rgba()` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_toroidal() {
        assert_eq!(wrap(50.0, 100.0), 50.0);
        assert_eq!(wrap(100.0, 100.0), 0.0);
        assert_eq!(wrap(100.5, 100.0), 0.5);
        assert_eq!(wrap(-0.5, 100.0), 99.5);
        assert_eq!(wrap(-1e-18, 100.0), 0.0);
        assert_eq!(wrap(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_scale_from_missing_previous() {
        let now = Viewport::new(1280.0, 720.0);
        assert_eq!(now.scale_from(Viewport::default()), (1.0, 1.0));
        assert_eq!(now.scale_from(Viewport::new(640.0, 360.0)), (2.0, 2.0));
    }

    #[test]
    fn test_rgba_css() {
        let color = Rgba::new(255, 255, 255, 0.25);
        assert_eq!(color.to_string(), "rgba(255, 255, 255, 0.25)");
        assert_eq!(Rgba::new(0, 0, 0, 1.0).with_alpha(0.01).to_string(), "rgba(0, 0, 0, 0.01)");
    }
}
