//! Floating-point geometry shared between the layout engine and its hosts.

use serde::{Deserialize, Serialize};

/// A width/height pair in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero width and height.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Multiply both dimensions by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// An axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from an origin and a size.
    pub const fn from_origin_size(x: f64, y: f64, size: Size) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_scale() {
        assert_eq!(Size::new(200.0, 80.0).scale(0.75), Size::new(150.0, 60.0));
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn rect_from_origin_size() {
        let r = Rect::from_origin_size(5.0, 6.0, Size::new(7.0, 8.0));
        assert_eq!(r, Rect::new(5.0, 6.0, 7.0, 8.0));
    }

    #[test]
    fn defaults_are_zero() {
        assert_eq!(Size::default(), Size::ZERO);
        assert_eq!(Rect::default(), Rect::new(0.0, 0.0, 0.0, 0.0));
    }
}
