//! Geometry primitives shared by the drag machinery.

use serde::{Deserialize, Serialize};

/// A 2D point in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A rectangle defined by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check whether a point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Horizontal position of `x` within the rectangle, clamped to 0.0..=1.0.
    ///
    /// A rectangle without width maps every position to 0.0.
    pub fn fraction_x(&self, x: f32) -> f64 {
        fraction(x - self.x, self.width)
    }

    /// Vertical position of `y` within the rectangle, clamped to 0.0..=1.0.
    pub fn fraction_y(&self, y: f32) -> f64 {
        fraction(y - self.y, self.height)
    }

    /// Get the point at the given fractions of width and height.
    pub fn point_at(&self, fx: f64, fy: f64) -> Point {
        Point::new(
            self.x + (fx.clamp(0.0, 1.0) as f32) * self.width,
            self.y + (fy.clamp(0.0, 1.0) as f32) * self.height,
        )
    }
}

fn fraction(offset: f32, extent: f32) -> f64 {
    if !extent.is_finite() || extent <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (f64::from(offset) / f64::from(extent)).clamp(0.0, 1.0)
}
