//! Geometry helpers shared by the layout stages.
//!
//! Provides:
//! - The `Rect` tuple type and the `HasBBox` trait
//! - Page-normalized rectangles for cross-page comparison
//! - Decoder jitter rounding

use serde::{Deserialize, Serialize};

/// A rectangle defined by (x0, y0, x1, y1) where (x0, y0) is typically bottom-left
/// and (x1, y1) is top-right.
pub type Rect = (f64, f64, f64, f64);

/// Small epsilon for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// Compares two floats for approximate equality.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Rounds a page coordinate to one decimal place.
///
/// Decoders report run origins with sub-point noise; two runs of the same
/// header on different pages rarely agree beyond the first decimal.
#[inline]
pub fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub trait HasBBox {
    fn x0(&self) -> f64;
    fn y0(&self) -> f64;
    fn x1(&self) -> f64;
    fn y1(&self) -> f64;

    fn bbox(&self) -> Rect {
        (self.x0(), self.y0(), self.x1(), self.y1())
    }

    fn width(&self) -> f64 {
        self.x1() - self.x0()
    }

    fn height(&self) -> f64 {
        self.y1() - self.y0()
    }
}

impl HasBBox for Rect {
    fn x0(&self) -> f64 {
        self.0
    }

    fn y0(&self) -> f64 {
        self.1
    }

    fn x1(&self) -> f64 {
        self.2
    }

    fn y1(&self) -> f64 {
        self.3
    }
}

/// A rectangle scaled into the unit square by its page's dimensions.
///
/// Only used for intersection tests; never stored on a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl NormalizedRect {
    /// Scales `bbox` by the page dimensions.
    pub fn from_bbox(bbox: &impl HasBBox, page_width: f64, page_height: f64) -> Self {
        Self {
            left: bbox.x0() / page_width,
            right: bbox.x1() / page_width,
            bottom: bbox.y0() / page_height,
            top: bbox.y1() / page_height,
        }
    }

    /// The centered box leaving `margin` on every side of the unit square.
    pub fn central(margin: f64) -> Self {
        Self {
            left: margin,
            right: 1.0 - margin,
            bottom: margin,
            top: 1.0 - margin,
        }
    }

    /// True unless one rectangle lies strictly left of, right of, below or
    /// above the other. Touching edges intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.right < self.left
            || other.left > self.right
            || other.bottom > self.top
            || other.top < self.bottom)
    }
}

/// Union of two rectangles.
pub fn union_rect(a: Rect, b: Rect) -> Rect {
    (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))
}
