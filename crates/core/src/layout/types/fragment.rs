//! Positioned text runs as reported by the decoder.

use serde::{Deserialize, Serialize};

use crate::utils::{HasBBox, round_tenth};

use super::line::Line;

/// A single positioned run of extracted text, before line merging.
///
/// `width` may be negative for right-to-left runs; [`Fragment::to_line`]
/// normalizes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Fragment {
    pub fn new(text: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// True when the run holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Converts the run into a single-fragment line.
    ///
    /// The origin is rounded to one decimal, then a negative width is folded
    /// into the origin so the resulting box has non-negative extent.
    pub fn to_line(&self) -> Line {
        let mut x = round_tenth(self.x);
        let y = round_tenth(self.y);
        let mut width = self.width;
        if width < 0.0 {
            x += width;
            width = -width;
        }
        Line::new(self.text.clone(), x, y, width, self.height.abs())
    }
}

impl HasBBox for Fragment {
    fn x0(&self) -> f64 {
        self.x.min(self.x + self.width)
    }

    fn y0(&self) -> f64 {
        self.y
    }

    fn x1(&self) -> f64 {
        self.x.max(self.x + self.width)
    }

    fn y1(&self) -> f64 {
        self.y + self.height
    }
}
