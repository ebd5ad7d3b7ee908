//! Text lines, line references and the page container.

use serde::{Deserialize, Serialize};

use crate::utils::{HasBBox, NormalizedRect};

/// Fragments merged by vertical overlap into one reading-order row.
///
/// Text and geometry are fixed once merging is done; repeat analysis keeps
/// its results in separate verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Line {
    pub fn new(text: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// True when `other`'s vertical span shares a band with this line.
    ///
    /// Spans are half-open `[y, y + height)`; equal origins always share a
    /// band so zero-height runs still merge.
    pub fn shares_band_with(&self, other: &Self) -> bool {
        other.y == self.y || (other.y < self.y + self.height && self.y < other.y + other.height)
    }

    /// Appends a run that shares this line's band.
    pub(crate) fn absorb(&mut self, other: Line) {
        self.text.push(' ');
        self.text.push_str(&other.text);
        self.width += other.width;
    }

    /// This line's box scaled into the unit square of its page.
    pub fn normalized(&self, page_width: f64, page_height: f64) -> NormalizedRect {
        NormalizedRect::from_bbox(self, page_width, page_height)
    }
}

impl HasBBox for Line {
    fn x0(&self) -> f64 {
        self.x
    }

    fn y0(&self) -> f64 {
        self.y
    }

    fn x1(&self) -> f64 {
        self.x + self.width
    }

    fn y1(&self) -> f64 {
        self.y + self.height
    }
}

/// Non-owning reference to a line on some page: (page position, line index).
///
/// `page` is the position in the collected page list, not the source page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineRef {
    pub page: usize,
    pub line: usize,
}

impl LineRef {
    pub const fn new(page: usize, line: usize) -> Self {
        Self { page, line }
    }
}

/// One page of merged lines together with the page dimensions used for
/// cross-page normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub index: usize,
    pub max_width: f64,
    pub max_height: f64,
    pub lines: Vec<Line>,
}

impl Page {
    pub fn new(index: usize, max_width: f64, max_height: f64, lines: Vec<Line>) -> Self {
        Self {
            index,
            max_width,
            max_height,
            lines,
        }
    }
}
