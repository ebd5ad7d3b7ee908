//! Paragraph container and the serializable output block.

use serde::{Deserialize, Serialize};

use crate::utils::{HasBBox, Rect, union_rect};

use super::line::Line;

/// A maximal run of consecutive lines on one page.
///
/// Always holds at least one line: the only constructor takes the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    page: usize,
    lines: Vec<Line>,
}

impl Paragraph {
    pub fn new(page: usize, first: Line) -> Self {
        Self {
            page,
            lines: vec![first],
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn last(&self) -> &Line {
        // Non-empty by construction.
        &self.lines[self.lines.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Union of the line boxes.
    pub fn bbox(&self) -> Rect {
        self.lines[1..]
            .iter()
            .fold(self.lines[0].bbox(), |acc, line| union_rect(acc, line.bbox()))
    }
}

/// Assembled paragraph text with its page and bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphBlock {
    pub page: usize,
    pub bbox: Rect,
    pub text: String,
}
