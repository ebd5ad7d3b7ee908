#![allow(dead_code)]

use parafold_core::document::FragmentDocument;
use parafold_core::layout::Fragment;

pub const LETTER_W: f64 = 612.0;
pub const LETTER_H: f64 = 792.0;

/// Lays out one page of fragments top to bottom.
pub struct PageBuilder {
    fragments: Vec<Fragment>,
    cursor_y: f64,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
            cursor_y: 700.0,
        }
    }

    /// A running header band near the top edge.
    pub fn header(mut self, text: &str) -> Self {
        self.fragments
            .push(Fragment::new(text, 72.0, 750.0, 200.0, 10.0));
        self
    }

    /// A centered page-number band near the bottom edge.
    pub fn footer(mut self, text: &str) -> Self {
        self.fragments
            .push(Fragment::new(text, 290.0, 30.0, 30.0, 10.0));
        self
    }

    /// A body line at the left margin, 12pt below the previous one.
    pub fn body(self, text: &str) -> Self {
        self.body_at(text, 72.0)
    }

    pub fn body_at(mut self, text: &str, x: f64) -> Self {
        self.fragments
            .push(Fragment::new(text, x, self.cursor_y, 400.0, 10.0));
        self.cursor_y -= 12.0;
        self
    }

    /// A body line with an explicit height.
    pub fn sized(mut self, text: &str, height: f64) -> Self {
        self.fragments
            .push(Fragment::new(text, 72.0, self.cursor_y, 400.0, height));
        self.cursor_y -= 12.0;
        self
    }

    /// Free-standing fragment; does not move the cursor.
    pub fn at(mut self, text: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.fragments.push(Fragment::new(text, x, y, width, height));
        self
    }

    pub fn build(self) -> Vec<Fragment> {
        self.fragments
    }
}

/// A letter-sized document from per-page fragment lists.
pub fn document(pages: Vec<Vec<Fragment>>) -> FragmentDocument {
    let mut doc = FragmentDocument::default();
    for fragments in pages {
        doc.push_page(LETTER_W, LETTER_H, fragments);
    }
    doc
}

pub const NAMES: [&str; 8] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta",
];
