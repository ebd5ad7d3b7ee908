//! The decoder contract.
//!
//! Decoding document bytes into positioned runs is not done here. Anything
//! that can report a page count and, per page, its dimensions and ordered
//! fragments can drive the pipeline by implementing [`PageSource`].

use crate::error::{ReflowError, Result};
use crate::layout::types::Fragment;

/// One decoded page: dimensions plus fragments in reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub width: f64,
    pub height: f64,
    pub fragments: Vec<Fragment>,
}

impl PageContent {
    pub fn new(width: f64, height: f64, fragments: Vec<Fragment>) -> Self {
        Self {
            width,
            height,
            fragments,
        }
    }

    /// Rejects dimensions that would break cross-page normalization.
    pub fn check_geometry(&self, page: usize) -> Result<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(ReflowError::InvalidPageGeometry {
                page,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// A decoded document, fetched one page at a time.
pub trait PageSource {
    /// Total number of pages.
    fn page_count(&self) -> usize;

    /// Decodes the page at zero-based `index`.
    fn load_page(&mut self, index: usize) -> Result<PageContent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_must_be_positive() {
        assert!(PageContent::new(612.0, 792.0, Vec::new()).check_geometry(0).is_ok());
        assert!(matches!(
            PageContent::new(0.0, 792.0, Vec::new()).check_geometry(4),
            Err(ReflowError::InvalidPageGeometry { page: 4, .. })
        ));
        assert!(PageContent::new(612.0, f64::INFINITY, Vec::new())
            .check_geometry(0)
            .is_err());
    }
}
