//! Reflow parameters.
//!
//! Contains ReflowParams for controlling how lines are filtered and grouped
//! into paragraphs, and SectionPolicy for reference-section truncation.

use serde::{Deserialize, Serialize};

use crate::error::{ReflowError, Result};

/// What to do once a references/acknowledgements heading is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionPolicy {
    /// Keep the lines before the heading and stop reading the document.
    #[default]
    TruncateDocument,
    /// Drop the rest of the page holding the heading, keep later pages.
    TruncatePage,
    /// Never truncate.
    Disabled,
}

/// Parameters for repeat filtering and paragraph segmentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflowParams {
    /// A line is dropped as an interior repeat when it matches more than this
    /// many lines on other pages.
    pub repeat_threshold: usize,

    /// Margin of the central content box, as a fraction of the page on each
    /// side. Lines intersecting the box are never counted as interior repeats.
    pub content_margin: f64,

    /// A paragraph must hold at least this many lines before it can be split.
    pub min_paragraph_lines: usize,

    /// A vertical gap larger than this many line heights starts a paragraph.
    pub gap_ratio: f64,

    /// Reference-section handling.
    pub section_policy: SectionPolicy,
}

impl Default for ReflowParams {
    fn default() -> Self {
        Self {
            repeat_threshold: 3,
            content_margin: 0.2,
            min_paragraph_lines: 5,
            gap_ratio: 2.0,
            section_policy: SectionPolicy::TruncateDocument,
        }
    }
}

impl ReflowParams {
    /// Checks that the parameters describe a usable configuration.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..0.5).contains(&self.content_margin) {
            return Err(ReflowError::InvalidParams(format!(
                "content_margin must be in [0, 0.5), got {}",
                self.content_margin
            )));
        }
        if !(self.gap_ratio > 0.0) {
            return Err(ReflowError::InvalidParams(format!(
                "gap_ratio must be positive, got {}",
                self.gap_ratio
            )));
        }
        if self.min_paragraph_lines == 0 {
            return Err(ReflowError::InvalidParams(
                "min_paragraph_lines must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
