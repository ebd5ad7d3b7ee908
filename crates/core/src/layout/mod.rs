//! Layout reconstruction module.
//!
//! This module contains:
//! - Layout element types (Fragment, Line, Page, Paragraph)
//! - Reflow parameters (ReflowParams, SectionPolicy)
//! - The merging, filtering and segmentation stages

pub mod analysis;
pub mod params;
pub mod types;

// Re-export params
pub use params::{ReflowParams, SectionPolicy};

// Re-export element types
pub use types::{Fragment, Line, LineRef, Page, Paragraph, ParagraphBlock};

// Re-export analysis types and functions
pub use analysis::{
    LineVerdict, RemovalReason, RepeatAnalyzer, SectionScan, apply_section_policy,
    apply_verdicts, assemble_block, assemble_paragraph, find_section_boundary, is_section_heading,
    merge_fragments, normalize_whitespace, remove_repeated_content, repeat_key,
    segment_paragraphs,
};
