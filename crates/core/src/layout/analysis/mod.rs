//! Layout analysis stages.
//!
//! Contains the per-page pipeline stages in the order they run:
//! - `merge` - fragments to lines
//! - `section` - reference-section truncation
//! - `repeat` - cross-page header/footer removal
//! - `paragraph` - lines to paragraphs
//! - `assemble` - paragraphs to text

pub mod assemble;
pub mod merge;
pub mod paragraph;
pub mod repeat;
pub mod section;

pub use assemble::{assemble_block, assemble_paragraph, normalize_whitespace};
pub use merge::merge_fragments;
pub use paragraph::segment_paragraphs;
pub use repeat::{
    LineVerdict, RemovalReason, RepeatAnalyzer, apply_verdicts, remove_repeated_content,
    repeat_key,
};
pub use section::{SectionScan, apply_section_policy, find_section_boundary, is_section_heading};
