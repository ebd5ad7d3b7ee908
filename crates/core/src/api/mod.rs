//! High-level API module for paragraph extraction.
//!
//! # Example
//!
//! ```ignore
//! use parafold_core::api::extract_paragraphs_from_bytes;
//!
//! let dump = std::fs::read("paper.json")?;
//! let paragraphs = extract_paragraphs_from_bytes(&dump, None)?;
//! ```

pub mod builder;
pub mod high_level;

// Re-export for convenience
pub use builder::ReflowBuilder;
pub use high_level::{
    ExtractOptions, collect_pages, extract_paragraph_blocks, extract_paragraphs,
    extract_paragraphs_from_bytes, extract_text_to_fp, filter_repeated_content,
};
