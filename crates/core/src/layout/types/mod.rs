//! Layout element types.

pub mod fragment;
pub mod line;
pub mod paragraph;

pub use fragment::Fragment;
pub use line::{Line, LineRef, Page};
pub use paragraph::{Paragraph, ParagraphBlock};
