//! Output converters for assembled paragraphs.
//!
//! - TextConverter: plain text, one paragraph per block
//! - JsonConverter: JSON array of paragraph blocks

mod json;
mod text;

pub use json::JsonConverter;
pub use text::TextConverter;
