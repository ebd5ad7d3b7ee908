//! parafold - paragraph reconstruction from positioned text fragments.
//!
//! Takes the positioned text runs a document decoder reports per page,
//! merges them into lines, drops running headers, footers and page numbers,
//! and regroups what remains into paragraphs.

pub mod api;
pub mod converter;
pub mod document;
pub mod error;
pub mod layout;
pub mod utils;

pub use api::high_level;

pub use error::{ReflowError, Result};
