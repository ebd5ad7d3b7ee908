//! Document sources.
//!
//! Contains:
//! - `source` - the `PageSource` decoder contract
//! - `fragments` - JSON fragment dump reader

pub mod fragments;
pub mod source;

pub use fragments::{DumpPage, FragmentDocument};
pub use source::{PageContent, PageSource};
