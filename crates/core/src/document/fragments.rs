//! JSON fragment dumps.
//!
//! A fragment dump is the decoder's output serialized as JSON:
//!
//! ```json
//! { "pages": [ { "width": 612, "height": 792,
//!                "fragments": [ { "text": "Title", "x": 72, "y": 720, "width": 40, "height": 12 } ] } ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReflowError, Result};
use crate::layout::types::Fragment;

use super::source::{PageContent, PageSource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpPage {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub fragments: Vec<Fragment>,
}

/// An in-memory decoded document loaded from a fragment dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FragmentDocument {
    pub pages: Vec<DumpPage>,
}

impl FragmentDocument {
    /// Parses a dump from bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Reads and parses a dump file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_slice(&data)
    }

    /// Appends a page.
    pub fn push_page(&mut self, width: f64, height: f64, fragments: Vec<Fragment>) {
        self.pages.push(DumpPage {
            width,
            height,
            fragments,
        });
    }
}

impl PageSource for FragmentDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn load_page(&mut self, index: usize) -> Result<PageContent> {
        let page = self.pages.get(index).ok_or(ReflowError::PageOutOfRange {
            index,
            count: self.pages.len(),
        })?;
        let mut fragments = Vec::with_capacity(page.fragments.len());
        for (i, fragment) in page.fragments.iter().enumerate() {
            if fragment.is_blank() {
                continue;
            }
            let coords = [fragment.x, fragment.y, fragment.width, fragment.height];
            if !coords.iter().all(|v| v.is_finite()) {
                return Err(ReflowError::Decode(format!(
                    "fragment {i} on page {index} has non-finite geometry"
                )));
            }
            fragments.push(fragment.clone());
        }
        Ok(PageContent::new(page.width, page.height, fragments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"{
        "pages": [
            { "width": 612, "height": 792, "fragments": [
                { "text": "Hello", "x": 72, "y": 700, "width": 30, "height": 10 },
                { "text": "   ", "x": 110, "y": 700, "width": 3, "height": 10 },
                { "text": "world", "x": 115, "y": 700, "width": 30, "height": 10 }
            ] },
            { "width": 595, "height": 842 }
        ]
    }"#;

    #[test]
    fn parses_dump_and_drops_blank_runs() {
        let mut doc = FragmentDocument::from_slice(DUMP.as_bytes()).unwrap();
        assert_eq!(doc.page_count(), 2);
        let first = doc.load_page(0).unwrap();
        assert_eq!(first.fragments.len(), 2);
        assert_eq!(first.width, 612.0);
        let second = doc.load_page(1).unwrap();
        assert!(second.fragments.is_empty());
        assert_eq!(second.height, 842.0);
    }

    #[test]
    fn out_of_range_page_errors() {
        let mut doc = FragmentDocument::default();
        assert!(matches!(
            doc.load_page(0),
            Err(ReflowError::PageOutOfRange { index: 0, count: 0 })
        ));
    }

    #[test]
    fn non_finite_fragment_is_a_decode_error() {
        let mut doc = FragmentDocument::default();
        doc.push_page(
            612.0,
            792.0,
            vec![
                Fragment::new("ok", 72.0, 700.0, 20.0, 10.0),
                Fragment::new("bad", f64::NAN, 688.0, 20.0, 10.0),
            ],
        );
        match doc.load_page(0) {
            Err(ReflowError::Decode(msg)) => assert!(msg.contains("fragment 1 on page 0")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_dump_is_a_json_error() {
        assert!(matches!(
            FragmentDocument::from_slice(b"{ \"pages\": [ { \"width\": 1 } ] }"),
            Err(ReflowError::Json(_))
        ));
    }
}
