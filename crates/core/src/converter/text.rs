//! Text Converter - outputs plain paragraphs.

use std::io::Write;

use crate::error::Result;
use crate::layout::ParagraphBlock;

/// Writes each paragraph followed by a blank line.
pub struct TextConverter<'a, W: Write> {
    /// Output writer
    outfp: &'a mut W,
    /// Whether to print a page header before each page's first paragraph
    showpageno: bool,
    last_page: Option<usize>,
}

impl<'a, W: Write> TextConverter<'a, W> {
    /// Create a new text converter.
    pub fn new(outfp: &'a mut W, showpageno: bool) -> Self {
        Self {
            outfp,
            showpageno,
            last_page: None,
        }
    }

    /// Check if page numbers are shown.
    pub fn show_pageno(&self) -> bool {
        self.showpageno
    }

    /// Write one paragraph.
    pub fn receive_paragraph(&mut self, block: &ParagraphBlock) -> Result<()> {
        if self.showpageno && self.last_page != Some(block.page) {
            writeln!(self.outfp, "Page {}", block.page + 1)?;
            self.last_page = Some(block.page);
        }
        self.outfp.write_all(block.text.as_bytes())?;
        self.outfp.write_all(b"\n\n")?;
        Ok(())
    }

    /// Flush the writer.
    pub fn close(&mut self) -> Result<()> {
        self.outfp.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(page: usize, text: &str) -> ParagraphBlock {
        ParagraphBlock {
            page,
            bbox: (0.0, 0.0, 1.0, 1.0),
            text: text.to_string(),
        }
    }

    #[test]
    fn paragraphs_are_blank_line_separated() {
        let mut out = Vec::new();
        let mut conv = TextConverter::new(&mut out, false);
        conv.receive_paragraph(&block(0, "one")).unwrap();
        conv.receive_paragraph(&block(1, "two")).unwrap();
        conv.close().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "one\n\ntwo\n\n");
    }

    #[test]
    fn page_headers_once_per_page() {
        let mut out = Vec::new();
        let mut conv = TextConverter::new(&mut out, true);
        assert!(conv.show_pageno());
        conv.receive_paragraph(&block(0, "a")).unwrap();
        conv.receive_paragraph(&block(0, "b")).unwrap();
        conv.receive_paragraph(&block(2, "c")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Page 1\na\n\nb\n\nPage 3\nc\n\n"
        );
    }
}
