//! JSON Converter - outputs paragraphs with page and position.

use std::io::Write;

use crate::error::Result;
use crate::layout::ParagraphBlock;

/// Buffers paragraph blocks and writes them as one JSON array on close.
pub struct JsonConverter<'a, W: Write> {
    outfp: &'a mut W,
    pretty: bool,
    blocks: Vec<ParagraphBlock>,
}

impl<'a, W: Write> JsonConverter<'a, W> {
    pub fn new(outfp: &'a mut W, pretty: bool) -> Self {
        Self {
            outfp,
            pretty,
            blocks: Vec::new(),
        }
    }

    pub fn receive_paragraph(&mut self, block: &ParagraphBlock) -> Result<()> {
        self.blocks.push(block.clone());
        Ok(())
    }

    /// Write the array and flush.
    pub fn close(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *self.outfp, &self.blocks)?;
        } else {
            serde_json::to_writer(&mut *self.outfp, &self.blocks)?;
        }
        self.outfp.write_all(b"\n")?;
        self.outfp.flush()?;
        Ok(())
    }
}
