//! Builder pattern for paragraph extraction.
//!
//! Provides a fluent API for configuring and executing extraction over a
//! fragment dump file.
//!
//! # Example
//! ```ignore
//! use parafold_core::api::ReflowBuilder;
//!
//! let paragraphs = ReflowBuilder::new("paper.json")
//!     .pages(0..5)
//!     .parallel(4)
//!     .extract_paragraphs()?;
//! ```

use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::document::FragmentDocument;
use crate::error::Result;
use crate::layout::{ParagraphBlock, ReflowParams, SectionPolicy};

use super::high_level::{
    ExtractOptions, default_thread_count, extract_paragraph_blocks, extract_paragraphs,
};

/// A builder for configuring paragraph extraction.
///
/// This wraps `ExtractOptions` and the extraction functions.
#[derive(Debug, Clone)]
pub struct ReflowBuilder {
    source: PathBuf,
    pages: Option<Range<usize>>,
    page_numbers: Option<Vec<usize>>,
    maxpages: usize,
    threads: Option<usize>,
    params: Option<ReflowParams>,
    section_policy: Option<SectionPolicy>,
}

impl ReflowBuilder {
    /// Creates a new ReflowBuilder for the given fragment dump path.
    pub fn new(source: impl AsRef<Path>) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            pages: None,
            page_numbers: None,
            maxpages: 0,
            threads: None,
            params: None,
            section_policy: None,
        }
    }

    /// Sets a range of pages to read (zero-indexed).
    ///
    /// Replaces any previously set page_numbers.
    pub fn pages(mut self, range: Range<usize>) -> Self {
        self.pages = Some(range);
        self.page_numbers = None;
        self
    }

    /// Sets specific page numbers to read (zero-indexed).
    ///
    /// Replaces any previously set pages range.
    pub fn page_numbers(mut self, numbers: Vec<usize>) -> Self {
        self.page_numbers = Some(numbers);
        self.pages = None;
        self
    }

    /// Sets the maximum number of pages to read (0 means no limit).
    pub fn maxpages(mut self, max: usize) -> Self {
        self.maxpages = max;
        self
    }

    /// Sets the worker thread count for repeat analysis.
    ///
    /// 0 uses every available core; 1 runs sequentially.
    pub fn parallel(mut self, thread_count: usize) -> Self {
        let thread_count = if thread_count == 0 {
            default_thread_count()
        } else {
            thread_count
        };
        self.threads = (thread_count > 1).then_some(thread_count);
        self
    }

    /// Sets the reflow parameters.
    pub fn params(mut self, params: ReflowParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Overrides the section policy of the configured parameters.
    pub fn section_policy(mut self, policy: SectionPolicy) -> Self {
        self.section_policy = Some(policy);
        self
    }

    /// Builds the `ExtractOptions` from this builder's configuration.
    fn build_options(&self) -> ExtractOptions {
        let page_numbers = if let Some(ref range) = self.pages {
            Some(range.clone().collect())
        } else {
            self.page_numbers.clone()
        };

        let params = match (self.params.clone(), self.section_policy) {
            (params, Some(section_policy)) => Some(ReflowParams {
                section_policy,
                ..params.unwrap_or_default()
            }),
            (params, None) => params,
        };

        ExtractOptions {
            page_numbers,
            maxpages: self.maxpages,
            params,
            threads: self.threads,
        }
    }

    /// Reads the dump and extracts its paragraphs.
    pub fn extract_paragraphs(self) -> Result<Vec<String>> {
        let mut doc = FragmentDocument::from_path(&self.source)?;
        extract_paragraphs(&mut doc, Some(self.build_options()))
    }

    /// Reads the dump and extracts paragraphs with page and position.
    pub fn extract_blocks(self) -> Result<Vec<ParagraphBlock>> {
        let mut doc = FragmentDocument::from_path(&self.source)?;
        extract_paragraph_blocks(&mut doc, Some(self.build_options()))
    }
}
