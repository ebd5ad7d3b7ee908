//! High-level paragraph extraction API.
//!
//! Provides the main public API:
//! - `extract_paragraphs()` - paragraphs of a decoded document as strings
//! - `extract_paragraph_blocks()` - the same with page index and bounding box
//! - `extract_text_to_fp()` - paragraphs written to a writer
//! - `collect_pages()` / `filter_repeated_content()` - intermediate stages

use std::io::Write;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::converter::TextConverter;
use crate::document::{FragmentDocument, PageSource};
use crate::error::{ReflowError, Result};
use crate::layout::{
    Page, ParagraphBlock, ReflowParams, SectionScan, apply_section_policy, assemble_block,
    merge_fragments, remove_repeated_content, segment_paragraphs,
};

pub(crate) fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Options for paragraph extraction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractOptions {
    /// Zero-indexed page numbers to read. None means all pages.
    pub page_numbers: Option<Vec<usize>>,

    /// Maximum number of pages to read. 0 means no limit.
    pub maxpages: usize,

    /// Reflow parameters. None uses default ReflowParams.
    pub params: Option<ReflowParams>,

    /// Worker threads for repeat analysis. None or 1 runs sequentially.
    pub threads: Option<usize>,
}

fn build_pool(threads: Option<usize>) -> Result<Option<ThreadPool>> {
    match threads {
        Some(n) if n > 1 => ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .map(Some)
            .map_err(|e| ReflowError::ThreadPool(e.to_string())),
        _ => Ok(None),
    }
}

/// Fetches pages in order, merges their fragments into lines and applies
/// the reference-section policy.
///
/// Pages are decoded one at a time. Under `SectionPolicy::TruncateDocument`
/// no page after the first heading is fetched.
pub fn collect_pages<S: PageSource>(source: &mut S, options: &ExtractOptions) -> Result<Vec<Page>> {
    let params = options.params.clone().unwrap_or_default();
    params.validate()?;

    let mut pages = Vec::new();
    for index in 0..source.page_count() {
        if let Some(ref nums) = options.page_numbers {
            if !nums.contains(&index) {
                continue;
            }
        }

        if options.maxpages > 0 && pages.len() >= options.maxpages {
            break;
        }

        let content = source.load_page(index)?;
        content.check_geometry(index)?;

        let mut lines = merge_fragments(&content.fragments);
        let merged = lines.len();
        let scan = apply_section_policy(params.section_policy, &mut lines);
        tracing::debug!(
            page = index,
            fragments = content.fragments.len(),
            lines = merged,
            kept = lines.len(),
            "page collected"
        );

        pages.push(Page::new(index, content.width, content.height, lines));

        if scan == SectionScan::Stop {
            tracing::info!(page = index, "reference section reached, ignoring remaining pages");
            break;
        }
    }

    Ok(pages)
}

/// Removes running headers, footers and other cross-page repeats.
///
/// With more than one thread the per-page analysis runs on a dedicated pool.
pub fn filter_repeated_content(
    pages: Vec<Page>,
    params: &ReflowParams,
    threads: Option<usize>,
) -> Result<Vec<Page>> {
    let pool = build_pool(threads)?;
    Ok(remove_repeated_content(pages, params, pool.as_ref()))
}

/// Extracts paragraphs with their page index and bounding box.
pub fn extract_paragraph_blocks<S: PageSource>(
    source: &mut S,
    options: Option<ExtractOptions>,
) -> Result<Vec<ParagraphBlock>> {
    let options = options.unwrap_or_default();
    let params = options.params.clone().unwrap_or_default();

    let pages = collect_pages(source, &options)?;
    let pages = filter_repeated_content(pages, &params, options.threads)?;

    let blocks: Vec<ParagraphBlock> = pages
        .into_iter()
        .flat_map(|page| segment_paragraphs(page.index, page.lines, &params))
        .map(|paragraph| assemble_block(&paragraph))
        .collect();
    tracing::debug!(paragraphs = blocks.len(), "extraction finished");
    Ok(blocks)
}

/// Extracts the paragraphs of a decoded document, in page then paragraph
/// order.
///
/// # Example
/// ```ignore
/// use parafold_core::document::FragmentDocument;
/// use parafold_core::high_level::extract_paragraphs;
///
/// let mut doc = FragmentDocument::from_path("paper.json")?;
/// for paragraph in extract_paragraphs(&mut doc, None)? {
///     println!("{paragraph}\n");
/// }
/// ```
pub fn extract_paragraphs<S: PageSource>(
    source: &mut S,
    options: Option<ExtractOptions>,
) -> Result<Vec<String>> {
    Ok(extract_paragraph_blocks(source, options)?
        .into_iter()
        .map(|block| block.text)
        .collect())
}

/// Parses a JSON fragment dump and extracts its paragraphs.
pub fn extract_paragraphs_from_bytes(
    data: &[u8],
    options: Option<ExtractOptions>,
) -> Result<Vec<String>> {
    let mut doc = FragmentDocument::from_slice(data)?;
    extract_paragraphs(&mut doc, options)
}

/// Extracts paragraphs and writes them to a writer, separated by blank lines.
pub fn extract_text_to_fp<S: PageSource, W: Write>(
    source: &mut S,
    writer: &mut W,
    options: Option<ExtractOptions>,
) -> Result<()> {
    let blocks = extract_paragraph_blocks(source, options)?;
    let mut converter = TextConverter::new(writer, false);
    for block in &blocks {
        converter.receive_paragraph(block)?;
    }
    converter.close()
}
