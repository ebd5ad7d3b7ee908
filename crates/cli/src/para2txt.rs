//! para2txt - Extract reflowed paragraphs from text fragment dumps
//!
//! Reads one or more JSON fragment dumps, removes running headers, footers
//! and page numbers, and writes the remaining body text as paragraphs in
//! plain text or JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use parafold_core::converter::{JsonConverter, TextConverter};
use parafold_core::document::FragmentDocument;
use parafold_core::high_level::{ExtractOptions, extract_paragraph_blocks};
use parafold_core::layout::{ParagraphBlock, ReflowParams, SectionPolicy};
use tracing_subscriber::EnvFilter;

/// Output type for the extracted paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum OutputType {
    /// One paragraph per block, separated by blank lines (default)
    #[default]
    Text,
    /// JSON array of paragraphs with page index and bounding box
    Json,
}

/// Reference-section handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Stop at the first reference heading
    Document,
    /// Cut only the page holding the heading
    Page,
    /// Keep everything
    Disabled,
}

impl From<PolicyArg> for SectionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Document => SectionPolicy::TruncateDocument,
            PolicyArg::Page => SectionPolicy::TruncatePage,
            PolicyArg::Disabled => SectionPolicy::Disabled,
        }
    }
}

/// Extract reflowed paragraphs from text fragment dumps.
#[derive(Parser, Debug)]
#[command(name = "para2txt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to fragment dump files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Page selection ===
    /// A space- or comma-separated list of page numbers to read (1-indexed)
    #[arg(long = "page-numbers")]
    page_numbers: Option<String>,

    /// The maximum number of pages to read (0 = no limit)
    #[arg(short = 'm', long, default_value = "0")]
    maxpages: usize,

    /// Worker threads for repeat analysis (0 = all cores)
    #[arg(short = 'j', long, default_value = "1")]
    threads: usize,

    // === Reflow options ===
    /// What to do with a reference or acknowledgements section
    #[arg(long = "section-policy", value_enum, default_value = "document")]
    section_policy: PolicyArg,

    /// Lines a paragraph must hold before it may be split
    #[arg(long = "min-paragraph-lines", default_value = "5")]
    min_paragraph_lines: usize,

    /// Drop an interior line repeated on more than this many other pages
    #[arg(long = "repeat-threshold", default_value = "3")]
    repeat_threshold: usize,

    /// Vertical gap, in line heights, that opens a new paragraph
    #[arg(long = "gap-ratio", default_value = "2.0")]
    gap_ratio: f64,

    /// Margin of the central content box, as a fraction of the page
    #[arg(long = "content-margin", default_value = "0.2")]
    content_margin: f64,

    // === Output options ===
    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum)]
    output_type: Option<OutputType>,

    /// Print a "Page N" line before the first paragraph of each page
    #[arg(long = "page-headers", action = ArgAction::SetTrue)]
    page_headers: bool,
}

/// Infer output type from file extension.
fn infer_output_type(path: &str) -> Option<OutputType> {
    if path.to_lowercase().ends_with(".json") {
        Some(OutputType::Json)
    } else {
        None
    }
}

/// Parse --page-numbers into zero-indexed pages.
fn parse_page_numbers(args: &Args) -> Option<Vec<usize>> {
    let nums: Vec<usize> = args
        .page_numbers
        .as_deref()?
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.trim().parse::<usize>().ok())
        .map(|n| n.saturating_sub(1))
        .collect();
    (!nums.is_empty()).then_some(nums)
}

/// Build ReflowParams from command line arguments.
fn build_params(args: &Args) -> ReflowParams {
    ReflowParams {
        repeat_threshold: args.repeat_threshold,
        content_margin: args.content_margin,
        min_paragraph_lines: args.min_paragraph_lines,
        gap_ratio: args.gap_ratio,
        section_policy: args.section_policy.into(),
    }
}

fn build_options(args: &Args) -> ExtractOptions {
    let threads = match args.threads {
        0 => std::thread::available_parallelism().ok().map(|n| n.get()),
        n => Some(n),
    };
    ExtractOptions {
        page_numbers: parse_page_numbers(args),
        maxpages: args.maxpages,
        params: Some(build_params(args)),
        threads,
    }
}

fn output_type(args: &Args) -> OutputType {
    args.output_type
        .or_else(|| infer_output_type(&args.outfile))
        .unwrap_or_default()
}

/// Extract the paragraphs of a single dump file.
fn process_file(path: &PathBuf, options: &ExtractOptions) -> Result<Vec<ParagraphBlock>> {
    let mut doc = FragmentDocument::from_path(path)
        .with_context(|| format!("failed to read fragment dump {}", path.display()))?;
    let blocks = extract_paragraph_blocks(&mut doc, Some(options.clone()))
        .with_context(|| format!("failed to extract paragraphs from {}", path.display()))?;
    tracing::info!(file = %path.display(), paragraphs = blocks.len(), "file processed");
    Ok(blocks)
}

/// Write the paragraphs of every input file.
///
/// Text output is written file after file. JSON output is a single array
/// holding the blocks of all files in input order.
fn write_output<W: Write>(
    writer: &mut W,
    args: &Args,
    files: &[Vec<ParagraphBlock>],
) -> Result<()> {
    match output_type(args) {
        OutputType::Text => {
            for blocks in files {
                let mut converter = TextConverter::new(&mut *writer, args.page_headers);
                for block in blocks {
                    converter.receive_paragraph(block)?;
                }
                converter.close()?;
            }
        }
        OutputType::Json => {
            let mut converter = JsonConverter::new(writer, true);
            for block in files.iter().flatten() {
                converter.receive_paragraph(block)?;
            }
            converter.close()?;
        }
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let default_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    build_params(&args)
        .validate()
        .context("invalid reflow options")?;
    let options = build_options(&args);

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        if !path.exists() {
            bail!("file not found: {}", path.display());
        }
        files.push(process_file(path, &options)?);
    }
    write_output(&mut output, &args, &files)?;

    output.flush()?;
    Ok(())
}
