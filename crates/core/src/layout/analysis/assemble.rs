//! Paragraph-to-text assembly.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::layout::types::{Paragraph, ParagraphBlock};

/// Transient separator left where a font-size drop restarted the text.
const BREAK: char = '\n';

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("valid space run regex"));
static LEADING_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ *\n+").expect("valid leading break regex"));
static BREAK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" *\n+").expect("valid break regex"));

/// Joins a paragraph's lines into one normalized string.
///
/// Lines are joined with single spaces. A trailing hyphen is removed and
/// the next line continues the word; the last line keeps its hyphen. When a line is taller than the
/// one after it (a heading or lead-in set in a larger size), everything
/// accumulated so far is discarded and assembly restarts after it.
pub fn assemble_paragraph(paragraph: &Paragraph) -> String {
    let lines = paragraph.lines();
    let mut text = String::new();

    for (j, line) in lines.iter().enumerate() {
        text.push_str(&line.text);
        match lines.get(j + 1) {
            Some(next) if line.height > next.height => {
                text.clear();
                text.push(BREAK);
            }
            Some(_) if line.text.ends_with('-') => {
                text.pop();
            }
            Some(_) => text.push(' '),
            None => {}
        }
    }

    normalize_whitespace(&text)
}

/// Collapses space runs and removes break markers with their leading spaces.
pub fn normalize_whitespace(text: &str) -> String {
    let text = SPACE_RUN.replace_all(text, " ");
    let text = LEADING_BREAK.replace(&text, "");
    BREAK_RUN.replace_all(&text, "").into_owned()
}

/// Assembles a paragraph and attaches its page and bounding box.
pub fn assemble_block(paragraph: &Paragraph) -> ParagraphBlock {
    ParagraphBlock {
        page: paragraph.page(),
        bbox: paragraph.bbox(),
        text: assemble_paragraph(paragraph),
    }
}
