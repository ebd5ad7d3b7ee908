//! Line-to-paragraph segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::layout::params::ReflowParams;
use crate::layout::types::{Line, Paragraph};

static ABSTRACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)abstract").expect("valid abstract regex"));

/// Decides whether `line` opens a new paragraph after `prev`.
///
/// Any of:
/// - an "Abstract" label,
/// - a vertical gap larger than `gap_ratio` line heights,
/// - a first-line indent: `line` sits right of `prev` and `next` returns left.
fn opens_paragraph(params: &ReflowParams, prev: &Line, line: &Line, next: Option<&Line>) -> bool {
    if ABSTRACT.is_match(&line.text) {
        return true;
    }
    if (prev.y - line.y).abs() > line.height * params.gap_ratio {
        return true;
    }
    line.x > prev.x && next.is_some_and(|next| next.x < line.x)
}

/// Groups a page's surviving lines into paragraphs in one greedy pass.
///
/// A paragraph shorter than `min_paragraph_lines` is never split, which
/// keeps headings and short blocks together. An empty page yields no
/// paragraphs.
pub fn segment_paragraphs(page: usize, lines: Vec<Line>, params: &ReflowParams) -> Vec<Paragraph> {
    let mut iter = lines.into_iter().peekable();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut paragraphs = vec![Paragraph::new(page, first)];
    while let Some(line) = iter.next() {
        let next = iter.peek();
        // `paragraphs` is never empty here.
        let current = paragraphs.len() - 1;
        let split = paragraphs[current].len() >= params.min_paragraph_lines
            && opens_paragraph(params, paragraphs[current].last(), &line, next);
        if split {
            paragraphs.push(Paragraph::new(page, line));
        } else {
            paragraphs[current].push(line);
        }
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str, x: f64, y: f64) -> Line {
        Line::new(text, x, y, 400.0, 10.0)
    }

    fn rows(xs: &[f64]) -> Vec<Line> {
        xs.iter()
            .enumerate()
            .map(|(i, x)| at(&format!("line {i}"), *x, 700.0 - 12.0 * i as f64))
            .collect()
    }

    fn sizes(paragraphs: &[Paragraph]) -> Vec<usize> {
        paragraphs.iter().map(Paragraph::len).collect()
    }

    #[test]
    fn empty_page_has_no_paragraphs() {
        assert!(segment_paragraphs(0, Vec::new(), &ReflowParams::default()).is_empty());
    }

    #[test]
    fn short_runs_stay_together() {
        // Indent pattern at line 2, but the paragraph only has two lines.
        let paras = segment_paragraphs(0, rows(&[0.0, 0.0, 20.0, 0.0]), &ReflowParams::default());
        assert_eq!(sizes(&paras), vec![4]);
    }

    #[test]
    fn indent_splits_after_threshold() {
        let xs = [0.0, 0.0, 0.0, 0.0, 0.0, 20.0, 0.0, 0.0];
        let paras = segment_paragraphs(3, rows(&xs), &ReflowParams::default());
        assert_eq!(sizes(&paras), vec![5, 3]);
        assert_eq!(paras[1].lines()[0].text, "line 5");
        assert_eq!(paras[1].page(), 3);
    }

    #[test]
    fn indent_needs_dedent_after() {
        let xs = [0.0, 0.0, 0.0, 0.0, 0.0, 20.0, 20.0];
        let paras = segment_paragraphs(0, rows(&xs), &ReflowParams::default());
        assert_eq!(sizes(&paras), vec![7]);
    }

    #[test]
    fn indent_on_last_line_does_not_split() {
        let xs = [0.0, 0.0, 0.0, 0.0, 0.0, 20.0];
        let paras = segment_paragraphs(0, rows(&xs), &ReflowParams::default());
        assert_eq!(sizes(&paras), vec![6]);
    }

    #[test]
    fn large_gap_splits() {
        let mut lines = rows(&[0.0; 6]);
        lines[5].y -= 30.0;
        let paras = segment_paragraphs(0, lines, &ReflowParams::default());
        assert_eq!(sizes(&paras), vec![5, 1]);
    }

    #[test]
    fn abstract_label_splits() {
        let mut lines = rows(&[0.0; 7]);
        lines[5].text = "ABSTRACT".to_string();
        let paras = segment_paragraphs(0, lines, &ReflowParams::default());
        assert_eq!(sizes(&paras), vec![5, 2]);
    }

    #[test]
    fn threshold_is_configurable() {
        let params = ReflowParams {
            min_paragraph_lines: 2,
            ..Default::default()
        };
        let paras = segment_paragraphs(0, rows(&[0.0, 0.0, 20.0, 0.0]), &params);
        assert_eq!(sizes(&paras), vec![2, 2]);
    }
}
