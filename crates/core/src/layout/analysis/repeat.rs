//! Running header, footer and page-number removal.
//!
//! Every page is compared with every other collected page. Two lines match
//! when their text keys are equal and their page-normalized boxes intersect.
//! A line is dropped when it matches at the same structural position from
//! the top or bottom of another page (boundary repeat), or when it sits
//! outside the central content box and matches more than
//! `repeat_threshold` lines elsewhere (interior repeat).
//!
//! Verdicts are computed for all pages first and applied in one pass, so no
//! comparison ever sees a partially filtered page.

use once_cell::sync::Lazy;
use rayon::ThreadPool;
use rayon::prelude::*;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::layout::params::ReflowParams;
use crate::layout::types::{LineRef, Page};
use crate::utils::NormalizedRect;

static SHORT_CAPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{1,3}$").expect("valid short caps regex"));

/// Text used for cross-page matching.
///
/// A line made of one to three capitals (roman page numbers, section
/// letters) keys as empty; otherwise whitespace and ASCII digits are
/// stripped so "Page 3" and "Page 14" share a key.
pub fn repeat_key(text: &str) -> String {
    if SHORT_CAPS.is_match(text) {
        return String::new();
    }
    text.chars()
        .filter(|c| !c.is_whitespace() && !c.is_ascii_digit())
        .collect()
}

/// Why a line was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RemovalReason {
    #[default]
    None,
    BoundaryRepeat,
    InteriorRepeat,
}

/// Repeat analysis result for one line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineVerdict {
    /// Matched the line at the same offset from the top of another page.
    pub forward: bool,
    /// Matched the line at the same offset from the bottom of another page.
    pub backward: bool,
    /// Number of interior matches on other pages.
    pub repeat: usize,
    /// Last interior match, for diagnostics.
    pub repeat_with: Option<LineRef>,
    pub reason: RemovalReason,
}

impl LineVerdict {
    pub fn keep(&self) -> bool {
        self.reason == RemovalReason::None
    }

    fn finish(&mut self, threshold: usize) {
        self.reason = if self.forward || self.backward {
            RemovalReason::BoundaryRepeat
        } else if self.repeat > threshold {
            RemovalReason::InteriorRepeat
        } else {
            RemovalReason::None
        };
    }
}

#[derive(Debug, Clone)]
struct LineInfo {
    key: String,
    rect: NormalizedRect,
    outside_content: bool,
}

/// Precomputed keys, normalized boxes and a key index over all pages.
pub struct RepeatAnalyzer<'a> {
    pages: &'a [Page],
    info: Vec<Vec<LineInfo>>,
    index: FxHashMap<String, Vec<LineRef>>,
    threshold: usize,
}

impl<'a> RepeatAnalyzer<'a> {
    pub fn new(pages: &'a [Page], params: &ReflowParams) -> Self {
        let central = NormalizedRect::central(params.content_margin);
        let info: Vec<Vec<LineInfo>> = pages
            .iter()
            .map(|page| {
                page.lines
                    .iter()
                    .map(|line| {
                        let rect = line.normalized(page.max_width, page.max_height);
                        LineInfo {
                            key: repeat_key(&line.text),
                            rect,
                            outside_content: !central.intersects(&rect),
                        }
                    })
                    .collect()
            })
            .collect();

        // Entries are pushed in (page, line) order, which keeps the
        // "last match" of the interior scan stable.
        let mut index: FxHashMap<String, Vec<LineRef>> = FxHashMap::default();
        for (p, lines) in info.iter().enumerate() {
            for (l, line) in lines.iter().enumerate() {
                index
                    .entry(line.key.clone())
                    .or_default()
                    .push(LineRef::new(p, l));
            }
        }

        Self {
            pages,
            info,
            index,
            threshold: params.repeat_threshold,
        }
    }

    fn line(&self, r: LineRef) -> &LineInfo {
        &self.info[r.page][r.line]
    }

    /// Text key equality plus geometric intersection.
    pub fn is_repeat(&self, a: LineRef, b: LineRef) -> bool {
        let (a, b) = (self.line(a), self.line(b));
        a.key == b.key && a.rect.intersects(&b.rect)
    }

    /// Walks inward from the top and bottom of `page` in lock-step with
    /// `other`, marking matches until each direction hits a mismatch.
    fn scan_boundaries(&self, page: usize, other: usize, tally: &mut [LineVerdict]) {
        let len = self.info[page].len();
        let other_len = self.info[other].len();
        let mut forward_open = true;
        let mut backward_open = true;

        for offset in 0..len.min(other_len) {
            if forward_open {
                if self.is_repeat(LineRef::new(page, offset), LineRef::new(other, offset)) {
                    tally[offset].forward = true;
                } else {
                    forward_open = false;
                }
            }
            if backward_open {
                let idx = len - 1 - offset;
                let other_idx = other_len - 1 - offset;
                if self.is_repeat(LineRef::new(page, idx), LineRef::new(other, other_idx)) {
                    tally[idx].backward = true;
                } else {
                    backward_open = false;
                }
            }
            if !forward_open && !backward_open {
                break;
            }
        }
    }

    /// Counts matches on other pages for lines outside the content box.
    fn scan_interior(&self, page: usize, tally: &mut [LineVerdict]) {
        for (idx, line) in self.info[page].iter().enumerate() {
            if !line.outside_content {
                continue;
            }
            let Some(candidates) = self.index.get(&line.key) else {
                continue;
            };
            for &candidate in candidates {
                if candidate.page == page {
                    continue;
                }
                if line.rect.intersects(&self.line(candidate).rect) {
                    tally[idx].repeat += 1;
                    tally[idx].repeat_with = Some(candidate);
                }
            }
        }
    }

    /// Verdicts for every line of the page at position `page`.
    pub fn page_verdicts(&self, page: usize) -> Vec<LineVerdict> {
        let mut tally = vec![LineVerdict::default(); self.info[page].len()];
        for other in 0..self.pages.len() {
            if other != page {
                self.scan_boundaries(page, other, &mut tally);
            }
        }
        self.scan_interior(page, &mut tally);
        for verdict in &mut tally {
            verdict.finish(self.threshold);
        }
        tally
    }

    /// Verdicts for all pages, computed one page after another.
    pub fn verdicts(&self) -> Vec<Vec<LineVerdict>> {
        (0..self.pages.len()).map(|p| self.page_verdicts(p)).collect()
    }

    /// Verdicts for all pages, one rayon task per page.
    pub fn par_verdicts(&self) -> Vec<Vec<LineVerdict>> {
        (0..self.pages.len())
            .into_par_iter()
            .map(|p| self.page_verdicts(p))
            .collect()
    }
}

/// Drops every line whose verdict is not `keep`. Order is preserved.
pub fn apply_verdicts(pages: Vec<Page>, verdicts: &[Vec<LineVerdict>]) -> Vec<Page> {
    pages
        .into_iter()
        .zip(verdicts)
        .map(|(mut page, page_verdicts)| {
            let mut it = page_verdicts.iter();
            page.lines.retain(|_| it.next().is_none_or(LineVerdict::keep));
            page
        })
        .collect()
}

/// Runs repeat analysis over all pages and removes repeated lines.
///
/// With a pool the per-page analysis runs in parallel inside it.
pub fn remove_repeated_content(
    pages: Vec<Page>,
    params: &ReflowParams,
    pool: Option<&ThreadPool>,
) -> Vec<Page> {
    let verdicts = {
        let analyzer = RepeatAnalyzer::new(&pages, params);
        match pool {
            Some(pool) => pool.install(|| analyzer.par_verdicts()),
            None => analyzer.verdicts(),
        }
    };

    for (page, page_verdicts) in pages.iter().zip(&verdicts) {
        let removed = page_verdicts.iter().filter(|v| !v.keep()).count();
        if removed > 0 {
            tracing::debug!(page = page.index, removed, "repeated lines dropped");
        }
        for (line, verdict) in page.lines.iter().zip(page_verdicts) {
            if !verdict.keep() {
                tracing::trace!(
                    page = page.index,
                    text = %line.text,
                    reason = ?verdict.reason,
                    repeat = verdict.repeat,
                    "drop line"
                );
            }
        }
    }

    apply_verdicts(pages, &verdicts)
}
