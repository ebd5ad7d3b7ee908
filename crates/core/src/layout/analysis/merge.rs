//! Fragment-to-line merging.

use crate::layout::types::{Fragment, Line};

/// Groups one page's fragments into text lines.
///
/// Single sweep in decoder order: each fragment is compared with the most
/// recently emitted line only, so fragments must arrive top-to-bottom,
/// left-to-right. A fragment sharing that line's vertical band is appended
/// to it (text joined by one space, widths summed); anything else starts a
/// new line. Whitespace-only fragments are skipped.
pub fn merge_fragments(fragments: &[Fragment]) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();

    for fragment in fragments.iter().filter(|f| !f.is_blank()) {
        let candidate = fragment.to_line();
        match lines.last_mut() {
            Some(last) if last.shares_band_with(&candidate) => last.absorb(candidate),
            _ => lines.push(candidate),
        }
    }

    lines
}
