//! Reference-section boundary detection.
//!
//! Bibliographies are dense, repetitive and rarely wanted in reflowed text,
//! so collection stops at the first references/acknowledgements heading.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::layout::params::SectionPolicy;
use crate::layout::types::Line;

static SECTION_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(r?eferences?|acknowledgements)$").expect("valid section heading regex")
});

/// Whether page collection continues after a page has been scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionScan {
    Continue,
    Stop,
}

/// True when the trimmed line text ends with a references/acknowledgements
/// heading.
pub fn is_section_heading(text: &str) -> bool {
    SECTION_HEADING.is_match(text.trim())
}

/// Index of the first heading line, if any.
pub fn find_section_boundary(lines: &[Line]) -> Option<usize> {
    lines.iter().position(|line| is_section_heading(&line.text))
}

/// Truncates `lines` at the first heading according to `policy`.
///
/// Lines strictly before the heading are kept. Returns [`SectionScan::Stop`]
/// when no further pages should be collected.
pub fn apply_section_policy(policy: SectionPolicy, lines: &mut Vec<Line>) -> SectionScan {
    if policy == SectionPolicy::Disabled {
        return SectionScan::Continue;
    }
    let Some(idx) = find_section_boundary(lines) else {
        return SectionScan::Continue;
    };
    lines.truncate(idx);
    match policy {
        SectionPolicy::TruncateDocument => SectionScan::Stop,
        SectionPolicy::TruncatePage | SectionPolicy::Disabled => SectionScan::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<Line> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Line::new(*t, 72.0, 700.0 - 14.0 * i as f64, 100.0, 10.0))
            .collect()
    }

    #[test]
    fn heading_variants() {
        assert!(is_section_heading("References"));
        assert!(is_section_heading("  REFERENCE  "));
        assert!(is_section_heading("7 References"));
        assert!(is_section_heading("Acknowledgements"));
        assert!(!is_section_heading("References are listed below"));
        assert!(!is_section_heading("Acknowledgments"));
        assert!(!is_section_heading("Introduction"));
    }

    #[test]
    fn truncate_document_stops() {
        let mut page = lines(&["body", "more body", "References", "[1] Someone"]);
        let scan = apply_section_policy(SectionPolicy::TruncateDocument, &mut page);
        assert_eq!(scan, SectionScan::Stop);
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn truncate_page_continues() {
        let mut page = lines(&["body", "Acknowledgements", "thanks"]);
        let scan = apply_section_policy(SectionPolicy::TruncatePage, &mut page);
        assert_eq!(scan, SectionScan::Continue);
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn disabled_keeps_everything() {
        let mut page = lines(&["body", "References", "[1] Someone"]);
        let scan = apply_section_policy(SectionPolicy::Disabled, &mut page);
        assert_eq!(scan, SectionScan::Continue);
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn no_heading_is_untouched() {
        let mut page = lines(&["body", "more"]);
        assert_eq!(
            apply_section_policy(SectionPolicy::TruncateDocument, &mut page),
            SectionScan::Continue
        );
        assert_eq!(page.len(), 2);
    }
}
