//! Splitting a document into its preamble and pages.

use crate::diagnostics::Diagnostic;
use crate::parser::ConfigDocument;

use super::attributes::{default_title, parse_newpage, parse_title};
use super::page::Page;

pub const NEWPAGE: &str = "newpage";
pub const TITLE: &str = "title";

/// Result of segmenting a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Number of lines before the first `newpage`.
    pub preamble_len: usize,
    pub pages: Vec<Page>,
    /// Problems with `newpage` arguments, one per affected page.
    pub diagnostics: Vec<Diagnostic>,
}

/// Partition `doc` into a preamble and pages.
///
/// Each page runs from a `newpage` line up to the next `newpage` or the end
/// of the document. Only the first `title` line of a page counts; every
/// `title` line is excluded from the draw count. This is a pure function of
/// the document.
pub fn segment(doc: &ConfigDocument) -> Segmentation {
    let lines = doc.lines();
    let preamble_len = doc.position(NEWPAGE).unwrap_or(lines.len());

    let mut pages = Vec::new();
    let mut diagnostics = Vec::new();
    let mut start = preamble_len;

    while start < lines.len() {
        let end = lines[start + 1..]
            .iter()
            .position(|l| l.is(NEWPAGE))
            .map_or(lines.len(), |i| start + 1 + i);
        let body = &lines[start + 1..end];
        let index = pages.len();

        let draw_count = body.iter().filter(|l| !l.is(TITLE)).count();
        let title = match body.iter().find(|l| l.is(TITLE)) {
            Some(line) => parse_title(line.args(), index),
            None => default_title(index),
        };

        let spec = parse_newpage(lines[start].args(), index);
        if let Some(message) = spec.warning {
            diagnostics.push(
                Diagnostic::warning("plotcfg::layout", message)
                    .with_help(format!("at {}", lines[start].origin)),
            );
        }
        let (nx, ny) = spec.layout.resolve(draw_count);

        pages.push(Page {
            index,
            start_offset: start,
            cmd_count: body.len(),
            draw_count,
            nx,
            ny,
            log_flags: spec.log_flags,
            title,
        });
        start = end;
    }

    Segmentation {
        preamble_len,
        pages,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ConfigLine;

    fn doc(lines: &[&[&str]]) -> ConfigDocument {
        lines.iter().map(|l| ConfigLine::from_strs(l)).collect()
    }

    #[test]
    fn test_no_pages() {
        let d = doc(&[&["watchfile"], &["definecut", "a", "b"]]);
        let seg = segment(&d);
        assert_eq!(seg.preamble_len, 2);
        assert!(seg.pages.is_empty());
    }

    #[test]
    fn test_pages_and_counts() {
        let d = doc(&[
            &["watchfile"],
            &["newpage"],
            &["title", "First"],
            &["h1"],
            &["h2"],
            &["h3"],
            &["newpage", "1", "2", "logy"],
            &["h4"],
        ]);
        let seg = segment(&d);

        assert_eq!(seg.preamble_len, 1);
        assert_eq!(seg.pages.len(), 2);

        let first = &seg.pages[0];
        assert_eq!(first.start_offset, 1);
        assert_eq!(first.cmd_count, 4);
        assert_eq!(first.draw_count, 3);
        assert_eq!(first.dim(), (2, 2));
        assert_eq!(first.title, "First");

        let second = &seg.pages[1];
        assert_eq!(second.index, 1);
        assert_eq!(second.start_offset, 6);
        assert_eq!(second.draw_count, 1);
        assert_eq!(second.dim(), (1, 2));
        assert!(second.log_flags.logy);
        assert_eq!(second.title, "Page 2");
    }

    #[test]
    fn test_first_title_wins() {
        let d = doc(&[
            &["newpage"],
            &["title", "One"],
            &["h1"],
            &["title", "Two"],
        ]);
        let page = &segment(&d).pages[0];
        assert_eq!(page.title, "One");
        assert_eq!(page.cmd_count, 3);
        assert_eq!(page.draw_count, 1);
    }

    #[test]
    fn test_trailing_empty_page() {
        let d = doc(&[&["newpage"], &["h1"], &["newpage"]]);
        let seg = segment(&d);
        assert_eq!(seg.pages.len(), 2);
        assert_eq!(seg.pages[1].draw_count, 0);
        assert_eq!(seg.pages[1].dim(), (1, 1));
    }

    #[test]
    fn test_consecutive_newpages() {
        let d = doc(&[&["newpage"], &["newpage"], &["h1"]]);
        let seg = segment(&d);
        assert_eq!(seg.pages.len(), 2);
        assert_eq!(seg.pages[0].cmd_count, 0);
        assert_eq!(seg.pages[1].cmd_count, 1);
    }

    #[test]
    fn test_invalid_layout_warns() {
        let d = doc(&[&["newpage", "0"], &["h1"], &["h2"], &["h3"]]);
        let seg = segment(&d);
        assert_eq!(seg.pages[0].dim(), (2, 2));
        assert_eq!(seg.diagnostics.len(), 1);
        assert_eq!(seg.diagnostics[0].code, "plotcfg::layout");
    }

    #[test]
    fn test_segmentation_is_repeatable() {
        let d = doc(&[&["newpage", "3"], &["title", "T"], &["h1"], &["newpage"], &["h2"]]);
        assert_eq!(segment(&d), segment(&d));
    }
}
