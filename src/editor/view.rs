//! The host interface the rewrap core is written against.
//!
//! All offsets are `char` indices into the document, matching the unit the
//! rope buffer uses for its own arithmetic.

use std::ops::Range;

/// A half-open range of char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }

    /// Smallest span containing both `self` and `other`.
    pub fn cover(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub const fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// Line terminator used by a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detect the line ending from the first line break in `text`.
    ///
    /// Text without any line break is treated as LF.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(idx) if text[..idx].ends_with('\r') => Self::CrLf,
            _ => Self::Lf,
        }
    }

    /// Rewrite `\n`-joined text to use this line ending.
    pub fn apply(self, text: String) -> String {
        match self {
            Self::Lf => text,
            Self::CrLf => text.replace('\n', "\r\n"),
        }
    }
}

/// Read access to a document: line resolution and substring extraction.
pub trait TextView {
    /// Total document length in chars.
    fn len_chars(&self) -> usize;

    /// Number of lines. An empty document has one (empty) line, and a trailing
    /// line break starts a final empty line.
    fn line_count(&self) -> usize;

    /// Line index containing `offset`. `offset == len_chars()` resolves to the
    /// last line; anything past that is `None`.
    fn char_to_line(&self, offset: usize) -> Option<usize>;

    /// Span of line `line_idx`, excluding its line break.
    fn line_span(&self, line_idx: usize) -> Option<Span>;

    /// Text of `span`. Spans are clamped to the document.
    fn slice(&self, span: Span) -> String;

    /// Text of line `line_idx`, without its line break.
    fn line_text(&self, line_idx: usize) -> Option<String> {
        self.line_span(line_idx).map(|span| self.slice(span))
    }

    /// Spans of lines `first..=last`.
    fn lines_in(&self, first: usize, last: usize) -> Vec<Span> {
        (first..=last).filter_map(|idx| self.line_span(idx)).collect()
    }
}

/// Host side of the command: cursor access and the single mutation.
pub trait TextHost: TextView {
    /// Offset of the primary cursor, or `None` when nothing is selected.
    fn primary_cursor(&self) -> Option<usize>;

    /// Replace `span` with `text` as one atomic edit.
    fn replace(&mut self, span: Span, text: &str);

    fn line_ending(&self) -> LineEnding {
        LineEnding::Lf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_joins_disjoint_spans() {
        let a = Span::new(0, 5);
        let b = Span::new(10, 14);
        assert_eq!(a.cover(b), Span::new(0, 14));
        assert_eq!(b.cover(a), Span::new(0, 14));
    }

    #[test]
    fn test_cover_of_nested_span_is_outer() {
        let outer = Span::new(2, 20);
        assert_eq!(outer.cover(Span::new(4, 6)), outer);
    }

    #[test]
    fn test_span_len_and_empty() {
        assert_eq!(Span::new(3, 8).len(), 5);
        assert!(Span::new(4, 4).is_empty());
        assert!(!Span::new(4, 5).is_empty());
    }

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(LineEnding::detect("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("a\r\nb\r\n"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("no breaks"), LineEnding::Lf);
        assert_eq!(LineEnding::detect(""), LineEnding::Lf);
    }

    #[test]
    fn test_apply_crlf_rewrites_breaks() {
        let text = "# one\n# two".to_string();
        assert_eq!(LineEnding::CrLf.apply(text.clone()), "# one\r\n# two");
        assert_eq!(LineEnding::Lf.apply(text), "# one\n# two");
    }
}
