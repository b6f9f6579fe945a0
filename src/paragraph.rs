//! Paragraph detection around the cursor.
//!
//! A paragraph is the run of lines around the cursor line that share its
//! exact prefix and have text after it. Blank lines, prefix-only lines and
//! lines with a different prefix end the run.

use crate::editor::{Span, TextView};
use crate::error::{Result, RewrapError};
use crate::prefix::compute_prefix;

/// Direction of paragraph extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A run of whole lines, `first..=last`, and the span covering them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph {
    pub first_line: usize,
    pub last_line: usize,
    pub span: Span,
}

impl Paragraph {
    /// Single-line paragraph.
    pub const fn from_line(line_idx: usize, span: Span) -> Self {
        Self {
            first_line: line_idx,
            last_line: line_idx,
            span,
        }
    }

    pub const fn line_count(&self) -> usize {
        self.last_line - self.first_line + 1
    }

    /// Grow the paragraph to include an adjacent line.
    fn cover(self, line_idx: usize, span: Span) -> Self {
        Self {
            first_line: self.first_line.min(line_idx),
            last_line: self.last_line.max(line_idx),
            span: self.span.cover(span),
        }
    }
}

/// Whether a line with text `line` can join a paragraph with `prefix`.
///
/// The line needs the identical prefix and at least one char after it.
pub fn joins_paragraph(line: &str, prefix: &str) -> bool {
    compute_prefix(line) == prefix && line.chars().count() > prefix.chars().count()
}

/// Index of the line next to `paragraph` in `direction`, if the document has one.
pub fn neighbor_line<V: TextView + ?Sized>(
    view: &V,
    direction: Direction,
    paragraph: &Paragraph,
) -> Option<usize> {
    match direction {
        Direction::Up => paragraph.first_line.checked_sub(1),
        Direction::Down => {
            let next = paragraph.last_line + 1;
            (next < view.line_count()).then_some(next)
        }
    }
}

/// Extend `paragraph` line by line in one direction until a line fails to join.
pub fn extend<V: TextView + ?Sized>(
    view: &V,
    direction: Direction,
    mut paragraph: Paragraph,
    prefix: &str,
) -> Paragraph {
    while let Some(line_idx) = neighbor_line(view, direction, &paragraph) {
        let Some(span) = view.line_span(line_idx) else {
            break;
        };
        let text = view.slice(span);
        if !joins_paragraph(&text, prefix) {
            tracing::trace!(line = line_idx, ?direction, "paragraph boundary");
            break;
        }
        paragraph = paragraph.cover(line_idx, span);
    }
    paragraph
}

/// Find the paragraph containing `offset` and the prefix its lines share.
///
/// Extends fully downward, then fully upward. The cursor line is always part
/// of the result, even when it holds nothing but its prefix.
///
/// # Errors
/// Returns [`RewrapError::OffsetOutOfBounds`] if `offset` is past the end of
/// the document.
pub fn locate_paragraph<V: TextView + ?Sized>(view: &V, offset: usize) -> Result<(Paragraph, String)> {
    let line_idx = view
        .char_to_line(offset)
        .ok_or_else(|| RewrapError::OffsetOutOfBounds {
            offset,
            len: view.len_chars(),
        })?;
    let span = view
        .line_span(line_idx)
        .ok_or_else(|| RewrapError::LineOutOfBounds {
            line: line_idx,
            count: view.line_count(),
        })?;
    let prefix = compute_prefix(&view.slice(span)).to_owned();

    let paragraph = Paragraph::from_line(line_idx, span);
    let paragraph = extend(view, Direction::Down, paragraph, &prefix);
    let paragraph = extend(view, Direction::Up, paragraph, &prefix);

    tracing::debug!(
        first = paragraph.first_line,
        last = paragraph.last_line,
        prefix = ?prefix,
        "located paragraph"
    );
    Ok((paragraph, prefix))
}
