use ropey::Rope;

use super::view::{LineEnding, Span, TextHost, TextView};

/// A selection in the buffer, as char offsets.
///
/// `anchor` is where the selection started and `head` where it ends; a
/// collapsed selection (`anchor == head`) is a plain cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    /// A collapsed selection at `offset`.
    pub const fn cursor(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    pub const fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// The lower of the two ends.
    pub fn begin(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub const fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

/// A text buffer backed by a rope data structure.
///
/// Stands in for the host editor's document: it resolves lines, extracts
/// text and applies span replacements. Selections follow edits.
pub struct EditorBuffer {
    rope: Rope,
    selections: Vec<Selection>,
    line_ending: LineEnding,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string, with a cursor at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selections: vec![Selection::cursor(0)],
            line_ending: LineEnding::detect(text),
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Get the content of a line (without trailing line break).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        self.line_text(line_idx)
    }

    /// Length of a line in chars (without trailing line break).
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_span(line_idx).map_or(0, Span::len)
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// All selections, primary first.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn primary_selection(&self) -> Option<Selection> {
        self.selections.first().copied()
    }

    /// Replace all selections. Offsets are clamped to the buffer.
    pub fn set_selections(&mut self, selections: impl IntoIterator<Item = Selection>) {
        let len = self.rope.len_chars();
        self.selections = selections
            .into_iter()
            .map(|sel| Selection::new(sel.anchor.min(len), sel.head.min(len)))
            .collect();
    }

    /// Collapse to a single cursor at `offset` (clamped to the buffer).
    pub fn set_cursor(&mut self, offset: usize) {
        self.set_selections([Selection::cursor(offset)]);
    }

    pub fn clear_selections(&mut self) {
        self.selections.clear();
    }

    /// Char offset of a line and column, both zero-based.
    ///
    /// The line is clamped to the last line and the column to the line's
    /// length, the way cursor movement clamps.
    pub fn offset_of(&self, line: usize, col: usize) -> usize {
        let line = line.min(self.rope.len_lines().saturating_sub(1));
        self.line_span(line)
            .map_or(0, |span| span.start + col.min(span.len()))
    }
}

/// Where `offset` lands after `span` was replaced by `inserted` chars.
const fn shift_offset(offset: usize, span: Span, inserted: usize) -> usize {
    if offset >= span.end {
        offset - span.len() + inserted
    } else if offset > span.start {
        span.start + inserted
    } else {
        offset
    }
}

impl TextView for EditorBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn char_to_line(&self, offset: usize) -> Option<usize> {
        (offset <= self.rope.len_chars()).then(|| self.rope.char_to_line(offset))
    }

    fn line_span(&self, line_idx: usize) -> Option<Span> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let start = self.rope.line_to_char(line_idx);
        let line = self.rope.line(line_idx);
        let mut len = line.len_chars();
        // Strip trailing line break (LF or CRLF)
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        Some(Span::new(start, start + len))
    }

    fn slice(&self, span: Span) -> String {
        let len = self.rope.len_chars();
        let end = span.end.min(len);
        let start = span.start.min(end);
        self.rope.slice(start..end).to_string()
    }
}

impl TextHost for EditorBuffer {
    fn primary_cursor(&self) -> Option<usize> {
        self.primary_selection().map(|sel| sel.begin())
    }

    fn replace(&mut self, span: Span, text: &str) {
        let len = self.rope.len_chars();
        let end = span.end.min(len);
        let span = Span::new(span.start.min(end), end);

        self.rope.remove(span.range());
        self.rope.insert(span.start, text);

        let inserted = text.chars().count();
        for sel in &mut self.selections {
            sel.anchor = shift_offset(sel.anchor, span, inserted);
            sel.head = shift_offset(sel.head, span, inserted);
        }
        self.dirty = true;
    }

    fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("selections", &self.selections)
            .field("line_ending", &self.line_ending)
            .field("dirty", &self.dirty)
            .finish()
    }
}
