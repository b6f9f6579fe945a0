//! Greedy reflow of a paragraph under a shared prefix.
//!
//! All widths are `char` counts.

use crate::editor::TextView;
use crate::paragraph::Paragraph;

/// Line width used when nothing else is configured.
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Options for reflowing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    /// Maximum output line length, prefix included.
    pub max_width: usize,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl WrapOptions {
    pub const fn with_max_width(max_width: usize) -> Self {
        Self { max_width }
    }
}

/// Collapse every run of spaces into a single space. Other whitespace is kept.
pub fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !prev_space {
                out.push(c);
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    out
}

/// Strip `prefix_len` chars from each line and join them with spaces.
fn join_stripped<'a>(lines: impl IntoIterator<Item = &'a str>, prefix_len: usize) -> String {
    let mut text = String::new();
    for line in lines {
        text.extend(line.chars().skip(prefix_len));
        text.push(' ');
    }
    text
}

/// Pack words greedily into lines of at most `width` chars.
///
/// The first word of a line is placed unconditionally, so a word longer than
/// `width` gets a line of its own.
pub fn pack_words<'a>(words: impl IntoIterator<Item = &'a str>, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    // Char count of the last line, kept alongside to avoid recounting.
    let mut current_len = 0;
    for word in words {
        let word_len = word.chars().count();
        match lines.last_mut() {
            Some(line) if current_len + 1 + word_len <= width => {
                line.push(' ');
                line.push_str(word);
                current_len += 1 + word_len;
            }
            _ => {
                lines.push(word.to_owned());
                current_len = word_len;
            }
        }
    }
    lines
}

/// Reflow lines that all start with `prefix`.
///
/// Each line loses its first `prefix` chars, the remainder is split into
/// words, and the words are packed into lines of `max_width` chars including
/// the prefix. Output lines are joined with `\n`, without a trailing break.
/// Text without any words yields the prefix alone.
pub fn wrap_lines<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    prefix: &str,
    max_width: usize,
) -> String {
    let prefix_len = prefix.chars().count();
    let text = collapse_spaces(&join_stripped(lines, prefix_len));
    let width = max_width.saturating_sub(prefix_len);

    let wrapped = pack_words(text.split(' ').filter(|word| !word.is_empty()), width);
    if wrapped.is_empty() {
        return prefix.to_owned();
    }

    wrapped
        .iter()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reflow `paragraph` from `view`. See [`wrap_lines`].
pub fn wrap_paragraph<V: TextView + ?Sized>(
    view: &V,
    paragraph: &Paragraph,
    prefix: &str,
    max_width: usize,
) -> String {
    let lines: Vec<String> = view
        .lines_in(paragraph.first_line, paragraph.last_line)
        .into_iter()
        .map(|span| view.slice(span))
        .collect();
    wrap_lines(lines.iter().map(String::as_str), prefix, max_width)
}
