//! End-to-end rewrap scenarios through the public API.

use rewrap::prelude::*;

fn rewrap_at(text: &str, line: usize, max_width: usize) -> String {
    let mut buf = EditorBuffer::from_text(text);
    let offset = buf.offset_of(line, 0);
    buf.set_cursor(offset);
    RewrapCommand::new(WrapOptions::with_max_width(max_width))
        .run(&mut buf)
        .unwrap();
    buf.text()
}

#[test]
fn test_short_comment_is_left_alone() {
    assert_eq!(rewrap_at("// a b c", 0, 80), "// a b c");
}

#[test]
fn test_two_hash_lines_merge_and_rebreak() {
    let out = rewrap_at("# one two\n# three four", 1, 15);
    assert_eq!(out, "# one two three\n# four");
}

#[test]
fn test_prefix_only_line_is_not_merged() {
    let text = "// first line of text\n//\n// after the break";
    let out = rewrap_at(text, 0, 80);
    assert_eq!(out, text);

    let out = rewrap_at("// a\n// b\n//\n// c", 0, 80);
    assert_eq!(out, "// a b\n//\n// c");
}

#[test]
fn test_overlong_word_is_kept_whole() {
    let word = "w".repeat(90);
    let text = format!("// short {word} tail");
    let out = rewrap_at(&text, 0, 80);
    assert_eq!(out, format!("// short\n// {word}\n// tail"));
}

#[test]
fn test_doc_comment_block_in_source() {
    let text = "\
fn main() {
    // This comment was written with very short lines that
    // someone
    // wanted
    // to join back together.
    let x = 1;
}";
    let out = rewrap_at(text, 2, 40);
    assert_eq!(
        out,
        "\
fn main() {
    // This comment was written with
    // very short lines that someone
    // wanted to join back together.
    let x = 1;
}"
    );
}

#[test]
fn test_block_comment_star_prefix() {
    let text = "/**\n * Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod.\n */";
    let out = rewrap_at(text, 1, 40);
    assert_eq!(
        out,
        "/**\n * Lorem ipsum dolor sit amet,\n * consectetur adipiscing elit, sed do\n * eiusmod.\n */"
    );
}

#[test]
fn test_plain_paragraph_between_blank_lines() {
    let text = "Title\n\nthe quick brown fox jumps over the lazy dog\n\nNext";
    let out = rewrap_at(text, 2, 20);
    assert_eq!(out, "Title\n\nthe quick brown fox\njumps over the lazy\ndog\n\nNext");
}

#[test]
fn test_rewrap_twice_is_stable() {
    let text = "# alpha beta gamma delta epsilon zeta eta theta iota kappa";
    let once = rewrap_at(text, 0, 24);
    let twice = rewrap_at(&once, 0, 24);
    assert_eq!(once, twice);
}

#[test]
fn test_wrapping_with_custom_view_implementation() {
    // A host that is not the rope buffer: a plain vector of lines.
    struct Lines(Vec<&'static str>);

    impl TextView for Lines {
        fn len_chars(&self) -> usize {
            self.0.iter().map(|l| l.chars().count() + 1).sum::<usize>() - 1
        }

        fn line_count(&self) -> usize {
            self.0.len()
        }

        fn char_to_line(&self, offset: usize) -> Option<usize> {
            let mut start = 0;
            for (idx, line) in self.0.iter().enumerate() {
                let end = start + line.chars().count();
                if offset <= end {
                    return Some(idx);
                }
                start = end + 1;
            }
            None
        }

        fn line_span(&self, line_idx: usize) -> Option<Span> {
            let start: usize = self.0[..line_idx.min(self.0.len())]
                .iter()
                .map(|l| l.chars().count() + 1)
                .sum();
            self.0
                .get(line_idx)
                .map(|line| Span::new(start, start + line.chars().count()))
        }

        fn slice(&self, span: Span) -> String {
            self.0
                .join("\n")
                .chars()
                .skip(span.start)
                .take(span.len())
                .collect()
        }
    }

    let view = Lines(vec!["intro", "  # one", "  # two", "outro"]);
    let edit = plan_rewrap(&view, 8, WrapOptions::default(), LineEnding::Lf).unwrap();
    assert_eq!(edit.span, Span::new(6, 21));
    assert_eq!(edit.text, "  # one two");
}
