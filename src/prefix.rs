//! Comment/indent prefix detection.

/// Characters that may make up a line prefix: comment markers and indentation.
pub const PREFIX_CHARS: &[char] = &['#', '/', '*', ' ', '\t'];

pub fn is_prefix_char(c: char) -> bool {
    PREFIX_CHARS.contains(&c)
}

/// Longest leading run of prefix characters in `text`.
///
/// For `// Some comment` this is `"// "`. A line made only of prefix
/// characters is its own prefix.
pub fn compute_prefix(text: &str) -> &str {
    let end = text
        .char_indices()
        .find(|&(_, c)| !is_prefix_char(c))
        .map_or(text.len(), |(idx, _)| idx);
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment_prefix_includes_space() {
        assert_eq!(compute_prefix("// Some comment"), "// ");
        assert_eq!(compute_prefix("# python"), "# ");
    }

    #[test]
    fn test_block_comment_continuation() {
        assert_eq!(compute_prefix("   * body of a doc comment"), "   * ");
    }

    #[test]
    fn test_indentation_only() {
        assert_eq!(compute_prefix("\t  plain"), "\t  ");
    }

    #[test]
    fn test_no_prefix() {
        assert_eq!(compute_prefix("plain text"), "");
        assert_eq!(compute_prefix(""), "");
    }

    #[test]
    fn test_whole_line_is_prefix() {
        assert_eq!(compute_prefix("//"), "//");
        assert_eq!(compute_prefix("  #  "), "  #  ");
    }

    #[test]
    fn test_prefix_stops_at_first_other_char() {
        assert_eq!(compute_prefix("//! doc"), "//");
        assert_eq!(compute_prefix("## a # b"), "## ");
    }

    #[test]
    fn test_multibyte_content_after_prefix() {
        assert_eq!(compute_prefix("// éa"), "// ");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prefix_only_strings_are_their_own_prefix(s in "[#/* \t]*") {
                prop_assert_eq!(compute_prefix(&s), s.as_str());
            }

            #[test]
            fn no_leading_prefix_char_gives_empty(s in "[^#/* \t][^\n]*") {
                prop_assert_eq!(compute_prefix(&s), "");
            }

            #[test]
            fn compute_prefix_is_idempotent(s in "\\PC*") {
                let once = compute_prefix(&s);
                prop_assert_eq!(compute_prefix(once), once);
            }

            #[test]
            fn prefix_is_a_leading_substring(s in "\\PC*") {
                prop_assert!(s.starts_with(compute_prefix(&s)));
            }
        }
    }
}
