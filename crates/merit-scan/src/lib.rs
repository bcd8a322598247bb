//! # merit-scan
//!
//! Line and token scanning primitives shared by the metric evaluators.
//!
//! Every helper is a pure, single-pass function over its input. Nothing here
//! keeps state between calls, so evaluators can run concurrently over the
//! same text without coordination.
//!
//! Line iteration uses [`str::lines`] everywhere: empty lines are preserved
//! and nothing is trimmed. Blankness is a separate question answered by
//! [`is_blank`].

#![forbid(unsafe_code)]

use regex::Regex;

/// True when a line is empty or whitespace-only.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Update a running brace-nesting depth with one line.
///
/// `{` increments, `}` decrements. The depth floors at 0 so unbalanced
/// closing braces in malformed input never go negative.
#[must_use]
pub fn update_brace_depth(line: &str, depth: usize) -> usize {
    let mut depth = depth;
    for ch in line.chars() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    depth
}

/// Maximum brace-nesting depth reached anywhere in `code`.
#[must_use]
pub fn max_brace_depth(code: &str) -> usize {
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    for ch in code.chars() {
        match ch {
            '{' => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max_depth
}

/// Count non-overlapping occurrences of a literal substring.
#[must_use]
pub fn count_literal(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    text.matches(needle).count()
}

/// Count non-overlapping matches of a compiled pattern.
#[must_use]
pub fn count_regex(text: &str, pattern: &Regex) -> usize {
    pattern.find_iter(text).count()
}

/// Count characters of `text` that appear in `set`.
#[must_use]
pub fn count_chars_in_set(text: &str, set: &str) -> usize {
    text.chars().filter(|c| set.contains(*c)).count()
}

/// Leading whitespace of a line, split by character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indent {
    pub spaces: usize,
    pub tabs: usize,
}

impl Indent {
    /// Both tabs and spaces appear in the same indent run.
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        self.spaces > 0 && self.tabs > 0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces == 0 && self.tabs == 0
    }
}

/// Space and tab counts in the leading whitespace run of `line`.
#[must_use]
pub fn leading_whitespace(line: &str) -> Indent {
    let mut indent = Indent::default();
    for ch in line.chars() {
        match ch {
            ' ' => indent.spaces += 1,
            '\t' => indent.tabs += 1,
            _ => break,
        }
    }
    indent
}

/// First indent character of a line, if any. Used to detect a style flip
/// between consecutive indented lines.
#[must_use]
pub fn indent_style(line: &str) -> Option<char> {
    match line.chars().next() {
        Some(c @ (' ' | '\t')) => Some(c),
        _ => None,
    }
}

/// True when the line contains a `/*` block-comment opener.
#[must_use]
pub fn opens_block_comment(line: &str) -> bool {
    line.contains("/*")
}

/// True when the line contains a `*/` block-comment closer.
#[must_use]
pub fn closes_block_comment(line: &str) -> bool {
    line.contains("*/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \t  "));
        assert!(!is_blank("  x"));
    }

    #[test]
    fn brace_depth_tracks_nesting() {
        let mut depth = 0;
        depth = update_brace_depth("fn main() {", depth);
        assert_eq!(depth, 1);
        depth = update_brace_depth("    if x { y(); }", depth);
        assert_eq!(depth, 1);
        depth = update_brace_depth("}", depth);
        assert_eq!(depth, 0);
    }

    #[test]
    fn brace_depth_floors_at_zero() {
        assert_eq!(update_brace_depth("}}}", 1), 0);
        assert_eq!(max_brace_depth("}} { }"), 1);
    }

    #[test]
    fn max_depth_finds_deepest_point() {
        assert_eq!(max_brace_depth("{ { { } } } { }"), 3);
        assert_eq!(max_brace_depth("no braces"), 0);
    }

    #[test]
    fn literal_counting_is_non_overlapping() {
        assert_eq!(count_literal("aaaa", "aa"), 2);
        assert_eq!(count_literal("abc", ""), 0);
        assert_eq!(count_literal("", "x"), 0);
    }

    #[test]
    fn regex_counting() {
        let re = Regex::new(r"\w+\s*\(").unwrap();
        assert_eq!(count_regex("foo(); bar ()", &re), 2);
        assert_eq!(count_regex("", &re), 0);
    }

    #[test]
    fn char_set_counting() {
        assert_eq!(count_chars_in_set("a+b=c;", "+-*/=;"), 3);
        assert_eq!(count_chars_in_set("", "+"), 0);
    }

    #[test]
    fn leading_whitespace_splits_by_class() {
        assert_eq!(
            leading_whitespace("    x"),
            Indent {
                spaces: 4,
                tabs: 0
            }
        );
        assert_eq!(
            leading_whitespace("\t\t x"),
            Indent {
                spaces: 1,
                tabs: 2
            }
        );
        assert!(leading_whitespace("\t  x").is_mixed());
        assert!(leading_whitespace("x").is_empty());
    }

    #[test]
    fn leading_whitespace_stops_at_first_glyph() {
        // Interior whitespace does not count toward the indent run.
        assert_eq!(
            leading_whitespace("  a\tb"),
            Indent {
                spaces: 2,
                tabs: 0
            }
        );
    }

    #[test]
    fn indent_style_reports_first_char() {
        assert_eq!(indent_style("    x"), Some(' '));
        assert_eq!(indent_style("\tx"), Some('\t'));
        assert_eq!(indent_style("x"), None);
        assert_eq!(indent_style(""), None);
    }

    #[test]
    fn block_comment_markers() {
        assert!(opens_block_comment("/* start"));
        assert!(closes_block_comment("end */"));
        assert!(opens_block_comment("a /* b */"));
        assert!(!opens_block_comment("// line"));
    }

    proptest! {
        #[test]
        fn update_depth_never_underflows(line in ".*", start in 0usize..8) {
            // Depth is unsigned and floors at zero no matter the input.
            let _ = update_brace_depth(&line, start);
        }

        #[test]
        fn max_depth_bounded_by_open_braces(code in ".*") {
            let opens = code.chars().filter(|c| *c == '{').count();
            prop_assert!(max_brace_depth(&code) <= opens);
        }
    }
}
