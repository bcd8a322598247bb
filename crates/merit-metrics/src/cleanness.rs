//! Cleanness: indentation consistency, brace placement, and blank-line use.

use std::sync::LazyLock;

use regex::Regex;

use merit_math::{clamp01, peak_score, safe_div};
use merit_scan::{count_regex, indent_style, is_blank, leading_whitespace};
use merit_types::{MetricEvaluation, MetricKind};

use crate::MetricEvaluator;

static SAME_LINE_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)\s*\{").expect("valid regex literal"));

/// Scores formatting discipline. Indentation is judged strictly: one mixed
/// tab/space indent anywhere zeroes the indentation sub-score.
#[derive(Debug, Clone)]
pub struct CleannessEvaluator {
    /// Weight of the indentation sub-score.
    pub indent_weight: f64,
    /// Weight of the brace-placement sub-score.
    pub brace_weight: f64,
    /// Weight of the blank-line sub-score.
    pub whitespace_weight: f64,
    /// Blank-line ratio at which the whitespace sub-score peaks.
    pub ideal_blank_ratio: f64,
}

impl Default for CleannessEvaluator {
    fn default() -> Self {
        Self {
            indent_weight: 0.5,
            brace_weight: 0.3,
            whitespace_weight: 0.2,
            ideal_blank_ratio: 0.2,
        }
    }
}

impl MetricEvaluator for CleannessEvaluator {
    fn kind(&self) -> MetricKind {
        MetricKind::Cleanness
    }

    fn describe(&self) -> &'static str {
        "Measures proper formatting and subsymbolic and symbolic notation."
    }

    fn evaluate(&self, code: &str) -> MetricEvaluation {
        let mut total_lines = 0usize;
        let mut blank_lines = 0usize;
        let mut mixed_indentation = false;
        let mut prev_style: Option<char> = None;

        for line in code.lines() {
            total_lines += 1;
            if is_blank(line) {
                blank_lines += 1;
                continue;
            }

            if leading_whitespace(line).is_mixed() {
                mixed_indentation = true;
            }

            // A flip between space-led and tab-led indents across
            // consecutive non-blank lines also counts as mixed.
            let style = indent_style(line);
            if let (Some(prev), Some(cur)) = (prev_style, style) {
                if prev != cur {
                    mixed_indentation = true;
                }
            }
            prev_style = style;
        }

        let mut same_line = 0usize;
        let mut next_line = 0usize;
        let mut prev_ends_paren = false;
        for line in code.lines() {
            same_line += count_regex(line, &SAME_LINE_BRACE);
            if prev_ends_paren && line.trim_start().starts_with('{') {
                next_line += 1;
            }
            prev_ends_paren = line.trim_end().ends_with(')');
        }
        // Consistent means exclusively one placement style is in use.
        let consistent_braces = (same_line == 0 || next_line == 0) && same_line + next_line > 0;

        let indent_score = if mixed_indentation { 0.0 } else { 1.0 };
        let brace_score = if consistent_braces { 1.0 } else { 0.5 };
        let blank_ratio = safe_div(blank_lines as f64, total_lines as f64, 0.0);
        let whitespace_score = peak_score(blank_ratio, self.ideal_blank_ratio);

        let score = clamp01(
            indent_score * self.indent_weight
                + brace_score * self.brace_weight
                + whitespace_score * self.whitespace_weight,
        );

        MetricEvaluation::new(
            self.kind(),
            score,
            format!(
                "Cleanness score based on indentation consistency (mixed: {mixed_indentation}), brace placement ({same_line} same-line, {next_line} next-line), and blank-line ratio ({blank_ratio:.2})."
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Consistent 4-space indentation, same-line braces, one blank in five
    // lines (ratio 0.2).
    const TIDY: &str = "fn demo() {\n    alpha();\n\n    beta();\n}";

    // Same shape, but one indent mixes a tab into the spaces.
    const MIXED: &str = "fn demo() {\n    alpha();\n\n\t  beta();\n}";

    #[test]
    fn tidy_code_scores_full_marks() {
        let eval = CleannessEvaluator::default().evaluate(TIDY);
        // indent 1.0*0.5 + brace 1.0*0.3 + whitespace 1.0*0.2
        assert!((eval.score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mixed_indentation_zeroes_the_indent_component() {
        let e = CleannessEvaluator::default();
        let tidy = e.evaluate(TIDY).score;
        let mixed = e.evaluate(MIXED).score;
        // Brace and whitespace sub-scores are identical between the two
        // snippets, so the gap is the full indentation weight.
        assert!(tidy - mixed >= e.indent_weight - 1e-12);
        assert!(e.evaluate(MIXED).rationale.contains("mixed: true"));
    }

    #[test]
    fn style_flip_across_lines_counts_as_mixed() {
        let code = "    spaces();\n\ttabs();\n";
        let eval = CleannessEvaluator::default().evaluate(code);
        assert!(eval.rationale.contains("mixed: true"));
    }

    #[test]
    fn exclusive_next_line_braces_are_consistent() {
        let code = "fn demo()\n{\n    alpha();\n}\n";
        let eval = CleannessEvaluator::default().evaluate(code);
        assert!(eval.rationale.contains("0 same-line, 1 next-line"));
    }

    #[test]
    fn mixed_brace_styles_halve_the_brace_component() {
        let both = "fn a() {\n    x();\n}\nfn b()\n{\n    y();\n}\n";
        let eval = CleannessEvaluator::default().evaluate(both);
        assert!(eval.rationale.contains("1 same-line, 1 next-line"));
    }

    #[test]
    fn empty_input_is_defined() {
        let eval = CleannessEvaluator::default().evaluate("");
        // indent 1.0 (nothing mixed), brace 0.5 (no braces), whitespace 0.0.
        assert!((eval.score - 0.65).abs() < 1e-12);
    }

    #[test]
    fn unindented_code_is_not_mixed() {
        let code = "a();\nb();\nc();\n";
        let eval = CleannessEvaluator::default().evaluate(code);
        assert!(eval.rationale.contains("mixed: false"));
    }
}
