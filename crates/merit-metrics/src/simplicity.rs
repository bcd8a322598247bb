//! Simplicity: line length, nesting depth, and symbol density.

use merit_math::{clamp01, mean, peak_score};
use merit_scan::{count_chars_in_set, is_blank, max_brace_depth};
use merit_types::{MetricEvaluation, MetricKind};

use crate::MetricEvaluator;

/// Characters counted toward symbol density.
const SYMBOL_SET: &str = "+-*/=<>!&|^~%?:;[](){}";

/// Sub-score used when a fragment has no non-blank lines to measure.
const NEUTRAL_SUBSCORE: f64 = 0.5;

/// Scores how easily a fragment is digested: short lines, shallow nesting,
/// and a symbol density near the ideal.
#[derive(Debug, Clone)]
pub struct SimplicityEvaluator {
    /// Average line length (chars) at which the line sub-score is exactly 1.0.
    pub ideal_line_len: f64,
    /// Nesting depth at which the nesting sub-score reaches 0.0.
    pub max_nesting: f64,
    /// Symbol-to-character ratio at which the symbol sub-score peaks.
    pub ideal_symbol_density: f64,
}

impl Default for SimplicityEvaluator {
    fn default() -> Self {
        Self {
            ideal_line_len: 40.0,
            max_nesting: 5.0,
            ideal_symbol_density: 0.1,
        }
    }
}

impl MetricEvaluator for SimplicityEvaluator {
    fn kind(&self) -> MetricKind {
        MetricKind::Simplicity
    }

    fn describe(&self) -> &'static str {
        "Measures purity of syntactic, semantic, and pragmatic quality to be easily digested by programmers."
    }

    fn evaluate(&self, code: &str) -> MetricEvaluation {
        let mut total_lines = 0usize;
        let mut total_len = 0usize;
        for line in code.lines().filter(|l| !is_blank(l)) {
            total_lines += 1;
            total_len += line.chars().count();
        }

        let depth = max_brace_depth(code);

        let total_chars = code.chars().count();
        let symbols = count_chars_in_set(code, SYMBOL_SET);
        let density = if total_chars == 0 {
            0.0
        } else {
            symbols as f64 / total_chars as f64
        };

        // Sub-scores are intentionally unclamped before the mean; only the
        // final value is bounded.
        let (avg_len, line_score) = if total_lines == 0 {
            (0.0, NEUTRAL_SUBSCORE)
        } else {
            let avg = total_len as f64 / total_lines as f64;
            let score = (1.0 - (avg - self.ideal_line_len) / self.ideal_line_len).max(0.0);
            (avg, score)
        };
        let nesting_score = (1.0 - depth as f64 / self.max_nesting).max(0.0);
        let symbol_score = peak_score(density, self.ideal_symbol_density);

        let score = clamp01(mean(&[line_score, nesting_score, symbol_score]));

        MetricEvaluation::new(
            self.kind(),
            score,
            format!(
                "Simplicity score based on average line length ({avg_len:.1} chars), nesting depth ({depth}), and symbol density ({density:.3})."
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_line_and_nesting_scores_are_exact() {
        // Average line length of exactly 40 and zero nesting depth: both
        // sub-scores must be exactly 1.0.
        let line = "a".repeat(40);
        let code = format!("{line}\n{line}\n");
        let e = SimplicityEvaluator::default();

        let total: usize = code.lines().map(|l| l.chars().count()).sum();
        let avg = total as f64 / 2.0;
        assert_eq!(avg, 40.0);

        let line_score = (1.0 - (avg - e.ideal_line_len) / e.ideal_line_len).max(0.0);
        assert_eq!(line_score, 1.0);
        let nesting_score = (1.0 - max_brace_depth(&code) as f64 / e.max_nesting).max(0.0);
        assert_eq!(nesting_score, 1.0);
    }

    #[test]
    fn empty_input_uses_neutral_fallback() {
        let eval = SimplicityEvaluator::default().evaluate("");
        // line 0.5 (neutral), nesting 1.0 (depth 0), symbol 0.0 (density 0).
        assert!((eval.score - 0.5).abs() < 1e-12);
        assert!(eval.score.is_finite());
    }

    #[test]
    fn deep_nesting_lowers_the_score() {
        let flat = "let a = b;\nlet c = d;\n";
        let nested = "{ { { { { { x } } } } } }\n";
        let e = SimplicityEvaluator::default();
        assert!(e.evaluate(flat).score > e.evaluate(nested).score);
    }

    #[test]
    fn long_lines_lower_the_score() {
        let short = "let x = 1;\n";
        let long = format!("{};\n", "x".repeat(200));
        let e = SimplicityEvaluator::default();
        assert!(e.evaluate(short).score > e.evaluate(&long).score);
    }

    #[test]
    fn blank_lines_do_not_skew_average_length() {
        let e = SimplicityEvaluator::default();
        let without_blanks = "abcd\nabcd\n";
        let with_blanks = "abcd\n\n\nabcd\n";
        // Blank lines change total chars only marginally; the averages of
        // the measured lines are identical.
        let a = e.evaluate(without_blanks);
        let b = e.evaluate(with_blanks);
        assert!(a.rationale.contains("4.0 chars"));
        assert!(b.rationale.contains("4.0 chars"));
    }

    #[test]
    fn score_is_always_bounded() {
        // Very short lines push the raw line sub-score over 1.0 before the
        // final clamp.
        let eval = SimplicityEvaluator::default().evaluate("a\nb\nc\n");
        assert!((0.0..=1.0).contains(&eval.score));
    }
}
