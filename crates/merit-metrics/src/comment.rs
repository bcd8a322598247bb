//! Comment: density and word count of explanatory text.

use merit_math::{clamp01, peak_score, safe_div};
use merit_scan::is_blank;
use merit_types::{MetricEvaluation, MetricKind};

use crate::MetricEvaluator;

/// Scores commenting habits: density near an ideal ratio and comments long
/// enough to explain something.
#[derive(Debug, Clone)]
pub struct CommentEvaluator {
    /// Comment-line ratio at which the density sub-score peaks.
    pub ideal_density: f64,
    /// Average words per comment at which the length sub-score saturates.
    pub words_saturation: f64,
    /// Weight of the density sub-score.
    pub density_weight: f64,
    /// Weight of the length sub-score.
    pub length_weight: f64,
}

impl Default for CommentEvaluator {
    fn default() -> Self {
        Self {
            ideal_density: 0.3,
            words_saturation: 8.0,
            density_weight: 0.6,
            length_weight: 0.4,
        }
    }
}

impl MetricEvaluator for CommentEvaluator {
    fn kind(&self) -> MetricKind {
        MetricKind::Comment
    }

    fn describe(&self) -> &'static str {
        "Measures quality of non-opinionated statements with no syntactic sugar."
    }

    fn evaluate(&self, code: &str) -> MetricEvaluation {
        let mut total_lines = 0usize;
        let mut comment_lines = 0usize;
        let mut comments: Vec<&str> = Vec::new();
        let mut in_block = false;

        for line in code.lines() {
            total_lines += 1;
            if is_blank(line) {
                continue;
            }

            if in_block {
                comment_lines += 1;
                comments.push(line);
                if line.contains("*/") {
                    in_block = false;
                }
            } else if let Some(start) = line.find("/*") {
                comment_lines += 1;
                comments.push(&line[start..]);
                // Stay out of block mode only when the closer follows the
                // opener on the same line.
                in_block = !matches!(line.find("*/"), Some(end) if end > start);
            } else if let Some(pos) = line.find("//") {
                comment_lines += 1;
                comments.push(&line[pos + 2..]);
            }
        }

        // Blank lines count toward the density denominator.
        let density = safe_div(comment_lines as f64, total_lines as f64, 0.0);

        let words: usize = comments.iter().map(|c| c.split_whitespace().count()).sum();
        let avg_words = safe_div(words as f64, comments.len() as f64, 0.0);

        let density_score = peak_score(density, self.ideal_density);
        let length_score = (avg_words / self.words_saturation).min(1.0);

        let score = clamp01(
            density_score * self.density_weight + length_score * self.length_weight,
        );

        MetricEvaluation::new(
            self.kind(),
            score,
            format!(
                "Comment score based on density ({:.1}%) and average length ({avg_words:.1} words).",
                density * 100.0
            ),
        )
    }
}
