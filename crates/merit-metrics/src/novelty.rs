//! Novelty: advanced language features, named design patterns, and
//! complexity annotations.

use std::sync::LazyLock;

use regex::Regex;

use merit_math::{clamp01, saturating_score};
use merit_scan::count_regex;
use merit_types::{MetricEvaluation, MetricKind};

use crate::MetricEvaluator;

static ADVANCED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(template|constexpr|decltype|concept|requires|noexcept|auto|lambda|fold|structured\s+binding)\b",
    )
    .expect("valid regex literal")
});

static DESIGN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(Factory|Builder|Singleton|Adapter|Bridge|Composite|Decorator|Facade|Proxy|Observer|Strategy|Command|State|Visitor|Interpreter|Iterator|Mediator|Memento|Prototype)\b",
    )
    .expect("valid regex literal")
});

static COMPLEXITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"O\([^)]*\)").expect("valid regex literal"));

/// Scores how adventurous a fragment is: advanced feature keywords, named
/// design patterns, and Big-O annotations.
#[derive(Debug, Clone)]
pub struct NoveltyEvaluator {
    /// Advanced-feature count at which that sub-score saturates.
    pub advanced_saturation: f64,
    /// Pattern-name count at which that sub-score saturates.
    pub patterns_saturation: f64,
    /// Complexity-annotation count at which that sub-score saturates.
    pub complexity_saturation: f64,
}

impl Default for NoveltyEvaluator {
    fn default() -> Self {
        Self {
            advanced_saturation: 3.0,
            patterns_saturation: 2.0,
            complexity_saturation: 1.0,
        }
    }
}

impl MetricEvaluator for NoveltyEvaluator {
    fn kind(&self) -> MetricKind {
        MetricKind::Novelty
    }

    fn describe(&self) -> &'static str {
        "Measures creative and exotic approach to problem-solving."
    }

    fn evaluate(&self, code: &str) -> MetricEvaluation {
        let advanced = count_regex(code, &ADVANCED_PATTERN);
        let patterns = count_regex(code, &DESIGN_PATTERN);
        let complexity = count_regex(code, &COMPLEXITY_PATTERN);

        let score = clamp01(
            0.4 * saturating_score(advanced, self.advanced_saturation)
                + 0.4 * saturating_score(patterns, self.patterns_saturation)
                + 0.2 * saturating_score(complexity, self.complexity_saturation),
        );

        MetricEvaluation::new(
            self.kind(),
            score,
            format!(
                "Novelty score based on advanced language features ({advanced}), design patterns ({patterns}), and algorithm analysis ({complexity})."
            ),
        )
    }
}
