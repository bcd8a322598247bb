//! Creditability: evidence of testing, documentation, and references.

use std::sync::LazyLock;

use regex::Regex;

use merit_math::{clamp01, saturating_score};
use merit_scan::count_regex;
use merit_types::{MetricEvaluation, MetricKind};

use crate::MetricEvaluator;

static TEST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(test|assert|expect|should|mock|stub|spy)\b").expect("valid regex literal")
});

static DOC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(param|return|throws?|see|link|since|version|author|deprecated)")
        .expect("valid regex literal")
});

static REF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(http|https)://[^\s"'<>]+|(RFC|IEEE|ISO)[- ][0-9]+"#)
        .expect("valid regex literal")
});

/// Scores the evidence that a fragment does what its surroundings require:
/// test vocabulary, doc tags, and references to external standards.
#[derive(Debug, Clone)]
pub struct CreditabilityEvaluator {
    /// Test-indicator count at which that sub-score saturates.
    pub tests_saturation: f64,
    /// Doc-tag count at which that sub-score saturates.
    pub docs_saturation: f64,
    /// Reference count at which that sub-score saturates.
    pub refs_saturation: f64,
}

impl Default for CreditabilityEvaluator {
    fn default() -> Self {
        Self {
            tests_saturation: 5.0,
            docs_saturation: 10.0,
            refs_saturation: 2.0,
        }
    }
}

impl MetricEvaluator for CreditabilityEvaluator {
    fn kind(&self) -> MetricKind {
        MetricKind::Creditability
    }

    fn describe(&self) -> &'static str {
        "Measures evidence that technique is compatible with architecture requirements."
    }

    fn evaluate(&self, code: &str) -> MetricEvaluation {
        let tests = count_regex(code, &TEST_PATTERN);
        let docs = count_regex(code, &DOC_PATTERN);
        let refs = count_regex(code, &REF_PATTERN);

        let score = clamp01(
            0.4 * saturating_score(tests, self.tests_saturation)
                + 0.4 * saturating_score(docs, self.docs_saturation)
                + 0.2 * saturating_score(refs, self.refs_saturation),
        );

        MetricEvaluation::new(
            self.kind(),
            score,
            format!(
                "Creditability score based on evidence of testing ({tests}), documentation ({docs}), and references ({refs})."
            ),
        )
    }
}
