//! Impact: call and control-flow density of a fragment.

use std::sync::LazyLock;

use regex::Regex;

use merit_math::clamp01;
use merit_scan::count_regex;
use merit_types::{MetricEvaluation, MetricKind};

use crate::MetricEvaluator;

static CALL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\s*\(").expect("valid regex literal"));

static CONTROL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(if|for|while|switch)\s*\(").expect("valid regex literal"));

/// Scores how much a fragment drives the surrounding program, measured by
/// the density of call-like tokens and control structures.
///
/// Control keywords also match the call pattern, so they count twice; the
/// saturation threshold was calibrated with that in mind.
#[derive(Debug, Clone)]
pub struct ImpactEvaluator {
    /// Combined count at which the score saturates to 1.0.
    pub expected_count: f64,
}

impl Default for ImpactEvaluator {
    fn default() -> Self {
        Self {
            expected_count: 20.0,
        }
    }
}

impl MetricEvaluator for ImpactEvaluator {
    fn kind(&self) -> MetricKind {
        MetricKind::Impact
    }

    fn describe(&self) -> &'static str {
        "Measures the gravity effect towards a particular line in the overall function of the program."
    }

    fn evaluate(&self, code: &str) -> MetricEvaluation {
        let calls = count_regex(code, &CALL_PATTERN);
        let controls = count_regex(code, &CONTROL_PATTERN);

        let raw = (calls + controls) as f64 / self.expected_count;
        let score = clamp01(raw);

        MetricEvaluation::new(
            self.kind(),
            score,
            format!(
                "Impact score based on {calls} function calls and {controls} control structures."
            ),
        )
    }
}
