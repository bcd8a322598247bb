//! # merit-metrics
//!
//! The six merit quality evaluators and the composite scorer.
//!
//! Each evaluator is an independent strategy over raw source text: a pure,
//! single-pass scan that produces a bounded score and a rationale embedding
//! the raw counts behind it. Evaluators never fail on malformed or empty
//! input; degenerate inputs get defined fallback scores.
//!
//! The set is closed. There is no runtime registration: [`evaluator_for`]
//! is a match over [`MetricKind`], and [`Scorer`] always holds exactly six
//! evaluators in canonical order.
//!
//! Scoring thresholds are calibration constants inherited from the
//! original valuation tables. They carry no empirical justification; they
//! are kept verbatim (as `Default` field values on each evaluator) so that
//! scores stay comparable across versions.

#![forbid(unsafe_code)]

mod cleanness;
mod comment;
mod creditability;
mod impact;
mod novelty;
mod simplicity;

pub use cleanness::CleannessEvaluator;
pub use comment::CommentEvaluator;
pub use creditability::CreditabilityEvaluator;
pub use impact::ImpactEvaluator;
pub use novelty::NoveltyEvaluator;
pub use simplicity::SimplicityEvaluator;

use merit_math::mean;
use merit_types::{EvaluationSet, MetricEvaluation, MetricKind};

/// Capability contract shared by the six evaluators.
///
/// Implementations hold no mutable state; `evaluate` is a pure function of
/// the input text, so a single instance may serve concurrent callers.
pub trait MetricEvaluator: Send + Sync {
    /// Which metric this evaluator produces.
    fn kind(&self) -> MetricKind;

    /// Static description of what the metric means.
    fn describe(&self) -> &'static str;

    /// Score one code fragment.
    fn evaluate(&self, code: &str) -> MetricEvaluation;
}

/// Construct the evaluator for one metric kind with default thresholds.
#[must_use]
pub fn evaluator_for(kind: MetricKind) -> Box<dyn MetricEvaluator> {
    match kind {
        MetricKind::Impact => Box::new(ImpactEvaluator::default()),
        MetricKind::Simplicity => Box::new(SimplicityEvaluator::default()),
        MetricKind::Cleanness => Box::new(CleannessEvaluator::default()),
        MetricKind::Comment => Box::new(CommentEvaluator::default()),
        MetricKind::Creditability => Box::new(CreditabilityEvaluator::default()),
        MetricKind::Novelty => Box::new(NoveltyEvaluator::default()),
    }
}

/// All six evaluators in [`MetricKind::ALL`] order.
#[must_use]
pub fn all_evaluators() -> Vec<Box<dyn MetricEvaluator>> {
    MetricKind::ALL.into_iter().map(evaluator_for).collect()
}

/// Runs the six evaluators over one input and reduces the results.
///
/// Holds no state between calls; evaluation order never affects results
/// because evaluators are independent pure functions.
pub struct Scorer {
    evaluators: Vec<Box<dyn MetricEvaluator>>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            evaluators: all_evaluators(),
        }
    }

    /// Evaluate all six metrics for one code fragment.
    ///
    /// The returned set enumerates in [`MetricKind::ALL`] order.
    #[must_use]
    pub fn evaluate_all(&self, code: &str) -> EvaluationSet {
        let evaluations: Vec<MetricEvaluation> =
            self.evaluators.iter().map(|e| e.evaluate(code)).collect();
        EvaluationSet::from_evaluations(evaluations)
            .expect("scorer holds exactly one evaluator per kind")
    }

    /// Arithmetic mean of the six metric scores; 0.0 for an empty
    /// evaluator list.
    #[must_use]
    pub fn composite_score(&self, code: &str) -> f64 {
        let scores: Vec<f64> = self
            .evaluators
            .iter()
            .map(|e| e.evaluate(code).score)
            .collect();
        mean(&scores)
    }
}
