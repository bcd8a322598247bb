//! # merit-types
//!
//! Pure data structures for the merit scoring engine. No I/O or scoring
//! logic.
//!
//! ## What belongs here
//! * The closed `MetricKind` enumeration and its canonical order
//! * Evaluation value types and the six-slot `EvaluationSet`
//! * Qualitative grading of composite scores
//! * Receipt types for rendered/serialized reports
//!
//! ## What does NOT belong here
//! * Scoring computation (use merit-metrics)
//! * Rendering (use merit-format)

#![forbid(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schema version for score receipts.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors from the scoring data contract.
///
/// Evaluators themselves never fail on input shape; these cover programmer
/// errors (unknown kind names, malformed sets) and caller-enforced limits.
#[derive(Debug, Error)]
pub enum MetricError {
    #[error("Unknown metric kind: {0}")]
    UnknownKind(String),

    #[error("Duplicate evaluation for metric kind {0}")]
    DuplicateKind(MetricKind),

    #[error("Missing evaluation for metric kind {0}")]
    MissingKind(MetricKind),

    #[error("Input is {bytes} bytes, over the {limit} byte limit")]
    InputTooLarge { bytes: usize, limit: usize },
}

/// The six quality metrics. A closed set, never extended at runtime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Gravity effect of the fragment on the surrounding program.
    Impact,
    /// Purity of syntactic, semantic, and pragmatic quality.
    Simplicity,
    /// Proper formatting and notation.
    Cleanness,
    /// Quality of non-opinionated explanatory statements.
    Comment,
    /// Evidence that the technique matches its requirements.
    Creditability,
    /// Creative approach to problem-solving.
    Novelty,
}

impl MetricKind {
    /// Canonical enumeration order, used for `EvaluationSet` slots and all
    /// rendered output.
    pub const ALL: [MetricKind; 6] = [
        MetricKind::Impact,
        MetricKind::Simplicity,
        MetricKind::Cleanness,
        MetricKind::Comment,
        MetricKind::Creditability,
        MetricKind::Novelty,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Impact => "impact",
            MetricKind::Simplicity => "simplicity",
            MetricKind::Cleanness => "cleanness",
            MetricKind::Comment => "comment",
            MetricKind::Creditability => "creditability",
            MetricKind::Novelty => "novelty",
        }
    }

    /// Parse a kind from its lowercase name.
    ///
    /// This is the only hard failure in the core contract.
    pub fn from_name(name: &str) -> Result<Self, MetricError> {
        match name {
            "impact" => Ok(MetricKind::Impact),
            "simplicity" => Ok(MetricKind::Simplicity),
            "cleanness" => Ok(MetricKind::Cleanness),
            "comment" => Ok(MetricKind::Comment),
            "creditability" => Ok(MetricKind::Creditability),
            "novelty" => Ok(MetricKind::Novelty),
            other => Err(MetricError::UnknownKind(other.to_string())),
        }
    }

    /// Slot index in [`MetricKind::ALL`].
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            MetricKind::Impact => 0,
            MetricKind::Simplicity => 1,
            MetricKind::Cleanness => 2,
            MetricKind::Comment => 3,
            MetricKind::Creditability => 4,
            MetricKind::Novelty => 5,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One metric's verdict for one code fragment.
///
/// Immutable once produced; the score is clamped into `[0.0, 1.0]` at
/// construction and the rationale embeds the raw counts that drove it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEvaluation {
    pub kind: MetricKind,
    pub score: f64,
    pub rationale: String,
}

impl MetricEvaluation {
    /// Build an evaluation, clamping `score` into `[0.0, 1.0]`.
    #[must_use]
    pub fn new(kind: MetricKind, score: f64, rationale: String) -> Self {
        Self {
            kind,
            score: score.clamp(0.0, 1.0),
            rationale,
        }
    }
}

/// Exactly one evaluation per [`MetricKind`], in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EvaluationSet {
    evaluations: Vec<MetricEvaluation>,
}

// Deserialization must uphold the one-per-kind invariant, so it routes
// through the validating constructor instead of a derive.
impl<'de> Deserialize<'de> for EvaluationSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let evaluations = Vec::<MetricEvaluation>::deserialize(deserializer)?;
        EvaluationSet::from_evaluations(evaluations).map_err(serde::de::Error::custom)
    }
}

impl EvaluationSet {
    /// Assemble a set from evaluations in any order.
    ///
    /// Rejects duplicate and missing kinds; the stored order is always
    /// [`MetricKind::ALL`].
    pub fn from_evaluations(
        evaluations: Vec<MetricEvaluation>,
    ) -> Result<Self, MetricError> {
        let mut slots: [Option<MetricEvaluation>; 6] = Default::default();
        for eval in evaluations {
            let idx = eval.kind.index();
            if slots[idx].is_some() {
                return Err(MetricError::DuplicateKind(eval.kind));
            }
            slots[idx] = Some(eval);
        }
        let mut ordered = Vec::with_capacity(6);
        for (slot, kind) in slots.into_iter().zip(MetricKind::ALL) {
            match slot {
                Some(eval) => ordered.push(eval),
                None => return Err(MetricError::MissingKind(kind)),
            }
        }
        Ok(Self {
            evaluations: ordered,
        })
    }

    #[must_use]
    pub fn get(&self, kind: MetricKind) -> &MetricEvaluation {
        &self.evaluations[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricEvaluation> {
        self.evaluations.iter()
    }

    /// Arithmetic mean of the six scores.
    #[must_use]
    pub fn composite(&self) -> f64 {
        if self.evaluations.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.evaluations.iter().map(|e| e.score).sum();
        sum / self.evaluations.len() as f64
    }
}

/// Qualitative label bucketed from a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Exceptional,
    Excellent,
    VeryGood,
    Good,
    Fair,
    Marginal,
    Weak,
    Poor,
}

impl Grade {
    /// Bucket thresholds: 0.9 / 0.8 / 0.7 / 0.6 / 0.5 / 0.4 / 0.3.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Grade::Exceptional
        } else if score >= 0.8 {
            Grade::Excellent
        } else if score >= 0.7 {
            Grade::VeryGood
        } else if score >= 0.6 {
            Grade::Good
        } else if score >= 0.5 {
            Grade::Fair
        } else if score >= 0.4 {
            Grade::Marginal
        } else if score >= 0.3 {
            Grade::Weak
        } else {
            Grade::Poor
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Exceptional => "exceptional",
            Grade::Excellent => "excellent",
            Grade::VeryGood => "very good",
            Grade::Good => "good",
            Grade::Fair => "fair",
            Grade::Marginal => "marginal",
            Grade::Weak => "weak",
            Grade::Poor => "poor",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies the tool that produced a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Scores for one input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileScore {
    pub path: String,
    pub bytes: usize,
    pub lines: usize,
    pub evaluations: EvaluationSet,
    pub composite: f64,
    pub grade: Grade,
    /// Credit amount for this file, when a rate was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<f64>,
}

/// Top-level score receipt for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub schema_version: u32,
    pub tool: ToolInfo,
    pub warnings: Vec<String>,
    pub files: Vec<FileScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(kind: MetricKind, score: f64) -> MetricEvaluation {
        MetricEvaluation::new(kind, score, format!("{kind} test rationale"))
    }

    fn full_set() -> Vec<MetricEvaluation> {
        MetricKind::ALL.iter().map(|k| eval(*k, 0.5)).collect()
    }

    #[test]
    fn evaluation_clamps_score() {
        assert_eq!(eval(MetricKind::Impact, 1.7).score, 1.0);
        assert_eq!(eval(MetricKind::Impact, -0.2).score, 0.0);
        assert_eq!(eval(MetricKind::Impact, 0.33).score, 0.33);
    }

    #[test]
    fn kind_round_trips_through_name() {
        for kind in MetricKind::ALL {
            assert_eq!(MetricKind::from_name(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_name_is_rejected() {
        let err = MetricKind::from_name("elegance").unwrap_err();
        assert!(matches!(err, MetricError::UnknownKind(_)));
    }

    #[test]
    fn set_reorders_into_canonical_order() {
        let mut evals = full_set();
        evals.reverse();
        let set = EvaluationSet::from_evaluations(evals).unwrap();
        let kinds: Vec<MetricKind> = set.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, MetricKind::ALL);
    }

    #[test]
    fn set_rejects_duplicate_kind() {
        let mut evals = full_set();
        evals[1] = eval(MetricKind::Impact, 0.9);
        let err = EvaluationSet::from_evaluations(evals).unwrap_err();
        assert!(matches!(err, MetricError::DuplicateKind(MetricKind::Impact)));
    }

    #[test]
    fn set_rejects_missing_kind() {
        let mut evals = full_set();
        evals.pop();
        let err = EvaluationSet::from_evaluations(evals).unwrap_err();
        assert!(matches!(err, MetricError::MissingKind(MetricKind::Novelty)));
    }

    #[test]
    fn composite_is_mean_of_scores() {
        let evals: Vec<MetricEvaluation> = MetricKind::ALL
            .iter()
            .enumerate()
            .map(|(i, k)| eval(*k, i as f64 / 10.0))
            .collect();
        let set = EvaluationSet::from_evaluations(evals).unwrap();
        // (0.0 + 0.1 + 0.2 + 0.3 + 0.4 + 0.5) / 6
        assert!((set.composite() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn grade_buckets_match_thresholds() {
        assert_eq!(Grade::from_score(0.95), Grade::Exceptional);
        assert_eq!(Grade::from_score(0.9), Grade::Exceptional);
        assert_eq!(Grade::from_score(0.85), Grade::Excellent);
        assert_eq!(Grade::from_score(0.7), Grade::VeryGood);
        assert_eq!(Grade::from_score(0.65), Grade::Good);
        assert_eq!(Grade::from_score(0.5), Grade::Fair);
        assert_eq!(Grade::from_score(0.45), Grade::Marginal);
        assert_eq!(Grade::from_score(0.3), Grade::Weak);
        assert_eq!(Grade::from_score(0.1), Grade::Poor);
    }

    #[test]
    fn set_serializes_as_plain_array() {
        let set = EvaluationSet::from_evaluations(full_set()).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with('['));
        let back: EvaluationSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
