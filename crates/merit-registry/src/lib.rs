//! # merit-registry
//!
//! Bookkeeping around the scoring engine: registered code contributions
//! keyed by file and line range, and a per-contributor credit ledger.
//!
//! The registry stores one [`EvaluationSet`] per contribution, produced
//! externally by the scorer; contributions never hold partial metric sets.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use thiserror::Error;

use merit_types::EvaluationSet;

/// Errors from contribution and ledger bookkeeping.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Contribution field '{0}' cannot be empty")]
    EmptyField(&'static str),

    #[error("Start line {start} is past end line {end}")]
    InvalidRange { start: usize, end: usize },

    #[error("A contribution already covers {file} lines {start}-{end}")]
    OverlappingRange {
        file: String,
        start: usize,
        end: usize,
    },

    #[error("Credit amount must be positive, got {0}")]
    NonPositiveAmount(f64),
}

/// Stable identifier for a scored fragment: a 16-hex-char blake3 prefix.
#[must_use]
pub fn fragment_id(code: &str) -> String {
    let hash = blake3::hash(code.as_bytes()).to_hex().to_string();
    hash[..16].to_string()
}

/// Credit owed for one contribution: composite score times line count
/// times the externally supplied per-line rate.
#[must_use]
pub fn credit_amount(composite: f64, line_count: usize, rate: f64) -> f64 {
    composite * line_count as f64 * rate
}

/// One contributor's code range in one file, with its metric evaluations
/// once scored.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    contributor: String,
    file_id: String,
    line_start: usize,
    line_end: usize,
    evaluations: Option<EvaluationSet>,
}

impl Contribution {
    /// Validates that names are non-empty and the range is ordered.
    pub fn new(
        contributor: impl Into<String>,
        file_id: impl Into<String>,
        line_start: usize,
        line_end: usize,
    ) -> Result<Self, RegistryError> {
        let contributor = contributor.into();
        let file_id = file_id.into();
        if contributor.is_empty() {
            return Err(RegistryError::EmptyField("contributor"));
        }
        if file_id.is_empty() {
            return Err(RegistryError::EmptyField("file_id"));
        }
        if line_start > line_end {
            return Err(RegistryError::InvalidRange {
                start: line_start,
                end: line_end,
            });
        }
        Ok(Self {
            contributor,
            file_id,
            line_start,
            line_end,
            evaluations: None,
        })
    }

    #[must_use]
    pub fn contributor(&self) -> &str {
        &self.contributor
    }

    #[must_use]
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    #[must_use]
    pub fn line_range(&self) -> (usize, usize) {
        (self.line_start, self.line_end)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_end - self.line_start + 1
    }

    /// Attach (or replace) the full evaluation set for this contribution.
    ///
    /// The set is atomic, so a replacement can never leave a partial or
    /// duplicated metric behind.
    pub fn set_evaluations(&mut self, evaluations: EvaluationSet) {
        self.evaluations = Some(evaluations);
    }

    #[must_use]
    pub fn evaluations(&self) -> Option<&EvaluationSet> {
        self.evaluations.as_ref()
    }

    /// Composite value of this contribution; 0.0 until evaluated.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.evaluations.as_ref().map_or(0.0, EvaluationSet::composite)
    }

    fn overlaps(&self, other: &Contribution) -> bool {
        self.file_id == other.file_id
            && self.line_start <= other.line_end
            && other.line_start <= self.line_end
    }
}

/// Registered contributions with per-file overlap protection.
#[derive(Debug, Default)]
pub struct Registry {
    contributions: Vec<Contribution>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a contribution, rejecting any line-range overlap with an
    /// existing contribution in the same file.
    pub fn register(&mut self, contribution: Contribution) -> Result<(), RegistryError> {
        if let Some(existing) = self
            .contributions
            .iter()
            .find(|c| c.overlaps(&contribution))
        {
            let (start, end) = existing.line_range();
            return Err(RegistryError::OverlappingRange {
                file: existing.file_id.clone(),
                start,
                end,
            });
        }
        self.contributions.push(contribution);
        Ok(())
    }

    #[must_use]
    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    #[must_use]
    pub fn contributions_mut(&mut self) -> &mut [Contribution] {
        &mut self.contributions
    }
}

/// Accumulated credit per contributor.
///
/// Backed by a `BTreeMap` so report iteration is deterministic.
#[derive(Debug, Default)]
pub struct Ledger {
    credits: BTreeMap<String, f64>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a credit; amounts must be positive.
    pub fn record(
        &mut self,
        contributor: impl Into<String>,
        amount: f64,
    ) -> Result<(), RegistryError> {
        if amount <= 0.0 {
            return Err(RegistryError::NonPositiveAmount(amount));
        }
        *self.credits.entry(contributor.into()).or_insert(0.0) += amount;
        Ok(())
    }

    /// Total credited to one contributor; 0.0 when unknown.
    #[must_use]
    pub fn total_for(&self, contributor: &str) -> f64 {
        self.credits.get(contributor).copied().unwrap_or(0.0)
    }

    /// All balances in contributor order.
    pub fn balances(&self) -> impl Iterator<Item = (&str, f64)> {
        self.credits.iter().map(|(name, total)| (name.as_str(), *total))
    }

    /// Sum across all contributors.
    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.credits.values().sum()
    }
}
