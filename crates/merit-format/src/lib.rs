//! # merit-format
//!
//! Rendering and serialization of merit score reports.
//!
//! ## What belongs here
//! * Markdown and plain-text table rendering
//! * JSON receipt serialization
//! * Ledger report rendering
//!
//! ## What does NOT belong here
//! * Scoring logic (use merit-metrics)
//! * CLI arg parsing

#![forbid(unsafe_code)]

use std::fmt::Write as _;

use anyhow::Result;

use merit_registry::Ledger;
use merit_types::{FileScore, ScoreReport};

/// Render a score report as Markdown, one section per file.
#[must_use]
pub fn render_score_md(report: &ScoreReport) -> String {
    let mut s = String::new();

    for file in &report.files {
        let _ = writeln!(
            s,
            "## {} ({} bytes, {} lines)",
            file.path, file.bytes, file.lines
        );
        s.push('\n');
        s.push_str("|Metric|Score|Rationale|\n");
        s.push_str("|---|---:|---|\n");
        for eval in file.evaluations.iter() {
            let _ = writeln!(s, "|{}|{:.2}|{}|", eval.kind, eval.score, eval.rationale);
        }
        s.push('\n');
        let _ = writeln!(
            s,
            "**Composite**: {:.4} ({})",
            file.composite, file.grade
        );
        if let Some(credit) = file.credit {
            let _ = writeln!(s, "**Credit**: {credit:.8}");
        }
        s.push('\n');
    }

    if !report.warnings.is_empty() {
        s.push_str("### Warnings\n\n");
        for warning in &report.warnings {
            let _ = writeln!(s, "- {warning}");
        }
    }

    s
}

/// Render a score report as aligned plain text.
#[must_use]
pub fn render_score_text(report: &ScoreReport) -> String {
    let mut s = String::new();

    for file in &report.files {
        let _ = writeln!(
            s,
            "{} ({} bytes, {} lines)",
            file.path, file.bytes, file.lines
        );
        for eval in file.evaluations.iter() {
            let _ = writeln!(
                s,
                "  {:<14}{:>5.2}  {}",
                eval.kind.name(),
                eval.score,
                eval.rationale
            );
        }
        let _ = writeln!(s, "  {:<14}{:.4} ({})", "composite", file.composite, file.grade);
        if let Some(credit) = file.credit {
            let _ = writeln!(s, "  {:<14}{credit:.8}", "credit");
        }
        s.push('\n');
    }

    for warning in &report.warnings {
        let _ = writeln!(s, "warning: {warning}");
    }

    s
}

/// Serialize a score report as a single-line JSON receipt.
pub fn render_score_json(report: &ScoreReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

/// Render contributor balances as plain text, in contributor order.
#[must_use]
pub fn render_ledger_text(ledger: &Ledger) -> String {
    let mut s = String::from("Credit balances\n");
    for (contributor, total) in ledger.balances() {
        let _ = writeln!(s, "  {contributor}: {total:.8}");
    }
    let _ = writeln!(s, "Total: {:.8}", ledger.grand_total());
    s
}

/// Summarize one file's score for terse output.
#[must_use]
pub fn render_score_line(file: &FileScore) -> String {
    format!("{}: {:.4} ({})", file.path, file.composite, file.grade)
}
