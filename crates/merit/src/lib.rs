//! # merit
//!
//! **CLI Binary**
//!
//! Entry point for the `merit` command-line application. It wires the
//! other crates together: read inputs, enforce the size cap, score, render.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load configuration
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use rayon::prelude::*;

use merit_config as cli;
use merit_config::{Cli, Commands, OutputFormat, ScoreArgs, UserConfig};
use merit_format as format;
use merit_metrics::{Scorer, all_evaluators};
use merit_registry::credit_amount;
use merit_types::{FileScore, Grade, MetricError, ScoreReport, SCHEMA_VERSION, ToolInfo};

fn load_config() -> Option<UserConfig> {
    let config_dir = dirs::config_dir()?.join("merit");
    let config_path = config_dir.join("config.json");

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&content).ok()
    } else {
        None
    }
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "merit".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Entry point used by the `merit` binary.
pub fn run() -> Result<()> {
    let args = Cli::parse();
    let config = load_config();
    let profile = config
        .as_ref()
        .and_then(|c| c.profile(args.profile.as_deref()));

    match args.command {
        Commands::Score(score_args) => {
            let resolved = resolve_score(&score_args, profile);
            cmd_score(&resolved)
        }
        Commands::Metrics => {
            cmd_metrics();
            Ok(())
        }
    }
}

/// Render a top-level error for the terminal.
#[must_use]
pub fn format_error(err: &anyhow::Error) -> String {
    format!("error: {err:#}")
}

/// Effective score options after CLI flags and profile defaults merge.
#[derive(Debug, Clone)]
pub struct ResolvedScoreArgs {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub max_file_bytes: usize,
    pub rate: Option<f64>,
}

pub fn resolve_score(
    args: &ScoreArgs,
    profile: Option<&cli::Profile>,
) -> ResolvedScoreArgs {
    ResolvedScoreArgs {
        paths: args.paths.clone(),
        format: args
            .format
            .or_else(|| profile.and_then(|p| p.format))
            .unwrap_or(OutputFormat::Md),
        max_file_bytes: args
            .max_file_bytes
            .or_else(|| profile.and_then(|p| p.max_file_bytes))
            .unwrap_or(cli::DEFAULT_MAX_FILE_BYTES),
        rate: args.rate.or_else(|| profile.and_then(|p| p.rate)),
    }
}

/// One readable input, already under the size cap.
#[derive(Debug)]
struct Input {
    path: String,
    bytes: usize,
    text: String,
}

fn read_input(path: &Path, max_bytes: usize) -> Result<Input> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if bytes.len() > max_bytes {
        return Err(MetricError::InputTooLarge {
            bytes: bytes.len(),
            limit: max_bytes,
        }
        .into());
    }
    Ok(Input {
        path: path.display().to_string(),
        bytes: bytes.len(),
        text: String::from_utf8_lossy(&bytes).to_string(),
    })
}

fn cmd_score(args: &ResolvedScoreArgs) -> Result<()> {
    let mut inputs: Vec<Input> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    for path in &args.paths {
        match read_input(path, args.max_file_bytes) {
            Ok(input) => inputs.push(input),
            Err(err) => warnings.push(format!("skipped {}: {err:#}", path.display())),
        }
    }

    if inputs.is_empty() {
        for warning in &warnings {
            eprintln!("warning: {warning}");
        }
        bail!("no readable inputs among {} path(s)", args.paths.len());
    }

    // Files are independent, so scoring fans out across them; the scorer
    // itself is sequential per input and results do not depend on this.
    let mut files: Vec<FileScore> = inputs
        .par_iter()
        .map(|input| {
            let scorer = Scorer::new();
            let evaluations = scorer.evaluate_all(&input.text);
            let composite = evaluations.composite();
            let credit = args
                .rate
                .map(|rate| credit_amount(composite, input.text.lines().count(), rate));
            FileScore {
                path: input.path.clone(),
                bytes: input.bytes,
                lines: input.text.lines().count(),
                evaluations,
                composite,
                grade: Grade::from_score(composite),
                credit,
            }
        })
        .collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));

    let report = ScoreReport {
        schema_version: SCHEMA_VERSION,
        tool: tool_info(),
        warnings,
        files,
    };

    match args.format {
        OutputFormat::Md => print!("{}", format::render_score_md(&report)),
        OutputFormat::Text => print!("{}", format::render_score_text(&report)),
        OutputFormat::Json => println!("{}", format::render_score_json(&report)?),
    }
    Ok(())
}

fn cmd_metrics() {
    for evaluator in all_evaluators() {
        println!("{:<14}{}", evaluator.kind().name(), evaluator.describe());
    }
}
