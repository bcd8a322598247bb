//! # merit-config
//!
//! CLI argument and configuration file structures for the `merit` binary.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations (the binary loads the config file)

#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Default per-file input cap: 1 MB. Larger files are rejected before the
/// scoring engine sees them.
pub const DEFAULT_MAX_FILE_BYTES: usize = 1_048_576;

/// `merit` scores source files on six quality metrics and derives
/// contributor credit from the composite.
#[derive(Parser, Debug)]
#[command(name = "merit", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration profile to use (e.g., "ci").
    #[arg(long, global = true)]
    pub profile: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one or more source files.
    Score(ScoreArgs),
    /// List the six metrics and what each one measures.
    Metrics,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Files to score.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Skip files larger than this many bytes (default: 1048576).
    #[arg(long, value_name = "BYTES")]
    pub max_file_bytes: Option<usize>,

    /// Per-line credit rate; when set, each file's report carries a credit
    /// amount (composite x lines x rate).
    #[arg(long, value_name = "RATE")]
    pub rate: Option<f64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown tables.
    Md,
    /// Aligned plain text.
    Text,
    /// Single-line JSON receipt.
    Json,
}

/// User configuration file (`config.json` under the platform config dir).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub profiles: BTreeMap<String, Profile>,
}

/// One named defaults profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub format: Option<OutputFormat>,
    pub rate: Option<f64>,
    pub max_file_bytes: Option<usize>,
}

impl UserConfig {
    /// Look up a profile, defaulting to the `default` entry.
    #[must_use]
    pub fn profile(&self, name: Option<&str>) -> Option<&Profile> {
        self.profiles.get(name.unwrap_or("default"))
    }
}
