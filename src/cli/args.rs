// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "sanctuary-stats",
    version,
    about = "Summarize smart-contract submission collections as a Markdown report"
)]
pub struct Args {
    /// Report plan file (YAML or JSON) replacing the built-in sanctuary layout
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Plan")]
    pub config: Option<PathBuf>,

    /// Base directory for relative group paths
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath, help_heading = "Plan")]
    pub root: PathBuf,

    /// Source-unit file extension (without the dot)
    #[arg(long, help_heading = "Plan")]
    pub extension: Option<String>,

    /// File name of the structured log inside each group directory
    #[arg(long, help_heading = "Plan")]
    pub log_name: Option<String>,

    /// Convert `date_created` timestamps using the UTC calendar date
    #[arg(long, help_heading = "Plan")]
    pub utc: bool,

    /// Only report these networks (repeatable, case-insensitive)
    #[arg(long = "network", value_name = "NAME", help_heading = "Plan")]
    pub networks: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = CliOutputFormat::Markdown, help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
