//! CLI argument parsing using clap

use crate::config::BumpRequest;
use crate::types::BumpLevel;
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the bump report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// Bump level flags; clap rejects more than one
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(multiple = false)]
pub struct LevelFlags {
    /// Patch update, according to semantic versioning
    #[arg(short = 'p', long)]
    pub patch: bool,

    /// Minor update, according to semantic versioning
    #[arg(short = 'm', long)]
    pub minor: bool,

    /// Major update, according to semantic versioning
    #[arg(short = 'M', long)]
    pub major: bool,
}

impl LevelFlags {
    /// Collapse the flag group into a single optional level
    pub fn level(&self) -> Option<BumpLevel> {
        match (self.patch, self.minor, self.major) {
            (true, _, _) => Some(BumpLevel::Patch),
            (_, true, _) => Some(BumpLevel::Minor),
            (_, _, true) => Some(BumpLevel::Major),
            _ => None,
        }
    }
}

/// pombump CLI entry point
#[derive(Parser, Debug)]
#[command(name = "pombump")]
#[command(about = "Bump the version declared in a Maven pom.xml")]
#[command(version)]
pub struct Cli {
    /// Project directory containing pom.xml, or the descriptor file itself
    #[arg(value_name = "PROJECT_PATH", default_value = ".")]
    pub project_path: PathBuf,

    #[command(flatten)]
    pub level: LevelFlags,

    /// Close the version for release (remove the suffix)
    #[arg(short = 'c', long)]
    pub close_version: bool,

    /// Print the old and new versions
    #[arg(short, long)]
    pub verbose: bool,

    /// Report format used with --verbose
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Output coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// Build the bump request described by these arguments
    pub fn request(&self) -> BumpRequest {
        BumpRequest::new(self.project_path.clone())
            .with_level(self.level.level())
            .with_keep_suffix(!self.close_version)
    }
}
