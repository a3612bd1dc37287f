//! Output formatters (human and JSONL)

pub mod human;
pub mod jsonl;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;

use crate::types::BumpLevel;
use std::path::PathBuf;

/// Outcome of a successful bump, as reported with `--verbose`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpReport {
    pub project: PathBuf,
    pub descriptor: PathBuf,
    pub previous: String,
    pub next: String,
    pub level: Option<BumpLevel>,
    pub keep_suffix: bool,
}
