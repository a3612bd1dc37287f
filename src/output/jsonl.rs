#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! A bump produces exactly one record.

use super::BumpReport;
use crate::types::BumpLevel;
use serde::Serialize;
use std::path::PathBuf;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the report as a single JSON line, newline included
    ///
    /// A report that cannot be serialized produces no output.
    pub fn format(&self, report: &BumpReport) -> String {
        let record = BumpRecord {
            record_type: "bump",
            project: report.project.clone(),
            descriptor: report.descriptor.clone(),
            previous: report.previous.clone(),
            next: report.next.clone(),
            level: report.level,
            keep_suffix: report.keep_suffix,
        };

        let mut output = String::new();
        if let Ok(json) = serde_json::to_string(&record) {
            output.push_str(&json);
            output.push('\n');
        }
        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct BumpRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    project: PathBuf,
    descriptor: PathBuf,
    previous: String,
    next: String,
    level: Option<BumpLevel>,
    keep_suffix: bool,
}
