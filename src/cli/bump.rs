//! Bump command implementation
//!
//! One run reads the descriptor, parses its version, computes the next
//! version, and writes the descriptor back. Nothing is written unless every
//! earlier step succeeds.

use super::args::{Cli, OutputFormat};
use super::common::{self, EXIT_SUCCESS};
use crate::config::BumpRequest;
use crate::descriptor::{Descriptor, PomDocument};
use crate::error::PomBumpError;
use crate::output::{BumpReport, HumanFormatter, JsonlFormatter};
use crate::types::{BumpLevel, SemanticVersion};
use crate::version::{next_version, parse_version};
use std::io::Write;
use termcolor::WriteColor;

/// Versions before and after a bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    /// Version text exactly as it appeared in the descriptor
    pub previous_text: String,
    pub previous: SemanticVersion,
    pub next: SemanticVersion,
}

/// Run the bump command for parsed CLI arguments
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Descriptor error (missing file, malformed XML, missing version)
/// - 3: Version string could not be parsed or bumped
pub fn run_bump(cli: &Cli) -> i32 {
    let request = cli.request();
    match bump_project(&request) {
        Ok(report) => {
            if cli.verbose
                && let Err(e) = print_report(cli, &report)
            {
                return common::report_error(&PomBumpError::from(e), cli.color);
            }
            EXIT_SUCCESS
        }
        Err(e) => common::report_error(&e, cli.color),
    }
}

/// Bump the descriptor a request points at and write it back
///
/// # Errors
///
/// Returns the first error hit; the descriptor is left untouched unless the
/// final write itself fails.
pub fn bump_project(request: &BumpRequest) -> Result<BumpReport, PomBumpError> {
    let descriptor_path = request.descriptor_path();
    let mut document = PomDocument::load(&descriptor_path)?;

    let outcome = apply_bump(&mut document, request.level, request.keep_suffix)?;
    document.write(&descriptor_path)?;

    Ok(BumpReport {
        project: request.project_path.clone(),
        descriptor: descriptor_path,
        previous: outcome.previous_text,
        next: outcome.next.to_string(),
        level: request.level,
        keep_suffix: request.keep_suffix,
    })
}

/// Bump the version held by any descriptor, in memory
///
/// Whitespace trailing the version text (a line break before the closing
/// tag) is written back after the new version.
pub fn apply_bump<D: Descriptor>(
    document: &mut D,
    level: Option<BumpLevel>,
    keep_suffix: bool,
) -> Result<BumpOutcome, PomBumpError> {
    let previous_text = document.version_text()?.to_string();
    let previous = parse_version(&previous_text)?;
    let next = next_version(&previous, level, keep_suffix)?;

    let trailing = &previous_text[previous_text.trim_end().len()..];
    document.set_version_text(&format!("{}{}", next, trailing))?;

    Ok(BumpOutcome {
        previous_text,
        previous,
        next,
    })
}

fn print_report(cli: &Cli, report: &BumpReport) -> std::io::Result<()> {
    let mut stdout = common::stdout(cli.color);
    write_report(&mut stdout, cli.format, report)
}

fn write_report(
    out: &mut impl WriteColor,
    format: OutputFormat,
    report: &BumpReport,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => HumanFormatter::new().write(out, report),
        OutputFormat::Jsonl => {
            let line = JsonlFormatter::new().format(report);
            out.write_all(line.as_bytes())
        }
    }
}
