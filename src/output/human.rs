#![forbid(unsafe_code)]

//! Human-readable bump report

use super::BumpReport;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Writes `[project]` followed by `<file> updated: old -> new`
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write the report, coloring the versions when the writer supports it
    pub fn write(&self, out: &mut impl WriteColor, report: &BumpReport) -> io::Result<()> {
        let file_name = report
            .descriptor
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| report.descriptor.display().to_string());

        writeln!(out, "[{}]", report.project.display())?;
        write!(out, "{} updated: ", file_name)?;

        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(out, "{}", report.previous)?;
        out.reset()?;
        write!(out, " -> ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(out, "{}", report.next)?;
        out.reset()?;
        writeln!(out)
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}
