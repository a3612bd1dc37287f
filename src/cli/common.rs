//! Helpers shared by the CLI entry points
//!
//! Exit codes, terminal color selection, and error reporting.

use super::args::ColorChoice;
use crate::error::PomBumpError;
use std::io::{IsTerminal, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Map a CLI color choice onto termcolor for a stream
///
/// `auto` turns color off when the stream is not a terminal.
pub(crate) fn color_choice(choice: ColorChoice, is_terminal: bool) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if is_terminal => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}

pub(crate) fn stdout(choice: ColorChoice) -> StandardStream {
    StandardStream::stdout(color_choice(choice, std::io::stdout().is_terminal()))
}

pub(crate) fn stderr(choice: ColorChoice) -> StandardStream {
    StandardStream::stderr(color_choice(choice, std::io::stderr().is_terminal()))
}

/// Exit code for a failed run
pub(crate) fn exit_code_for(err: &PomBumpError) -> i32 {
    match err {
        PomBumpError::Version(_) => EXIT_PARSE_ERROR,
        PomBumpError::Descriptor(_) => EXIT_ERROR,
    }
}

/// Write `Error: <message>` with a colored prefix
pub(crate) fn write_error(out: &mut impl WriteColor, err: &PomBumpError) -> std::io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "Error:")?;
    out.reset()?;
    writeln!(out, " {}", err)
}

/// Report an error on stderr and return its exit code
pub(crate) fn report_error(err: &PomBumpError, color: ColorChoice) -> i32 {
    let mut stream = stderr(color);
    if write_error(&mut stream, err).is_err() {
        eprintln!("Error: {}", err);
    }
    exit_code_for(err)
}
