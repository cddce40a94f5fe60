//! Handles all user-facing output for the CLI.
//!
//! This module is responsible for pretty-printing, colorizing output, and
//! generating JSON. By centralizing output logic here, we ensure a
//! consistent user experience across all commands.

use std::io::Write;

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::ReportError;
use crate::outcome::{RunSummary, TestOutcome};

fn color_choice(no_color: bool) -> ColorChoice {
    if no_color || !atty::is(atty::Stream::Stdout) {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

/// Prints one line per outcome with the verdict marker colorized:
/// PASS in green, FAIL in red.
pub fn print_outcomes(outcomes: &[TestOutcome], no_color: bool) -> Result<(), ReportError> {
    let mut stdout = StandardStream::stdout(color_choice(no_color));

    for outcome in outcomes {
        let color = if outcome.passed {
            Color::Green
        } else {
            Color::Red
        };
        write!(stdout, "{}: ", outcome.label)?;
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        write!(stdout, "{}", outcome.marker())?;
        let _ = stdout.reset();
        writeln!(stdout, " ({} ms)", outcome.elapsed_ms)?;
    }
    Ok(())
}

/// Prints the aggregate pass/fail counts after the per-outcome lines.
pub fn print_summary(summary: &RunSummary, no_color: bool) -> Result<(), ReportError> {
    let mut stdout = StandardStream::stdout(color_choice(no_color));

    let color = if summary.has_failures() {
        Color::Red
    } else {
        Color::Green
    };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    writeln!(
        stdout,
        "{} passed, {} failed ({:.0}%)",
        summary.passed,
        summary.failed,
        summary.success_rate()
    )?;
    let _ = stdout.reset();
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    outcomes: &'a [TestOutcome],
    summary: &'a RunSummary,
}

/// Serializes the full report to stdout as pretty-printed JSON.
pub fn print_json(outcomes: &[TestOutcome], summary: &RunSummary) -> Result<(), ReportError> {
    let report = JsonReport { outcomes, summary };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
