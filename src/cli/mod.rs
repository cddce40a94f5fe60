//! The Verdict Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use clap::Parser;
use std::process;

use crate::cli::args::{Command, VerdictArgs};
use crate::errors::ReportError;
use crate::outcome::RunSummary;
use crate::reporter::Reporter;
use crate::sink::OutputBuffer;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = VerdictArgs::parse();

    let result = match args.command {
        Command::Selftest { json, no_color } => handle_selftest(json, no_color),
    };

    match result {
        Ok(summary) if summary.has_failures() => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Handles the `selftest` subcommand: replays one deliberately passing and
/// one deliberately failing comparison through the real reporter.
fn handle_selftest(json: bool, no_color: bool) -> Result<RunSummary, ReportError> {
    let mut reporter = Reporter::new(OutputBuffer::new());

    // Measure passed time between each test_result call from now on.
    reporter.start_timer();

    reporter.test_result("verdict: successful test", "OK", "OK");
    reporter.test_result("verdict: failed test", "OK", "not OK");

    let summary = reporter.summary().clone();
    if json {
        output::print_json(reporter.outcomes(), &summary)?;
    } else {
        output::print_outcomes(reporter.outcomes(), no_color)?;
        output::print_summary(&summary, no_color)?;
    }
    Ok(summary)
}
