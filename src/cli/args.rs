//! Defines the command-line arguments and subcommands for the Verdict CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "verdict",
    version,
    about = "A PASS/FAIL result reporter with elapsed-time tracking."
)]
pub struct VerdictArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Exercise the reporter against itself: one passing and one failing
    /// comparison, reported with timing.
    Selftest {
        /// Emit recorded outcomes and the summary as JSON instead of text.
        #[arg(long)]
        json: bool,
        /// Disable colored output even on a terminal.
        #[arg(long)]
        no_color: bool,
    },
}
