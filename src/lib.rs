pub use crate::errors::ReportError;
pub use crate::outcome::{RunSummary, TestOutcome};
pub use crate::reporter::Reporter;
pub use crate::sink::{OutputBuffer, OutputSink, StdoutSink};

pub mod cli;
pub mod errors;
pub mod outcome;
pub mod reporter;
pub mod sink;
