//! The reporter context object.
//!
//! Holds the last timer-reset instant explicitly rather than in process-wide
//! state, so elapsed-time attribution stays correct if callers ever run
//! reporters side by side.

use std::fmt::Debug;
use std::time::Instant;

use crate::outcome::{RunSummary, TestOutcome};
use crate::sink::OutputSink;

/// Compares expected and actual values and emits one PASS/FAIL line per
/// comparison, timed against the most recent [`start_timer`] call.
///
/// The timer starts at construction, so calling [`test_result`] before any
/// [`start_timer`] measures from reporter creation.
///
/// [`start_timer`]: Reporter::start_timer
/// [`test_result`]: Reporter::test_result
pub struct Reporter<S: OutputSink> {
    sink: S,
    timer: Instant,
    outcomes: Vec<TestOutcome>,
    summary: RunSummary,
}

impl<S: OutputSink> Reporter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            timer: Instant::now(),
            outcomes: Vec::new(),
            summary: RunSummary::default(),
        }
    }

    /// Resets the elapsed-time baseline for subsequent outcomes.
    pub fn start_timer(&mut self) {
        self.timer = Instant::now();
    }

    /// Compares `expected` and `actual` by value equality and emits one
    /// outcome line. A mismatch is a FAIL outcome, never an error.
    pub fn test_result<T: PartialEq + Debug>(&mut self, label: &str, expected: T, actual: T) {
        let outcome = TestOutcome {
            label: label.to_string(),
            passed: expected == actual,
            elapsed_ms: self.timer.elapsed().as_millis(),
        };
        self.sink.emit(&outcome.to_line());
        self.summary.record(&outcome);
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Releases the sink, for callers that need the captured output back.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
