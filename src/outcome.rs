//! Outcome and summary types produced by the reporter.

use serde::Serialize;

/// The result of a single comparison: label, verdict, and elapsed time
/// since the last timer reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestOutcome {
    pub label: String,
    pub passed: bool,
    pub elapsed_ms: u128,
}

impl TestOutcome {
    /// Renders the canonical one-line form: `<label>: <PASS|FAIL> (<n> ms)`.
    pub fn to_line(&self) -> String {
        format!("{}: {} ({} ms)", self.label, self.marker(), self.elapsed_ms)
    }

    pub fn marker(&self) -> &'static str {
        if self.passed {
            "PASS"
        } else {
            "FAIL"
        }
    }
}

/// Aggregate pass/fail counts for a reporting run.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &TestOutcome) {
        if outcome.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn success_rate(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        (self.passed as f64 / self.total() as f64) * 100.0
    }
}
