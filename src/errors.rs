//! CLI-layer errors.
//!
//! The reporting API itself never fails; a comparison mismatch is a FAIL
//! outcome, not an error. These variants cover the binary's real failure
//! modes only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
