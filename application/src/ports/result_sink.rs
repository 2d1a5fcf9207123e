//! Result sink port
//!
//! Persists the plain-text summary of a finished attempt. Each call
//! replaces whatever was stored before.

use thiserror::Error;

/// Failure to persist the result summary
#[derive(Error, Debug)]
#[error("Failed to write results to {location}: {message}")]
pub struct ResultSinkError {
    pub location: String,
    pub message: String,
}

/// Port for persisting the result summary
pub trait ResultSink: Send + Sync {
    /// Overwrite the stored summary with `summary`
    fn persist(&self, summary: &str) -> Result<(), ResultSinkError>;

    /// Human-readable location shown after a successful write
    fn location(&self) -> String;
}
