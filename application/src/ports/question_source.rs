//! Question source port
//!
//! Loads the [`QuestionBank`] once at startup. Any failure here is a
//! startup-fatal data format error.

use thiserror::Error;
use warband_domain::{DomainError, QuestionBank};

/// Why the question bank could not be loaded
#[derive(Error, Debug)]
pub enum QuestionSourceError {
    #[error("Question bank not found at {0}")]
    NotFound(String),

    #[error("Failed to read question bank {location}: {message}")]
    Unreadable { location: String, message: String },

    #[error("Malformed question bank {location}: {message}")]
    Malformed { location: String, message: String },

    #[error("Invalid question bank: {0}")]
    InvalidShape(#[from] DomainError),
}

/// Port for loading the question bank
pub trait QuestionSource: Send + Sync {
    /// Load and validate the full question bank
    fn load(&self) -> Result<QuestionBank, QuestionSourceError>;

    /// Human-readable location of the source (for logs and errors)
    fn location(&self) -> String;
}
