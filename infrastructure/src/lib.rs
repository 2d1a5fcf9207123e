//! Infrastructure layer for warband-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod question_bank;
pub mod results;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileOutputConfig, FileQuizConfig, Severity,
};
pub use question_bank::JsonQuestionBank;
pub use results::FileResultWriter;
