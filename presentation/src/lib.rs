//! Presentation layer for warband-quiz
//!
//! This crate contains the CLI definition, console output formatting, and
//! the terminal answer readers.

pub mod cli;
pub mod config;
pub mod input;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use input::{ConsoleInput, PipedInput, TerminalInput};
pub use output::console::ConsoleFormatter;
pub use output::presenter::ConsolePresenter;
