//! Configuration file loading for warband-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WARBAND_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./warband.toml` or `./.warband.toml`
//! 4. Global: `$XDG_CONFIG_HOME/warband-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigIssue, FileConfig, FileOutputConfig, FileQuizConfig, Severity};
pub use loader::ConfigLoader;
