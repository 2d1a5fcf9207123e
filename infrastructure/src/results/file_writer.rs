//! Plain-text result file writer

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use warband_application::{ResultSink, ResultSinkError};

/// Writes the result summary to a fixed file, replacing previous content.
#[derive(Debug, Clone)]
pub struct FileResultWriter {
    path: PathBuf,
}

impl FileResultWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for FileResultWriter {
    fn persist(&self, summary: &str) -> Result<(), ResultSinkError> {
        fs::write(&self.path, summary).map_err(|e| ResultSinkError {
            location: self.location(),
            message: e.to_string(),
        })?;
        info!("Results written to {}", self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
