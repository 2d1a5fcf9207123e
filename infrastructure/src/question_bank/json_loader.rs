//! JSON question bank loader
//!
//! Reads a file shaped as:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "question": "How do you settle a disagreement?",
//!     "options": [
//!       { "text": "Whoever hits hardest is right", "category": "Ork" },
//!       { "text": "Consult the Codex Astartes", "category": "Space Marine" }
//!     ]
//!   }
//! ]
//! ```
//!
//! Unknown categories, missing fields, and empty option lists are all
//! rejected at load time.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use warband_application::{QuestionSource, QuestionSourceError};
use warband_domain::{Question, QuestionBank};

/// Question source backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonQuestionBank {
    path: PathBuf,
}

impl JsonQuestionBank {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse question bank JSON without touching the file system
    pub fn parse(content: &str, location: &str) -> Result<QuestionBank, QuestionSourceError> {
        let questions: Vec<Question> =
            serde_json::from_str(content).map_err(|e| QuestionSourceError::Malformed {
                location: location.to_string(),
                message: e.to_string(),
            })?;

        Ok(QuestionBank::new(questions)?)
    }
}

impl QuestionSource for JsonQuestionBank {
    fn load(&self) -> Result<QuestionBank, QuestionSourceError> {
        let location = self.location();

        if !self.path.exists() {
            return Err(QuestionSourceError::NotFound(location));
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| QuestionSourceError::Unreadable {
                location: location.clone(),
                message: e.to_string(),
            })?;
        debug!("Read {} bytes from {}", content.len(), location);

        Self::parse(&content, &location)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
