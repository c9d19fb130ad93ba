//! Question types

use serde::{Deserialize, Serialize};

/// A question submitted by the user
///
/// Ephemeral: exists only for one answer-generation call. Keyword extraction
/// lives in the scorer so tokenization policy stays in one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Raw question text
    pub text: String,
}

impl Question {
    /// Create a new question
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// True if the question contains no non-whitespace characters
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl From<&str> for Question {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
