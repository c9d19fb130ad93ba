//! Answer and transcript types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::{FileType, Passage};

/// Fixed answer text used when no passage is relevant enough
pub const NOT_FOUND_ANSWER: &str =
    "I couldn't find relevant information in the loaded documents to answer this question.";

/// Citation pointing at the passage an answer point came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    /// Passage ID
    pub passage_id: Uuid,
    /// Document ID
    pub document_id: Uuid,
    /// Source filename
    pub filename: String,
    /// File type
    pub file_type: FileType,
    /// Page or slide number (if applicable)
    pub page_number: Option<u32>,
    /// Passage position within its document
    pub passage_index: u32,
    /// Exact snippet from the source
    pub snippet: String,
    /// Keyword overlap score the passage earned
    pub score: usize,
}

impl Citation {
    /// Create a citation from a passage and its score
    pub fn from_passage(passage: &Passage, score: usize) -> Self {
        Self {
            passage_id: passage.id,
            document_id: passage.document_id,
            filename: passage.source.filename.clone(),
            file_type: passage.source.file_type,
            page_number: passage.source.page_number,
            passage_index: passage.index,
            snippet: passage.text.clone(),
            score,
        }
    }

    /// Format citation for display in text
    pub fn format_inline(&self) -> String {
        format!("[Source: {}]", self.source_label())
    }

    fn source_label(&self) -> String {
        match (self.file_type, self.page_number) {
            (FileType::Pptx, Some(n)) => format!("{}, Slide {}", self.filename, n),
            (_, Some(n)) => format!("{}, Page {}", self.filename, n),
            (_, None) => self.filename.clone(),
        }
    }
}

/// An answer assembled from the top-scoring passages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Ordered answer points (bounded by the configured maximum)
    pub points: Vec<String>,
    /// Citations for the passages that contributed points
    pub citations: Vec<Citation>,
}

impl Answer {
    /// Create an answer from points and their citations
    pub fn new(points: Vec<String>, citations: Vec<Citation>) -> Self {
        Self { points, citations }
    }

    /// The fixed answer returned when nothing relevant was found
    pub fn not_found() -> Self {
        Self {
            points: vec![NOT_FOUND_ANSWER.to_string()],
            citations: Vec::new(),
        }
    }

    /// True if this is the fixed not-found answer
    pub fn is_not_found(&self) -> bool {
        self.citations.is_empty()
            && self.points.len() == 1
            && self.points[0] == NOT_FOUND_ANSWER
    }
}

/// One question/answer pair in the session transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Ordinal position in the transcript (0-based)
    pub index: u32,
    /// The question as typed
    pub question: String,
    /// The synthesized answer
    pub answer: Answer,
    /// When the question was asked
    pub asked_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::document::PassageSource;

    #[test]
    fn not_found_answer_is_fixed() {
        let answer = Answer::not_found();
        assert!(answer.is_not_found());
        assert_eq!(answer.points, vec![NOT_FOUND_ANSWER.to_string()]);
        assert!(answer.citations.is_empty());
    }

    #[test]
    fn citation_carries_passage_provenance() {
        let passage = Passage::new(
            Uuid::new_v4(),
            "Revenue grew 20% in Q1.".into(),
            PassageSource {
                filename: "report.pdf".into(),
                file_type: FileType::Pdf,
                page_number: Some(3),
            },
            7,
        );
        let citation = Citation::from_passage(&passage, 2);

        assert_eq!(citation.passage_id, passage.id);
        assert_eq!(citation.document_id, passage.document_id);
        assert_eq!(citation.passage_index, 7);
        assert_eq!(citation.score, 2);
        assert_eq!(citation.format_inline(), "[Source: report.pdf, Page 3]");
    }
}
