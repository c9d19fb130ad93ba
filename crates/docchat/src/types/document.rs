//! Document and passage types with source tracking for citations

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supported file types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// PDF document
    Pdf,
    /// Plain text file
    Txt,
    /// PowerPoint presentation (.pptx)
    Pptx,
    /// Unknown file type
    Unknown,
}

impl FileType {
    /// Detect file type from extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "txt" | "text" => Self::Txt,
            "pptx" => Self::Pptx,
            _ => Self::Unknown,
        }
    }

    /// Detect file type from a filename
    pub fn from_filename(filename: &str) -> Self {
        let extension = filename.rsplit('.').next().unwrap_or("");
        // A name without any dot has no extension
        if extension == filename {
            return Self::Unknown;
        }
        Self::from_extension(extension)
    }

    /// Check if this is a supported file type
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Pdf => "PDF",
            Self::Txt => "Text File",
            Self::Pptx => "PowerPoint (.pptx)",
            Self::Unknown => "Unknown",
        }
    }
}

/// A document that has been loaded into the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document ID
    pub id: Uuid,
    /// Filename as given at the upload boundary
    pub filename: String,
    /// File type
    pub file_type: FileType,
    /// Content hash of the extracted text
    pub content_hash: String,
    /// Total number of pages or slides (if the format has them)
    pub total_pages: Option<u32>,
    /// Number of passages derived from this document
    pub total_passages: u32,
    /// File size in bytes
    pub file_size: u64,
    /// Load timestamp
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

impl Document {
    /// Create a new document record
    pub fn new(
        filename: String,
        file_type: FileType,
        content_hash: String,
        file_size: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            file_type,
            content_hash,
            total_pages: None,
            total_passages: 0,
            file_size,
            loaded_at: chrono::Utc::now(),
        }
    }
}

/// Source information for a passage (used for citations)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassageSource {
    /// Filename of the owning document
    pub filename: String,
    /// File type of the owning document
    pub file_type: FileType,
    /// Page or slide number (1-indexed) when the format has them
    pub page_number: Option<u32>,
}

impl PassageSource {
    /// Format source for display, e.g. "deck.pptx, Slide 3"
    pub fn format_citation(&self) -> String {
        match (self.file_type, self.page_number) {
            (FileType::Pptx, Some(n)) => format!("{}, Slide {}", self.filename, n),
            (_, Some(n)) => format!("{}, Page {}", self.filename, n),
            (_, None) => self.filename.clone(),
        }
    }
}

/// One line-derived text segment from a document, the atomic unit of
/// relevance scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passage {
    /// Unique passage ID
    pub id: Uuid,
    /// Parent document ID
    pub document_id: Uuid,
    /// Text content
    pub text: String,
    /// Source information for citations
    pub source: PassageSource,
    /// Position within the document (0-based, document order)
    pub index: u32,
}

impl Passage {
    /// Create a new passage
    pub fn new(document_id: Uuid, text: String, source: PassageSource, index: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_id,
            text,
            source,
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_file_type_from_filename() {
        assert_eq!(FileType::from_filename("report.PDF"), FileType::Pdf);
        assert_eq!(FileType::from_filename("notes.txt"), FileType::Txt);
        assert_eq!(FileType::from_filename("deck.pptx"), FileType::Pptx);
        assert_eq!(FileType::from_filename("notes.xyz"), FileType::Unknown);
        assert_eq!(FileType::from_filename("README"), FileType::Unknown);
    }

    #[test]
    fn citation_names_slides_and_pages() {
        let slide = PassageSource {
            filename: "deck.pptx".into(),
            file_type: FileType::Pptx,
            page_number: Some(2),
        };
        assert_eq!(slide.format_citation(), "deck.pptx, Slide 2");

        let page = PassageSource {
            filename: "report.pdf".into(),
            file_type: FileType::Pdf,
            page_number: Some(7),
        };
        assert_eq!(page.format_citation(), "report.pdf, Page 7");

        let text = PassageSource {
            filename: "notes.txt".into(),
            file_type: FileType::Txt,
            page_number: None,
        };
        assert_eq!(text.format_citation(), "notes.txt");
    }
}
