//! Line-based passage splitting
//!
//! Cleaned document text becomes one passage per non-blank line, indexed in
//! document order. Passages are regenerated wholesale whenever their document
//! is (re)loaded, never mutated in place.

use crate::types::{Document, Passage, PassageSource};

use super::noise;
use super::parser::ParsedDocument;

/// Splits parsed documents into scoring passages
pub struct PassageSplitter;

impl PassageSplitter {
    /// Split a parsed document into passages.
    ///
    /// Each page is run through the page-number noise filter first, then split
    /// on line boundaries; lines that are empty after trimming are discarded.
    /// Indices are 0-based across the whole document.
    pub fn split_document(doc: &Document, parsed: &ParsedDocument) -> Vec<Passage> {
        let mut passages = Vec::new();

        for page in &parsed.pages {
            let cleaned = noise::strip_page_numbers(&page.content);
            for line in split_lines(&cleaned) {
                let source = PassageSource {
                    filename: doc.filename.clone(),
                    file_type: doc.file_type,
                    page_number: page.page_number,
                };
                let index = passages.len() as u32;
                passages.push(Passage::new(doc.id, line, source, index));
            }
        }

        passages
    }
}

/// Trimmed, non-empty lines of `text`, in order
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
