//! Interactive session state
//!
//! A `Session` owns the loaded documents (with their cached passages) and the
//! question/answer transcript, and runs the full pipeline for each question.
//! It is plain owned state mutated through `&mut self`: one session, one user,
//! one request at a time.

use std::path::Path;

use crate::config::ChatConfig;
use crate::error::{Error, Result};
use crate::generation::AnswerSynthesizer;
use crate::ingestion::{FileParser, PassageSplitter};
use crate::retrieval::KeywordScorer;
use crate::types::{Answer, Document, Passage, Question, TranscriptEntry};

/// A document together with its derived passages.
///
/// Passages are regenerated whenever the document is (re)loaded and dropped
/// with it; they never outlive their document.
#[derive(Debug, Clone)]
struct LoadedDocument {
    document: Document,
    passages: Vec<Passage>,
}

/// One interactive question-answering session
pub struct Session {
    scorer: KeywordScorer,
    synthesizer: AnswerSynthesizer,
    documents: Vec<LoadedDocument>,
    transcript: Vec<TranscriptEntry>,
}

impl Session {
    /// Create a session from configuration
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            scorer: KeywordScorer::new(&config.scoring),
            synthesizer: AnswerSynthesizer::new(&config.synthesis),
            documents: Vec::new(),
            transcript: Vec::new(),
        }
    }

    /// Load a document from raw bytes.
    ///
    /// Re-loading a filename already in the session replaces that document and
    /// regenerates its passages in place. A parse failure leaves the session
    /// untouched; other loaded documents stay usable.
    pub fn load_document(&mut self, filename: &str, bytes: &[u8]) -> Result<Document> {
        let parsed = FileParser::parse(filename, bytes)?;

        let mut document = Document::new(
            filename.to_string(),
            parsed.file_type,
            parsed.content_hash.clone(),
            bytes.len() as u64,
        );
        document.total_pages = parsed.total_pages;

        let passages = PassageSplitter::split_document(&document, &parsed);
        document.total_passages = passages.len() as u32;

        tracing::info!(
            "loaded {} ({}): {} passages",
            document.filename,
            document.file_type.display_name(),
            document.total_passages,
        );

        let loaded = LoadedDocument {
            document: document.clone(),
            passages,
        };

        match self
            .documents
            .iter()
            .position(|d| d.document.filename == filename)
        {
            Some(i) => self.documents[i] = loaded,
            None => self.documents.push(loaded),
        }

        Ok(document)
    }

    /// Load a document from a filesystem path
    pub fn load_path(&mut self, path: &Path) -> Result<Document> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| Error::UnsupportedFileType(path.display().to_string()))?;
        let bytes = std::fs::read(path)?;
        self.load_document(&filename, &bytes)
    }

    /// Answer a question against the loaded documents.
    ///
    /// The answer is appended to the transcript and returned. Blank or
    /// all-stopword questions produce the fixed not-found answer; they are
    /// never an error.
    pub fn ask(&mut self, question: &str) -> Answer {
        let question = Question::new(question);

        let answer = if question.is_blank() {
            Answer::not_found()
        } else {
            let passages: Vec<Passage> = self
                .documents
                .iter()
                .flat_map(|d| d.passages.iter().cloned())
                .collect();
            let ranked = self.scorer.score(&passages, &question.text);
            self.synthesizer.synthesize(&ranked)
        };

        self.transcript.push(TranscriptEntry {
            index: self.transcript.len() as u32,
            question: question.text,
            answer: answer.clone(),
            asked_at: chrono::Utc::now(),
        });

        answer
    }

    /// Remove a document (and its passages) by filename
    pub fn remove_document(&mut self, filename: &str) -> bool {
        let before = self.documents.len();
        self.documents.retain(|d| d.document.filename != filename);
        before != self.documents.len()
    }

    /// Clear all documents and the transcript
    pub fn clear(&mut self) {
        tracing::info!("session cleared");
        self.documents.clear();
        self.transcript.clear();
    }

    /// Loaded documents, in load order
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().map(|d| &d.document)
    }

    /// Number of loaded documents
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Total number of cached passages across all documents
    pub fn passage_count(&self) -> usize {
        self.documents.iter().map(|d| d.passages.len()).sum()
    }

    /// The append-only question/answer transcript
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Serialize the transcript as pretty-printed JSON
    pub fn export_transcript(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.transcript)?)
    }

    /// Write the transcript to a file as JSON
    pub fn save_transcript(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.export_transcript()?)?;
        Ok(())
    }
}
