//! Core types for the document Q&A pipeline

pub mod document;
pub mod query;
pub mod response;

pub use document::{Document, FileType, Passage, PassageSource};
pub use query::Question;
pub use response::{Answer, Citation, TranscriptEntry, NOT_FOUND_ANSWER};
