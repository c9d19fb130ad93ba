//! docchat: offline document Q&A with lexical retrieval and source citations
//!
//! Load PDF, plain-text, or PowerPoint documents, ask questions in plain
//! language, and get short multi-point answers assembled from the most
//! relevant passages. Relevance is plain keyword overlap, fully offline:
//! no embeddings, no model, no network.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod retrieval;
pub mod session;
pub mod types;

pub use config::ChatConfig;
pub use error::{Error, Result};
pub use session::Session;
pub use types::{
    document::{Document, FileType, Passage, PassageSource},
    query::Question,
    response::{Answer, Citation, TranscriptEntry},
};
