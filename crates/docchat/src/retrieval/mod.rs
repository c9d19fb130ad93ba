//! Passage retrieval by lexical relevance

mod scorer;

pub use scorer::{KeywordScorer, ScoredPassage};
