//! Lexical relevance scoring
//!
//! Passages are ranked by keyword overlap with the question: each distinct
//! question keyword found anywhere in a passage's token set counts once,
//! regardless of frequency. Deliberately rule-based and deterministic: no
//! embeddings, no model.

use std::cmp::Reverse;
use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::config::{ScoringConfig, DEFAULT_STOPWORDS};
use crate::types::Passage;

/// A passage paired with its keyword overlap score
#[derive(Debug, Clone)]
pub struct ScoredPassage {
    /// The scored passage
    pub passage: Passage,
    /// Number of distinct question keywords present in the passage
    pub score: usize,
}

/// Scores passages against a question by lexical keyword overlap
pub struct KeywordScorer {
    top_n: usize,
    min_keyword_len: usize,
    stopwords: HashSet<String>,
}

impl KeywordScorer {
    /// Create a scorer from configuration
    pub fn new(config: &ScoringConfig) -> Self {
        let stopwords = match &config.stopwords {
            Some(words) => words.iter().map(|w| w.to_lowercase()).collect(),
            None => DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        };

        Self {
            top_n: config.top_n,
            min_keyword_len: config.min_keyword_len,
            stopwords,
        }
    }

    /// Extract the question's keyword set: lowercase word tokens, minus
    /// stopwords and tokens below the configured minimum length.
    pub fn keywords(&self, question: &str) -> HashSet<String> {
        question
            .unicode_words()
            .map(str::to_lowercase)
            .filter(|w| w.chars().count() >= self.min_keyword_len)
            .filter(|w| !self.stopwords.contains(w))
            .collect()
    }

    /// Score `passages` against `question` and return the top-N matches,
    /// descending by score.
    ///
    /// Zero-score passages are excluded entirely. Ties keep the input order
    /// (the stable sort never reorders equal scores), so earlier passages win.
    /// A question with no scoreable keywords yields an empty result.
    pub fn score(&self, passages: &[Passage], question: &str) -> Vec<ScoredPassage> {
        let keywords = self.keywords(question);
        if keywords.is_empty() {
            tracing::debug!("question has no scoreable keywords: {:?}", question);
            return Vec::new();
        }

        let mut scored: Vec<ScoredPassage> = passages
            .iter()
            .filter_map(|passage| {
                let tokens: HashSet<String> = passage
                    .text
                    .unicode_words()
                    .map(str::to_lowercase)
                    .collect();
                let score = keywords.iter().filter(|k| tokens.contains(*k)).count();
                (score > 0).then(|| ScoredPassage {
                    passage: passage.clone(),
                    score,
                })
            })
            .collect();

        scored.sort_by_key(|s| Reverse(s.score));
        scored.truncate(self.top_n);
        scored
    }
}
