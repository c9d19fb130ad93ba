//! Answer synthesis from ranked passages
//!
//! No generation model: the answer is assembled from sentence-level units of
//! the top-scoring passages, in rank order, formatted as a bounded list of
//! points with the contributing passages attached as citations.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::config::SynthesisConfig;
use crate::retrieval::ScoredPassage;
use crate::types::{Answer, Citation};

/// Builds answers from scored passages
pub struct AnswerSynthesizer {
    max_points: usize,
    min_sentence_len: usize,
}

impl AnswerSynthesizer {
    /// Create a synthesizer from configuration
    pub fn new(config: &SynthesisConfig) -> Self {
        Self {
            max_points: config.max_points,
            min_sentence_len: config.min_sentence_len,
        }
    }

    /// Assemble an answer from ranked passages.
    ///
    /// Sentences are taken in passage rank order, then sentence order within a
    /// passage; near-identical sentences (case-insensitive exact match) are
    /// kept once. An empty ranking, or one whose passages yield no usable
    /// sentence, produces the fixed not-found answer.
    pub fn synthesize(&self, scored: &[ScoredPassage]) -> Answer {
        if scored.is_empty() {
            return Answer::not_found();
        }

        let mut points: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut citations: Vec<Citation> = Vec::new();

        'passages: for entry in scored {
            let mut contributed = false;

            for sentence in entry.passage.text.split_sentence_bounds() {
                let sentence = sentence.trim();
                if sentence.chars().count() < self.min_sentence_len {
                    continue;
                }
                if !seen.insert(sentence.to_lowercase()) {
                    continue;
                }

                points.push(sentence.to_string());
                contributed = true;

                if points.len() == self.max_points {
                    citations.push(Citation::from_passage(&entry.passage, entry.score));
                    break 'passages;
                }
            }

            if contributed {
                citations.push(Citation::from_passage(&entry.passage, entry.score));
            }
        }

        if points.is_empty() {
            return Answer::not_found();
        }

        Answer::new(points, citations)
    }
}
