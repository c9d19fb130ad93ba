//! Configuration for the document Q&A pipeline

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Main chat configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Relevance scoring configuration
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Answer synthesis configuration
    #[serde(default)]
    pub synthesis: SynthesisConfig,
}

impl ChatConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&raw).map_err(|e| Error::config(e.to_string()))
    }
}

/// Relevance scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Number of top-scoring passages carried forward to synthesis
    pub top_n: usize,
    /// Minimum keyword length in characters (shorter question tokens are dropped)
    pub min_keyword_len: usize,
    /// Stopword list; `None` uses the built-in default list
    pub stopwords: Option<Vec<String>>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            min_keyword_len: 3,
            stopwords: None,
        }
    }
}

/// Answer synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Maximum number of answer points
    pub max_points: usize,
    /// Minimum sentence length in characters (shorter fragments are skipped)
    pub min_sentence_len: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_points: 6,
            min_sentence_len: 10,
        }
    }
}

/// Default English stopword list used when the configuration does not supply one.
///
/// Question words are filtered too: for lexical matching, "what happened to
/// revenue" should score on "happened" and "revenue", not on "what".
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "nor", "not", "of", "to", "in", "on",
    "at", "by", "for", "with", "from", "into", "about", "over", "under", "out",
    "off", "up", "down", "than", "then", "that", "this", "these", "those", "is",
    "are", "was", "were", "be", "been", "being", "am", "do", "does", "did",
    "has", "have", "had", "can", "could", "will", "would", "shall", "should",
    "may", "might", "must", "its", "his", "her", "their", "our", "your", "my",
    "it", "he", "she", "they", "we", "you", "who", "whom", "whose", "what",
    "which", "when", "where", "why", "how", "all", "any", "each", "some",
    "such", "as", "so", "too", "very", "there", "here",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ChatConfig::default();
        assert_eq!(config.scoring.top_n, 5);
        assert_eq!(config.scoring.min_keyword_len, 3);
        assert!(config.scoring.stopwords.is_none());
        assert_eq!(config.synthesis.max_points, 6);
        assert_eq!(config.synthesis.min_sentence_len, 10);
    }

    #[test]
    fn parses_partial_toml() {
        let config: ChatConfig = toml::from_str(
            r#"
            [scoring]
            top_n = 3
            min_keyword_len = 4
            stopwords = ["the", "und"]
            "#,
        )
        .unwrap();

        assert_eq!(config.scoring.top_n, 3);
        assert_eq!(config.scoring.min_keyword_len, 4);
        assert_eq!(
            config.scoring.stopwords.as_deref(),
            Some(&["the".to_string(), "und".to_string()][..])
        );
        // Omitted section falls back to defaults
        assert_eq!(config.synthesis.max_points, 6);
    }

    #[test]
    fn partial_section_fills_remaining_fields_with_defaults() {
        let config: ChatConfig = toml::from_str(
            r#"
            [scoring]
            top_n = 3

            [synthesis]
            max_points = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.scoring.top_n, 3);
        assert_eq!(config.scoring.min_keyword_len, 3);
        assert!(config.scoring.stopwords.is_none());
        assert_eq!(config.synthesis.max_points, 4);
        assert_eq!(config.synthesis.min_sentence_len, 10);
    }

    #[test]
    fn from_file_reports_bad_toml_as_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docchat.toml");
        std::fs::write(&path, "scoring = 12").unwrap();

        let err = ChatConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
