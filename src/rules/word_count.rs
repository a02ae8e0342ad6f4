//! Word-count rule: a file passes when its whitespace-delimited token count
//! lies within an inclusive range.

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use super::{Evaluation, Rule};
use crate::config::{ValidatorConfig, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS};
use crate::error::RuleError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountRule {
    min_words: usize,
    max_words: usize,
}

impl Default for WordCountRule {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORDS, DEFAULT_MAX_WORDS)
    }
}

impl WordCountRule {
    pub fn new(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words,
            max_words,
        }
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self::new(config.min_words, config.max_words)
    }

    pub fn bounds(&self) -> RangeInclusive<usize> {
        self.min_words..=self.max_words
    }

    /// Judge already-loaded text
    pub fn evaluate_text(&self, content: &str) -> Evaluation {
        let count = count_words(content);
        if self.bounds().contains(&count) {
            Evaluation::Pass(format!(
                "Word count is {count}. Criteria ({}-{}) met.",
                self.min_words, self.max_words
            ))
        } else {
            Evaluation::Fail(format!(
                "Word count is {count}. Expected between {} and {}.",
                self.min_words, self.max_words
            ))
        }
    }
}

impl Rule for WordCountRule {
    fn name(&self) -> &str {
        "Word Count Validator"
    }

    fn evaluate(&self, path: &Path) -> Result<Evaluation, RuleError> {
        if !path.is_file() {
            return Err(RuleError::NotAFile {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| RuleError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Ok(self.evaluate_text(&content))
    }
}

/// Number of tokens separated by Unicode whitespace
pub fn count_words(content: &str) -> usize {
    content.split_whitespace().count()
}
