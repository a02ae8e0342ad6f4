//! Validator configuration
//!
//! All artifact locations are fixed by the GDI runtime's mount conventions.
//! The config is built once at startup and handed to the runner and the
//! metadata reporter, so tests can point them at temporary paths.

use std::path::{Path, PathBuf};

/// Work order location inside the validator container
pub const DEFAULT_INPUT_PATH: &str = "/mnt/input/input.json";

/// Report location inside the validator container
pub const DEFAULT_OUTPUT_PATH: &str = "/mnt/output/result.json";

/// Descriptor location installed by the container image
pub const DEFAULT_METADATA_PATH: &str = "/usr/local/share/metadata.json";

pub const DEFAULT_MIN_WORDS: usize = 500;
pub const DEFAULT_MAX_WORDS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub metadata_path: PathBuf,
    /// Inclusive lower word-count bound
    pub min_words: usize,
    /// Inclusive upper word-count bound
    pub max_words: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl ValidatorConfig {
    pub fn with_input_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.input_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_output_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_metadata_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.metadata_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_word_bounds(mut self, min_words: usize, max_words: usize) -> Self {
        self.min_words = min_words;
        self.max_words = max_words;
        self
    }

    /// Config rooted in `dir`, using `input.json`, `output/result.json` and
    /// `metadata.json` beneath it.
    pub fn rooted_at<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self::default()
            .with_input_path(dir.join("input.json"))
            .with_output_path(dir.join("output").join("result.json"))
            .with_metadata_path(dir.join("metadata.json"))
    }
}
