//! Validation predicates applied to individual files

pub mod word_count;

use std::path::Path;

use crate::error::RuleError;

pub use word_count::WordCountRule;

/// Result of a rule that managed to judge a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// The file satisfies the rule; the text becomes an `info` message
    Pass(String),
    /// The file violates the rule; the text becomes an `error` message
    Fail(String),
}

impl Evaluation {
    pub fn passed(&self) -> bool {
        matches!(self, Evaluation::Pass(_))
    }
}

/// A pass/fail rule applied independently to each file of a work order.
///
/// Implementations must not keep state between calls: the runner may
/// evaluate files in any order and expects each verdict to depend only on
/// the file it was given.
pub trait Rule {
    /// Human-readable validator name used in lifecycle messages
    fn name(&self) -> &str;

    /// Judge the file at `path`.
    ///
    /// `Err` means the file could not be judged at all; the runner records
    /// it as a failed file.
    fn evaluate(&self, path: &Path) -> Result<Evaluation, RuleError>;
}
