//! Run report schema (the validator's output artifact)

use serde::{Deserialize, Serialize};
use std::fmt;

use super::message::Message;
use crate::error::RunFault;

/// Pass/fail verdict used for both files and whole runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Passed,
    Failed,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => write!(f, "passed"),
            Verdict::Failed => write!(f, "failed"),
        }
    }
}

/// Outcome for one work item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    /// Path exactly as given in the work order
    pub path: String,
    pub result: Verdict,
    pub messages: Vec<Message>,
}

impl FileResult {
    pub fn passed(path: impl Into<String>, message: Message) -> Self {
        Self {
            path: path.into(),
            result: Verdict::Passed,
            messages: vec![message],
        }
    }

    pub fn failed(path: impl Into<String>, message: Message) -> Self {
        Self {
            path: path.into(),
            result: Verdict::Failed,
            messages: vec![message],
        }
    }

    pub fn is_passed(&self) -> bool {
        self.result == Verdict::Passed
    }
}

/// How the file iteration ended
#[derive(Debug)]
pub enum RunOutcome {
    /// Every usable work item was evaluated
    Completed(Vec<FileResult>),
    /// The run aborted; partial file results are not kept
    Crashed(RunFault),
}

/// Counts of passed and failed files in a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileSummary {
    pub passed: usize,
    pub failed: usize,
}

impl FileSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

impl fmt::Display for FileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Validated {} file(s): {} passed, {} failed.",
            self.total(),
            self.passed,
            self.failed
        )
    }
}

/// The complete, persisted outcome of one validation invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub result: Verdict,
    pub files: Vec<FileResult>,
    pub messages: Vec<Message>,
}

impl RunReport {
    /// Build the final report from the run outcome and the top-level
    /// messages gathered so far.
    ///
    /// A crash always yields `failed` with an empty `files` array. A completed
    /// run passes only when at least one file was evaluated and all passed.
    pub fn from_outcome(outcome: RunOutcome, mut messages: Vec<Message>) -> Self {
        match outcome {
            RunOutcome::Completed(files) => {
                let result = if !files.is_empty() && files.iter().all(FileResult::is_passed) {
                    Verdict::Passed
                } else {
                    Verdict::Failed
                };
                Self {
                    result,
                    files,
                    messages,
                }
            }
            RunOutcome::Crashed(fault) => {
                messages.push(Message::error(format!(
                    "Validator crashed before completing: {fault}"
                )));
                Self {
                    result: Verdict::Failed,
                    files: Vec::new(),
                    messages,
                }
            }
        }
    }

    pub fn passed(&self) -> bool {
        self.result == Verdict::Passed
    }

    pub fn summary(&self) -> FileSummary {
        let passed = self.files.iter().filter(|f| f.is_passed()).count();
        FileSummary {
            passed,
            failed: self.files.len() - passed,
        }
    }

    /// Pretty-printed JSON as written to the output artifact
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
