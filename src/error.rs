//! Error tiers of the validation protocol.
//!
//! - [`RuleError`]: one file could not be judged. Becomes a failed file result.
//! - [`RunFault`]: the run could not be carried out. Becomes a failed report.
//! - [`ValidatorError`]: no report can be delivered. Ends the process.

use std::io;
use std::path::PathBuf;

/// Fault raised while evaluating a single file
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Path is not a file or does not exist: {path}")]
    NotAFile { path: String },

    #[error("{source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("rule panicked: {message}")]
    Panicked { message: String },
}

/// Fault that aborts the run and forces a failed report
#[derive(Debug, thiserror::Error)]
pub enum RunFault {
    #[error("Input file not found at {}", path.display())]
    InputMissing { path: PathBuf },

    #[error("Failed to read input file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input JSON is malformed or does not match the work order schema: {0}")]
    InputMalformed(#[from] serde_json::Error),

    #[error("Input JSON must contain a non-empty 'files' array for file mode.")]
    EmptyFileList,

    #[error("Input JSON 'files' array contains no entry with a usable 'path'.")]
    NoUsableFiles,
}

/// Environment failure that prevents any report from being delivered
#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    #[error("Metadata file not found at expected location ({}).", path.display())]
    DescriptorMissing { path: PathBuf },

    #[error("Failed to read metadata file {}", path.display())]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to standard output")]
    Stdout(#[source] io::Error),

    #[error("Failed to serialize run report")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write output JSON to {}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
