//! Metadata reporter
//!
//! Exposes the validator's static descriptor so an orchestrator can discover
//! its name, version and parameters without running a validation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::error::ValidatorError;

/// Read the descriptor at `path` as raw bytes.
pub fn read_descriptor(path: &Path) -> Result<Vec<u8>, ValidatorError> {
    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ValidatorError::DescriptorMissing {
            path: path.to_path_buf(),
        },
        _ => ValidatorError::DescriptorRead {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Copy the descriptor at `path` verbatim into `out`.
pub fn describe<W: Write>(path: &Path, out: &mut W) -> Result<(), ValidatorError> {
    let bytes = read_descriptor(path)?;
    debug!(descriptor = %path.display(), bytes = bytes.len(), "Emitting descriptor");

    out.write_all(&bytes).map_err(ValidatorError::Stdout)?;
    out.flush().map_err(ValidatorError::Stdout)
}
