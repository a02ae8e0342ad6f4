//! Describe command - prints the validator descriptor to stdout

use anyhow::{Context, Result};
use std::io;

use crate::config::ValidatorConfig;
use crate::metadata;

/// Execute description mode
pub fn execute(config: &ValidatorConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    metadata::describe(&config.metadata_path, &mut out).context("Cannot describe validator")
}
